// --- File: src/core/trie.rs
use crate::core::types::EntryId;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct TrieNode {
    children: HashMap<u8, usize>,
    entry: Option<EntryId>,
}

impl TrieNode {
    fn new() -> Self {
        Self { children: HashMap::new(), entry: None }
    }
}

/// A byte-keyed trie over the phonetic keys, stored as a flat node arena.
/// Keys are matched case-sensitively, byte for byte.
#[derive(Debug, Clone)]
pub struct PhoneticTrie {
    nodes: Vec<TrieNode>,
}

impl Default for PhoneticTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneticTrie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new()] }
    }

    /// Inserts `key` pointing at `entry`, returning the entry previously
    /// stored under the same key, if any.
    /// O(k) complexity where k is key length.
    pub fn insert(&mut self, key: &str, entry: EntryId) -> Option<EntryId> {
        let mut node_idx = 0;
        for &byte in key.as_bytes() {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(&byte) {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(TrieNode::new());
                self.nodes[node_idx].children.insert(byte, new_node_id);
                new_node_id
            };
            node_idx = next_idx;
        }
        self.nodes[node_idx].entry.replace(entry)
    }

    /// Exact lookup of a whole key.
    pub fn get(&self, key: &str) -> Option<EntryId> {
        let mut node_idx = 0;
        for &byte in key.as_bytes() {
            node_idx = *self.nodes[node_idx].children.get(&byte)?;
        }
        self.nodes[node_idx].entry
    }

    /// Walks `input` from its first byte and returns the longest key that is a
    /// prefix of it, as `(key length in bytes, entry)`.
    pub fn longest_match(&self, input: &[u8]) -> Option<(usize, EntryId)> {
        let mut node_idx = 0;
        let mut best = None;
        for (i, byte) in input.iter().enumerate() {
            match self.nodes[node_idx].children.get(byte) {
                Some(&next) => node_idx = next,
                None => break,
            }
            if let Some(entry) = self.nodes[node_idx].entry {
                best = Some((i + 1, entry));
            }
        }
        best
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
