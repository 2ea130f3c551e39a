// src/core/table.rs
//! The phonetic mapping table and the digit table.
//!
//! The standard table is declared as a handful of sub-tables. The
//! consonant-with-vowel forms are generated from consonant rows crossed with
//! the vowel signs; everything else is listed literally.

use crate::core::trie::PhoneticTrie;
use crate::core::types::{Conflict, EntryId, SubTable, TableEntry, HALANTA};
use once_cell::sync::Lazy;
use std::cmp::Reverse;
use std::sync::Arc;
use thiserror::Error;

/// Consonant rows: Latin base and the bare Devanagari letter. Capitalised
/// bases are the retroflex series, lowercase the dental one.
const CONSONANT_ROWS: &[(&str, char)] = &[
    ("k", 'क'), ("kh", 'ख'), ("g", 'ग'), ("gh", 'घ'),
    ("ch", 'च'), ("chh", 'छ'), ("j", 'ज'), ("jh", 'झ'),
    ("T", 'ट'), ("Th", 'ठ'), ("D", 'ड'), ("Dh", 'ढ'), ("N", 'ण'),
    ("t", 'त'), ("th", 'थ'), ("d", 'द'), ("dh", 'ध'), ("n", 'न'),
    ("p", 'प'), ("ph", 'फ'), ("b", 'ब'), ("bh", 'भ'), ("m", 'म'),
    ("y", 'य'), ("r", 'र'), ("l", 'ल'), ("v", 'व'), ("w", 'व'),
    ("sh", 'श'), ("s", 'स'), ("S", 'ष'), ("h", 'ह'),
];

/// Vowel suffixes and the dependent sign they attach. "a" is the inherent
/// vowel and attaches nothing.
const VOWEL_SIGNS: &[(&str, &str)] = &[
    ("a", ""), ("aa", "ा"), ("i", "ि"), ("ee", "ी"), ("u", "ु"),
    ("oo", "ू"), ("e", "े"), ("ai", "ै"), ("o", "ो"), ("au", "ौ"),
];

/// Nasals that only occur with the inherent vowel.
const NASALS: &[(&str, &str)] = &[("nga", "ङ"), ("yna", "ञ")];

const VOWELS: &[(&str, &str)] = &[
    ("a", "अ"), ("aa", "आ"), ("i", "इ"), ("ee", "ई"), ("u", "उ"),
    ("oo", "ऊ"), ("e", "ए"), ("ai", "ऐ"), ("o", "ओ"), ("au", "औ"),
    ("am", "अं"), ("ah", "अः"),
    ("ru", "रु"), ("ri", "रि"), ("Rri", "ऋ"),
];

/// Half forms. Note "c" is च and "ch" is छ here, unlike the full rows.
const HALF_FORMS: &[(&str, char)] = &[
    ("k", 'क'), ("kh", 'ख'), ("g", 'ग'), ("gh", 'घ'),
    ("c", 'च'), ("ch", 'छ'), ("j", 'ज'), ("jh", 'झ'),
    ("T", 'ट'), ("Th", 'ठ'), ("D", 'ड'), ("Dh", 'ढ'), ("N", 'ण'),
    ("t", 'त'), ("th", 'थ'), ("d", 'द'), ("dh", 'ध'), ("n", 'न'),
    ("p", 'प'), ("ph", 'फ'), ("b", 'ब'), ("bh", 'भ'), ("m", 'म'),
    ("y", 'य'), ("r", 'र'), ("l", 'ल'), ("v", 'व'), ("w", 'व'),
    ("sh", 'श'), ("s", 'स'), ("h", 'ह'),
];

const CONJUNCTS: &[(&str, &str)] = &[
    ("ksha", "क्ष"), ("tra", "त्र"), ("gya", "ज्ञ"), ("shra", "श्र"), ("om", "ॐ"),
];

const PUNCTUATION: &[(&str, &str)] = &[(".", "।"), (",", ","), ("?", "?"), ("!", "!")];

static STANDARD_TABLE: Lazy<Arc<PhoneticTable>> = Lazy::new(|| Arc::new(PhoneticTable::standard()));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("phonetic keys must not be empty")]
    EmptyKey,
    #[error("key {key:?} already maps to {existing:?}, refusing {rejected:?}")]
    Conflict { key: String, existing: String, rejected: String },
}

/// Every entry of the standard table, in declaration order.
pub fn standard_entries() -> Vec<TableEntry> {
    let mut out = Vec::new();
    for &(base, letter) in CONSONANT_ROWS {
        for &(suffix, sign) in VOWEL_SIGNS {
            out.push(entry(format!("{base}{suffix}"), format!("{letter}{sign}"), SubTable::ConsonantVowel));
        }
    }
    for &(key, value) in NASALS {
        out.push(entry(key.to_string(), value.to_string(), SubTable::ConsonantVowel));
    }
    for &(key, value) in VOWELS {
        out.push(entry(key.to_string(), value.to_string(), SubTable::Vowel));
    }
    for &(key, letter) in HALF_FORMS {
        out.push(entry(key.to_string(), format!("{letter}{HALANTA}"), SubTable::HalfForm));
    }
    for &(key, value) in CONJUNCTS {
        out.push(entry(key.to_string(), value.to_string(), SubTable::Conjunct));
    }
    for &(key, value) in PUNCTUATION {
        out.push(entry(key.to_string(), value.to_string(), SubTable::Punctuation));
    }
    out
}

fn entry(key: String, value: String, source: SubTable) -> TableEntry {
    TableEntry { key, value, source }
}

/// Accumulates entries and resolves duplicate keys before the table is frozen.
#[derive(Debug, Default)]
pub struct PhoneticTableBuilder {
    entries: Vec<TableEntry>,
    trie: PhoneticTrie,
    conflicts: Vec<Conflict>,
}

impl PhoneticTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, rejecting empty keys and keys that already map to a
    /// different value. Redefining a key with the same value is a no-op.
    pub fn try_insert(&mut self, entry: TableEntry) -> Result<(), TableError> {
        if entry.key.is_empty() {
            return Err(TableError::EmptyKey);
        }
        if let Some(id) = self.trie.get(&entry.key) {
            let existing = &self.entries[id];
            if existing.value == entry.value {
                return Ok(());
            }
            return Err(TableError::Conflict {
                key: entry.key,
                existing: existing.value.clone(),
                rejected: entry.value,
            });
        }
        let id: EntryId = self.entries.len();
        self.trie.insert(&entry.key, id);
        self.entries.push(entry);
        Ok(())
    }

    /// Like [`try_insert`](Self::try_insert), but keeps the first definition
    /// of a conflicting key and records the conflict on the table.
    pub fn insert(&mut self, entry: TableEntry) {
        match self.try_insert(entry) {
            Ok(()) => {}
            Err(TableError::EmptyKey) => {
                tracing::warn!("skipping phonetic entry with an empty key");
            }
            Err(TableError::Conflict { key, existing, rejected }) => {
                tracing::warn!(%key, kept = %existing, shadowed = %rejected, "conflicting phonetic entry");
                self.conflicts.push(Conflict { key, kept: existing, shadowed: rejected });
            }
        }
    }

    pub fn build(self) -> PhoneticTable {
        let max_key_len = self.entries.iter().map(|e| e.key.chars().count()).max().unwrap_or(0);
        tracing::debug!(
            entries = self.entries.len(),
            nodes = self.trie.node_count(),
            conflicts = self.conflicts.len(),
            "phonetic table built"
        );
        PhoneticTable {
            entries: self.entries,
            trie: self.trie,
            conflicts: self.conflicts,
            max_key_len,
        }
    }
}

/// Immutable Latin to Devanagari mapping with longest-match lookup.
#[derive(Debug, Clone)]
pub struct PhoneticTable {
    entries: Vec<TableEntry>,
    trie: PhoneticTrie,
    conflicts: Vec<Conflict>,
    max_key_len: usize,
}

impl PhoneticTable {
    /// Builds the standard Nepali table. Prefer [`PhoneticTable::shared`]
    /// unless a private copy is really needed.
    pub fn standard() -> Self {
        let mut builder = PhoneticTableBuilder::new();
        for entry in standard_entries() {
            builder.insert(entry);
        }
        builder.build()
    }

    /// The process-wide standard table, built on first use.
    pub fn shared() -> Arc<PhoneticTable> {
        Arc::clone(&STANDARD_TABLE)
    }

    /// Longest entry whose key is a prefix of `input`, with the key length in
    /// bytes.
    pub fn longest_match(&self, input: &str) -> Option<(usize, &TableEntry)> {
        self.trie
            .longest_match(input.as_bytes())
            .map(|(len, id)| (len, &self.entries[id]))
    }

    pub fn get(&self, key: &str) -> Option<&TableEntry> {
        self.trie.get(key).map(|id| &self.entries[id])
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    /// Entries by descending key length, ties in declaration order.
    pub fn entries_by_priority(&self) -> Vec<&TableEntry> {
        let mut ordered: Vec<(EntryId, &TableEntry)> = self.entries.iter().enumerate().collect();
        ordered.sort_by_key(|&(id, e)| (Reverse(e.key.chars().count()), id));
        ordered.into_iter().map(|(_, e)| e).collect()
    }

    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the entries in priority order, for a host-side cheat sheet.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.entries_by_priority())
    }
}

/// ASCII digits to Devanagari digits and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitTable {
    digits: [char; 10],
}

impl Default for DigitTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl DigitTable {
    pub const STANDARD: DigitTable = DigitTable {
        digits: ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'],
    };

    pub fn to_devanagari(&self, c: char) -> Option<char> {
        c.to_digit(10).map(|d| self.digits[d as usize])
    }

    pub fn to_ascii(&self, c: char) -> Option<char> {
        let d = self.digits.iter().position(|&x| x == c)?;
        char::from_digit(d as u32, 10)
    }
}
