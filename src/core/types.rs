// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Position of an entry inside a [`PhoneticTable`](crate::core::table::PhoneticTable).
pub type EntryId = usize;

pub const HALANTA: char = '\u{094d}';

/// The sub-table an entry was declared in. The declaration order of the
/// variants is the tie-break order when entries share a key length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubTable {
    /// Consonant carrying a vowel sign, e.g. "ki" -> "कि".
    ConsonantVowel,
    /// Independent vowels, e.g. "aa" -> "आ".
    Vowel,
    /// Bare consonant with a virama, e.g. "k" -> "क्".
    HalfForm,
    /// Multi-consonant clusters and ligatures, e.g. "ksha" -> "क्ष".
    Conjunct,
    Punctuation,
}

/// A single Latin token and the Devanagari cluster it produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    pub key: String,
    pub value: String,
    pub source: SubTable,
}

/// A key that was declared twice with different values. The first
/// declaration is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub key: String,
    pub kept: String,
    pub shadowed: String,
}

/// True for the Devanagari consonant letters, including the nukta forms.
pub fn is_devanagari_consonant(c: char) -> bool {
    matches!(c, '\u{0915}'..='\u{0939}' | '\u{0958}'..='\u{095f}')
}
