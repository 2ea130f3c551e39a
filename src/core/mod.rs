pub mod converter;
pub mod engine;
pub mod table;
pub mod trie;
pub mod types;
