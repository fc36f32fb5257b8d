//! Prefix-tree dictionary over a declared alphabet.
//!
//! - [`node`] -- trie node with one child slot per alphabet symbol
//! - [`trie`] -- bulk construction and containment queries

pub mod node;
pub mod trie;

pub use node::{NodeId, TrieNode};
pub use trie::Trie;

/// Error type for dictionary construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// A word uses a character that is not part of the declared alphabet.
    #[error("character {character:?} in word {word:?} is not in the alphabet")]
    UnknownCharacter { character: char, word: String },
}
