//! Composable misspelling checkers over a trie dictionary.
//!
//! Every checker implements [`Checker`]: given a word and a [`Trie`] it
//! returns a [`Verdict`] telling whether the word is flagged and which
//! dictionary words are proposed as corrections.
//!
//! # Architecture
//!
//! - [`checker`] -- the `Checker` trait
//! - [`simple`] -- length gate and exact-match checkers
//! - [`fuzzy`] -- bounded multi-operation fuzzy matcher
//! - [`combinator`] -- `Union` / `Intersect` composition and presets
//! - [`status`] -- deduplicating suggestion collector
//! - [`config`] -- serializable checker trees (feature `config`)
//!
//! ```
//! use triespell::{Alphabet, BoundedFuzzy, Checker, EditBudget, Trie};
//!
//! let trie = Trie::build(["1", "12", "123", "1234"], Alphabet::new("1234")).unwrap();
//! let checker = BoundedFuzzy::new(EditBudget::default().with_insertions(1));
//! let verdict = checker.check("134", &trie);
//! assert!(verdict.is_misspelled());
//! assert_eq!(verdict.suggestions(), ["1234"]);
//! ```

pub mod checker;
pub mod combinator;
#[cfg(feature = "config")]
pub mod config;
pub mod fuzzy;
pub mod simple;
pub mod status;

pub use checker::Checker;
pub use combinator::{Intersect, Union, default_typing_checker, typing_checker};
#[cfg(feature = "config")]
pub use config::{CheckerConfig, ConfigError};
pub use fuzzy::{BoundedFuzzy, EditBudget};
pub use simple::{ExactMatch, LengthGate};
pub use status::SuggestionStatus;

pub use triespell_core::{Alphabet, Symbol, Verdict};
pub use triespell_trie::{Trie, TrieError};
