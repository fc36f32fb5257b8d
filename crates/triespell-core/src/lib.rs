//! Shared types for the triespell crates.
//!
//! - [`alphabet`] -- declared character set with a dense index mapping
//! - [`verdict`] -- the result every checker returns

pub mod alphabet;
pub mod verdict;

pub use alphabet::{Alphabet, Symbol};
pub use verdict::Verdict;
