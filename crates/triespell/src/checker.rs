// Checker trait: the single operation every strategy and combinator exposes.

use std::sync::Arc;

use triespell_core::Verdict;
use triespell_trie::Trie;

/// Trait for misspelling checkers.
///
/// A checker is a pure function of the word and the dictionary. It holds
/// only its own immutable configuration, so it is `Send + Sync` and can be
/// shared freely between threads, just like the [`Trie`] it reads.
pub trait Checker: Send + Sync {
    /// Check `word` against `dictionary`.
    fn check(&self, word: &str, dictionary: &Trie) -> Verdict;

    /// Shorthand for `check(..).is_misspelled()`.
    fn is_misspelled(&self, word: &str, dictionary: &Trie) -> bool {
        self.check(word, dictionary).is_misspelled()
    }
}

impl<C: Checker + ?Sized> Checker for &C {
    fn check(&self, word: &str, dictionary: &Trie) -> Verdict {
        (**self).check(word, dictionary)
    }
}

impl<C: Checker + ?Sized> Checker for Box<C> {
    fn check(&self, word: &str, dictionary: &Trie) -> Verdict {
        (**self).check(word, dictionary)
    }
}

impl<C: Checker + ?Sized> Checker for Arc<C> {
    fn check(&self, word: &str, dictionary: &Trie) -> Verdict {
        (**self).check(word, dictionary)
    }
}
