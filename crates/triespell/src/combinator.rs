// Boolean composition of checkers, plus ready-made checker trees.

use std::fmt;

use triespell_core::Verdict;
use triespell_trie::Trie;

use crate::checker::Checker;
use crate::fuzzy::{BoundedFuzzy, EditBudget};
use crate::simple::LengthGate;
use crate::status::SuggestionStatus;

// =========================================================================
// Union
// =========================================================================

/// OR composition: flags a word if any child flags it.
///
/// Suggestions are the children's lists concatenated in child order, with
/// repeats removed (first occurrence kept). Every child is evaluated.
#[derive(Default)]
pub struct Union {
    checkers: Vec<Box<dyn Checker>>,
}

impl Union {
    pub fn new(checkers: Vec<Box<dyn Checker>>) -> Self {
        Self { checkers }
    }

    /// Append a child checker.
    pub fn with<C: Checker + 'static>(mut self, checker: C) -> Self {
        self.checkers.push(Box::new(checker));
        self
    }

    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }
}

impl Checker for Union {
    fn check(&self, word: &str, dictionary: &Trie) -> Verdict {
        let mut misspelled = false;
        let mut status = SuggestionStatus::unbounded();
        for checker in &self.checkers {
            let (flagged, suggestions) = checker.check(word, dictionary).into_parts();
            if flagged {
                misspelled = true;
                status.extend(suggestions);
            }
        }
        if misspelled {
            Verdict::misspelled(status.into_suggestions())
        } else {
            Verdict::correct()
        }
    }
}

impl fmt::Debug for Union {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Union")
            .field("checkers", &self.checkers.len())
            .finish()
    }
}

// =========================================================================
// Intersect
// =========================================================================

/// AND composition: flags a word only if every child flags it.
///
/// When flagged, suggestions are the children's lists concatenated in child
/// order with repeats removed. Evaluation stops at the first child that
/// does not flag the word. An intersection without children flags every
/// word.
#[derive(Default)]
pub struct Intersect {
    checkers: Vec<Box<dyn Checker>>,
}

impl Intersect {
    pub fn new(checkers: Vec<Box<dyn Checker>>) -> Self {
        Self { checkers }
    }

    /// Append a child checker.
    pub fn with<C: Checker + 'static>(mut self, checker: C) -> Self {
        self.checkers.push(Box::new(checker));
        self
    }

    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }
}

impl Checker for Intersect {
    fn check(&self, word: &str, dictionary: &Trie) -> Verdict {
        let mut status = SuggestionStatus::unbounded();
        for checker in &self.checkers {
            let (flagged, suggestions) = checker.check(word, dictionary).into_parts();
            if !flagged {
                return Verdict::correct();
            }
            status.extend(suggestions);
        }
        Verdict::misspelled(status.into_suggestions())
    }
}

impl fmt::Debug for Intersect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intersect")
            .field("checkers", &self.checkers.len())
            .finish()
    }
}

// =========================================================================
// Factory functions
// =========================================================================

/// Minimum word length the typing preset checks.
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Checker for ordinary typing errors: one edit of each kind, applied only
/// to words of at least `min_length` characters.
pub fn typing_checker(min_length: usize) -> Intersect {
    Intersect::default()
        .with(LengthGate::new(min_length))
        .with(BoundedFuzzy::new(EditBudget::uniform(1)))
}

/// [`typing_checker`] with [`DEFAULT_MIN_LENGTH`].
pub fn default_typing_checker() -> Intersect {
    typing_checker(DEFAULT_MIN_LENGTH)
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simple::ExactMatch;
    use triespell_core::Alphabet;

    fn dictionary() -> Trie {
        Trie::build(["1", "12", "123", "1234"], Alphabet::new("1234")).unwrap()
    }

    /// Returns a fixed verdict regardless of input.
    struct Fixed(bool, &'static [&'static str]);

    impl Checker for Fixed {
        fn check(&self, _word: &str, _dictionary: &Trie) -> Verdict {
            if self.0 {
                Verdict::misspelled(self.1.iter().map(|s| s.to_string()).collect())
            } else {
                Verdict::correct()
            }
        }
    }

    #[test]
    fn union_of_swap_and_insertion() {
        let trie = dictionary();
        let union = Union::default()
            .with(BoundedFuzzy::new(EditBudget::default().with_swaps(1)))
            .with(BoundedFuzzy::new(EditBudget::default().with_insertions(1)));

        assert_eq!(union.check("12", &trie), Verdict::correct());
        assert_eq!(union.check("132", &trie).suggestions(), ["123"]);
        assert_eq!(union.check("134", &trie).suggestions(), ["1234"]);
    }

    #[test]
    fn union_merges_and_deduplicates() {
        let trie = dictionary();
        let union = Union::default()
            .with(Fixed(true, &["a", "b"]))
            .with(Fixed(false, &["z"]))
            .with(Fixed(true, &[]))
            .with(Fixed(true, &["b", "c"]));
        let verdict = union.check("x", &trie);
        assert!(verdict.is_misspelled());
        assert_eq!(verdict.suggestions(), ["a", "b", "c"]);
    }

    #[test]
    fn empty_union_never_flags() {
        assert_eq!(Union::default().check("x", &dictionary()), Verdict::correct());
    }

    #[test]
    fn intersect_of_length_gate_and_substitution() {
        let trie = dictionary();
        let intersect = Intersect::default()
            .with(LengthGate::new(4))
            .with(BoundedFuzzy::new(EditBudget::default().with_substitutions(1)));

        assert_eq!(intersect.check("1224", &trie).suggestions(), ["1234"]);
        assert!(intersect.check("1224", &trie).is_misspelled());
        assert_eq!(intersect.check("12344", &trie), Verdict::correct());
        assert_eq!(intersect.check("333", &trie), Verdict::correct());
        assert_eq!(intersect.check("133", &trie), Verdict::correct());
    }

    #[test]
    fn intersect_requires_every_child() {
        let trie = dictionary();
        let both = Intersect::default()
            .with(Fixed(true, &["a"]))
            .with(Fixed(true, &["a", "b"]));
        assert_eq!(both.check("x", &trie).suggestions(), ["a", "b"]);

        let one_fails = Intersect::default()
            .with(Fixed(true, &["a"]))
            .with(Fixed(false, &[]));
        assert_eq!(one_fails.check("x", &trie), Verdict::correct());
    }

    #[test]
    fn empty_intersect_flags_without_suggestions() {
        assert_eq!(Intersect::default().check("x", &dictionary()), Verdict::flagged());
    }

    #[test]
    fn nested_combinators() {
        let trie = dictionary();
        let checker = Union::default().with(ExactMatch).with(
            Intersect::default()
                .with(LengthGate::new(2))
                .with(BoundedFuzzy::new(EditBudget::default().with_deletions(1))),
        );
        assert_eq!(checker.check("122", &trie).suggestions(), ["12"]);
        assert_eq!(checker.check("0", &trie), Verdict::flagged());
        assert_eq!(checker.check("123", &trie), Verdict::correct());
    }

    #[test]
    fn typing_preset_skips_short_words() {
        let trie = dictionary();
        let checker = default_typing_checker();
        assert_eq!(checker.len(), 2);
        assert_eq!(checker.check("133", &trie), Verdict::correct());
        assert_eq!(checker.check("1243", &trie).suggestions(), ["1234"]);
    }

    #[test]
    fn debug_shows_child_count() {
        let union = Union::default().with(ExactMatch);
        assert_eq!(format!("{union:?}"), "Union { checkers: 1 }");
    }
}
