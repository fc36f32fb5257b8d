// Bounded fuzzy checker.
//
// Flags a word when a dictionary word is reachable from it within
// independent budgets of insertions, deletions, adjacent swaps and
// substitutions, and proposes the words found.
//
//   - `budget`: per-operation allowances
//   - `search`: the depth-first search over (word, trie)

pub mod budget;
mod search;

pub use budget::EditBudget;

use log::trace;
use triespell_core::Verdict;
use triespell_trie::Trie;

use crate::checker::Checker;
use search::FuzzySearch;

/// Flags words that are within edit budget of a dictionary word.
///
/// A word contained in the dictionary is never flagged. Otherwise the
/// search explores edits in a fixed order (match, swap, deletion,
/// insertion, substitution; children in ascending alphabet order) and
/// collects the dictionary words it reaches, deduplicated, in discovery
/// order, up to `max_suggestions`.
///
/// The default cap of one reports the first correction of the traversal, so
/// raising a budget can change *which* word is reported: on the dictionary
/// `1, 12, 123, 1234`, `"2"` gives `["12"]` with one insertion but `["1"]`
/// with one insertion and one deletion. Only with
/// [`unlimited_suggestions`](Self::unlimited_suggestions) does a larger
/// budget always report a superset of a smaller budget's words. The flag
/// itself never turns off as a budget grows.
///
/// Search recursion depth is bounded by the typed word's length plus the
/// insertion budget, independent of dictionary word lengths.
///
/// If no dictionary word is within budget the word is *not* flagged: this
/// checker alone cannot tell a correct word from one too far from any
/// dictionary word. Combine it with [`ExactMatch`](crate::ExactMatch) when
/// that distinction matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundedFuzzy {
    budget: EditBudget,
    max_suggestions: usize,
}

impl BoundedFuzzy {
    /// Default suggestion cap: the first correction found.
    pub const DEFAULT_MAX_SUGGESTIONS: usize = 1;

    pub fn new(budget: EditBudget) -> Self {
        Self {
            budget,
            max_suggestions: Self::DEFAULT_MAX_SUGGESTIONS,
        }
    }

    /// Collect up to `max` suggestions. A value of zero is treated as one.
    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max.max(1);
        self
    }

    /// Collect every dictionary word within budget.
    pub fn unlimited_suggestions(self) -> Self {
        self.with_max_suggestions(usize::MAX)
    }

    pub fn budget(&self) -> EditBudget {
        self.budget
    }

    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }
}

impl Default for BoundedFuzzy {
    fn default() -> Self {
        Self::new(EditBudget::default())
    }
}

impl From<EditBudget> for BoundedFuzzy {
    fn from(budget: EditBudget) -> Self {
        Self::new(budget)
    }
}

impl Checker for BoundedFuzzy {
    fn check(&self, word: &str, dictionary: &Trie) -> Verdict {
        if dictionary.contains(word) || self.budget.is_zero() {
            return Verdict::correct();
        }

        let search = FuzzySearch::new(word, dictionary, self.max_suggestions);
        let (suggestions, expanded) = search.run(dictionary.root(), self.budget);
        trace!(
            "fuzzy search for {:?}: {} suggestion(s), {} states expanded",
            word,
            suggestions.len(),
            expanded
        );

        if suggestions.is_empty() {
            Verdict::correct()
        } else {
            Verdict::misspelled(suggestions)
        }
    }
}
