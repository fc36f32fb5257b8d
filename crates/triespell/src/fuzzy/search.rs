// Budgeted depth-first search jointly over the typed word and the trie.
//
// A state is (word position, trie node, remaining budget, current letter).
// The current letter is normally the word's letter at that position; after
// a swap it is the letter carried over from the previous position. Every
// transition either advances the word position or spends budget, so the
// state graph is acyclic and finite.
//
// Transition order (fixes the discovery order of suggestions):
//   1. match         free, letter == child symbol
//   2. swap          next letter first, current letter carried forward
//   3. deletion      skip the current letter
//   4. insertion     descend into each child, letter kept
//   5. substitution  descend into each other child, letter consumed

use hashbrown::HashSet;
use triespell_core::{Alphabet, Symbol};
use triespell_trie::{NodeId, Trie, TrieNode};

use super::budget::EditBudget;
use crate::status::SuggestionStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SearchState {
    position: usize,
    node: NodeId,
    letter: Option<Symbol>,
    budget: EditBudget,
}

/// One fuzzy search run for a single word.
pub(crate) struct FuzzySearch<'a> {
    alphabet: &'a Alphabet,
    /// The typed word as alphabet symbols; `None` for unknown characters.
    word: Vec<Option<Symbol>>,
    /// Symbols of the trie path from the root to the current node.
    path: Vec<Symbol>,
    /// States already explored. Revisiting one cannot find new words.
    visited: HashSet<SearchState>,
    status: SuggestionStatus,
    /// Number of states expanded, for diagnostics.
    expanded: usize,
}

impl<'a> FuzzySearch<'a> {
    pub(crate) fn new(word: &str, trie: &'a Trie, max_suggestions: usize) -> Self {
        let alphabet = trie.alphabet();
        Self {
            alphabet,
            word: alphabet.symbols(word),
            path: Vec::new(),
            visited: HashSet::new(),
            status: SuggestionStatus::new(max_suggestions),
            expanded: 0,
        }
    }

    /// Explore from the root with the full budget and return the dictionary
    /// words reached, in discovery order.
    pub(crate) fn run(mut self, root: &'a TrieNode, budget: EditBudget) -> (Vec<String>, usize) {
        let letter = self.letter_at(0);
        self.explore(root, 0, letter, budget);
        (self.status.into_suggestions(), self.expanded)
    }

    #[inline]
    fn letter_at(&self, position: usize) -> Option<Symbol> {
        self.word.get(position).copied().flatten()
    }

    fn explore(&mut self, node: &'a TrieNode, position: usize, letter: Option<Symbol>, budget: EditBudget) {
        if self.status.should_abort() {
            return;
        }
        let state = SearchState {
            position,
            node: node.id(),
            letter,
            budget,
        };
        if !self.visited.insert(state) {
            return;
        }
        self.expanded += 1;

        let at_end = position == self.word.len();
        if at_end && node.terminates() {
            let suggestion = self.alphabet.spell(&self.path);
            self.status.add_suggestion(suggestion);
            if self.status.should_abort() {
                return;
            }
        }

        if !at_end {
            let next = self.letter_at(position + 1);

            if let Some(symbol) = letter {
                if let Some(child) = node.child(symbol) {
                    self.descend(child, symbol, position + 1, next, budget);
                }
            }

            if budget.swaps > 0 && next != letter {
                if let Some(symbol) = next {
                    if let Some(child) = node.child(symbol) {
                        self.descend(child, symbol, position + 1, letter, budget.spend_swap());
                    }
                }
            }

            if budget.deletions > 0 {
                self.explore(node, position + 1, next, budget.spend_deletion());
            }
        }

        if budget.insertions > 0 {
            for (symbol, child) in node.children() {
                if self.status.should_abort() {
                    return;
                }
                self.descend(child, symbol, position, letter, budget.spend_insertion());
            }
        }

        if !at_end && budget.substitutions > 0 {
            let next = self.letter_at(position + 1);
            for (symbol, child) in node.children() {
                if self.status.should_abort() {
                    return;
                }
                if Some(symbol) == letter {
                    continue;
                }
                self.descend(child, symbol, position + 1, next, budget.spend_substitution());
            }
        }
    }

    /// Step into `child` along `symbol` and explore from there.
    fn descend(
        &mut self,
        child: &'a TrieNode,
        symbol: Symbol,
        position: usize,
        letter: Option<Symbol>,
        budget: EditBudget,
    ) {
        self.path.push(symbol);
        self.explore(child, position, letter, budget);
        self.path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Trie {
        Trie::build(["1", "12", "123", "1234"], Alphabet::new("1234")).unwrap()
    }

    fn search(word: &str, budget: EditBudget) -> Vec<String> {
        let trie = dictionary();
        FuzzySearch::new(word, &trie, usize::MAX).run(trie.root(), budget).0
    }

    #[test]
    fn zero_budget_only_matches() {
        assert_eq!(search("12", EditBudget::default()), vec!["12"]);
        assert!(search("13", EditBudget::default()).is_empty());
    }

    #[test]
    fn trailing_insertions_extend_words() {
        let found = search("12", EditBudget::default().with_insertions(2));
        assert_eq!(found, vec!["12", "123", "1234"]);
    }

    #[test]
    fn consecutive_swaps_move_a_letter() {
        let found = search("1423", EditBudget::default().with_swaps(2));
        assert_eq!(found, vec!["1234"]);
        assert!(search("4123", EditBudget::default().with_swaps(2)).is_empty());
    }

    #[test]
    fn unknown_letters_can_be_deleted_or_substituted() {
        assert_eq!(search("1x2", EditBudget::default().with_deletions(1)), vec!["12"]);
        assert_eq!(search("1x", EditBudget::default().with_substitutions(1)), vec!["12"]);
    }

    #[test]
    fn substitution_replaces_one_letter() {
        assert_eq!(search("2", EditBudget::default().with_substitutions(1)), vec!["1"]);
        assert_eq!(search("133", EditBudget::default().with_substitutions(1)), vec!["123"]);
        assert!(search("333", EditBudget::default().with_substitutions(1)).is_empty());
    }

    #[test]
    fn limit_stops_after_first_word() {
        let trie = dictionary();
        let (found, _) = FuzzySearch::new("12", &trie, 1).run(trie.root(), EditBudget::uniform(2));
        assert_eq!(found, vec!["12"]);
    }

    #[test]
    fn memo_bounds_expansion() {
        let trie = Trie::build(["aaaa"], Alphabet::new("ab")).unwrap();
        let (_, expanded) =
            FuzzySearch::new("bbbb", &trie, usize::MAX).run(trie.root(), EditBudget::uniform(2));
        // positions * nodes * letters * budgets is a loose upper bound
        assert!(expanded <= 5 * 5 * 3 * 81);
    }
}
