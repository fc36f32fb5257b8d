// Dictionary-free and exact-match checkers.

use triespell_core::Verdict;
use triespell_trie::Trie;

use crate::checker::Checker;

/// Flags every word whose length (in characters) is at or above a
/// threshold. Never suggests and never reads the dictionary.
///
/// Intersected with a fuzzy checker it keeps short words from being
/// flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthGate {
    threshold: usize,
}

impl LengthGate {
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

impl Checker for LengthGate {
    fn check(&self, word: &str, _dictionary: &Trie) -> Verdict {
        Verdict::from_flag(word.chars().count() >= self.threshold)
    }
}

/// Flags every word that is not in the dictionary. Never suggests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ExactMatch;

impl Checker for ExactMatch {
    fn check(&self, word: &str, dictionary: &Trie) -> Verdict {
        Verdict::from_flag(!dictionary.contains(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triespell_core::Alphabet;

    fn dictionary() -> Trie {
        Trie::build(["1", "12", "123", "1234"], Alphabet::new("1234")).unwrap()
    }

    #[test]
    fn length_gate_threshold_is_inclusive() {
        let trie = dictionary();
        let gate = LengthGate::new(3);
        assert_eq!(gate.check("", &trie), Verdict::correct());
        assert_eq!(gate.check("1", &trie), Verdict::correct());
        assert_eq!(gate.check("11", &trie), Verdict::correct());
        assert_eq!(gate.check("111", &trie), Verdict::flagged());
        assert_eq!(gate.check("1111", &trie), Verdict::flagged());
    }

    #[test]
    fn length_gate_ignores_dictionary() {
        let trie = dictionary();
        assert!(LengthGate::new(3).is_misspelled("123", &trie));
    }

    #[test]
    fn length_gate_counts_characters() {
        let trie = dictionary();
        assert!(!LengthGate::new(3).is_misspelled("\u{00e4}\u{00f6}", &trie));
    }

    #[test]
    fn exact_match() {
        let trie = dictionary();
        for word in ["1", "12", "123", "1234"] {
            assert_eq!(ExactMatch.check(word, &trie), Verdict::correct());
        }
        assert_eq!(ExactMatch.check("122", &trie), Verdict::flagged());
        assert_eq!(ExactMatch.check("0", &trie), Verdict::flagged());
        assert_eq!(ExactMatch.check("", &trie), Verdict::flagged());
    }
}
