// Alphabet: char-to-index and index-to-char mapping.

use hashbrown::HashMap;

/// Dense index of a character within an [`Alphabet`].
pub type Symbol = u32;

/// An ordered set of distinct characters, each assigned a stable zero-based
/// index.
///
/// The index is used to address fixed-width child arrays in the trie, so
/// lookups must be cheap in both directions. The alphabet is immutable once
/// constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    /// Maps symbol index to its character.
    symbol_chars: Vec<char>,
    /// Maps a character to its symbol index.
    char_to_symbol: HashMap<char, Symbol>,
}

impl Alphabet {
    /// Create an alphabet from an explicit character sequence.
    ///
    /// Order defines index order; a repeated character keeps the index of
    /// its first occurrence.
    pub fn new(characters: &str) -> Self {
        Self::from_chars(characters.chars())
    }

    /// Create an alphabet from any character iterator. See [`Alphabet::new`].
    pub fn from_chars<I>(characters: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut symbol_chars = Vec::new();
        let mut char_to_symbol = HashMap::new();
        for c in characters {
            if char_to_symbol.contains_key(&c) {
                continue;
            }
            char_to_symbol.insert(c, symbol_chars.len() as Symbol);
            symbol_chars.push(c);
        }
        Self {
            symbol_chars,
            char_to_symbol,
        }
    }

    /// Derive an alphabet from the characters of a word list, in order of
    /// first appearance.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut chars = Vec::new();
        for word in words {
            chars.extend(word.as_ref().chars());
        }
        Self::from_chars(chars)
    }

    /// Look up the index of `c`. Returns `None` if `c` is not part of the
    /// alphabet.
    #[inline]
    pub fn index_of(&self, c: char) -> Option<Symbol> {
        self.char_to_symbol.get(&c).copied()
    }

    /// Reverse lookup: the character with the given index.
    #[inline]
    pub fn char_at(&self, symbol: Symbol) -> Option<char> {
        self.symbol_chars.get(symbol as usize).copied()
    }

    /// Returns `true` if `c` is part of the alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.char_to_symbol.contains_key(&c)
    }

    /// Translate every character of `word` to its index. Characters outside
    /// the alphabet become `None`.
    pub fn symbols(&self, word: &str) -> Vec<Option<Symbol>> {
        word.chars().map(|c| self.index_of(c)).collect()
    }

    /// Spell out a sequence of indices. Indices outside the alphabet are
    /// skipped.
    pub fn spell(&self, symbols: &[Symbol]) -> String {
        symbols.iter().filter_map(|&s| self.char_at(s)).collect()
    }

    /// Number of characters in the alphabet.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbol_chars.len()
    }

    /// Returns `true` if the alphabet has no characters.
    pub fn is_empty(&self) -> bool {
        self.symbol_chars.is_empty()
    }

    /// Iterate over the characters in index order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.symbol_chars.iter().copied()
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_chars(iter)
    }
}
