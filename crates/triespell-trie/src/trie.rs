// Dictionary trie: bulk construction and containment queries.

use log::debug;
use triespell_core::{Alphabet, Symbol};

use crate::TrieError;
use crate::node::{NodeId, TrieNode};

/// A prefix tree over the symbols of an [`Alphabet`].
///
/// The trie is built once from a word list and is read-only afterwards, so
/// a single instance can be shared by any number of concurrent checks.
#[derive(Debug)]
pub struct Trie {
    alphabet: Alphabet,
    root: TrieNode,
    node_count: usize,
    word_count: usize,
}

impl Trie {
    /// Build a trie containing every word of `words`.
    ///
    /// Construction is all-or-nothing: if any character of any word is
    /// missing from `alphabet`, the whole build fails with
    /// [`TrieError::UnknownCharacter`] and no trie is returned. Repeated
    /// words are accepted and stored once.
    pub fn build<I, S>(words: I, alphabet: Alphabet) -> Result<Self, TrieError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let width = alphabet.len();
        let mut root = TrieNode::new(0, width);
        let mut next_id: NodeId = 1;
        let mut word_count = 0;

        for word in words {
            let word = word.as_ref();
            let mut node = &mut root;
            for c in word.chars() {
                let symbol = alphabet.index_of(c).ok_or_else(|| TrieError::UnknownCharacter {
                    character: c,
                    word: word.to_string(),
                })?;
                node = node.child_or_insert(symbol, &mut next_id);
            }
            if node.mark_terminal() {
                word_count += 1;
            }
        }

        debug!(
            "built trie: {} words, {} nodes, alphabet of {} characters",
            word_count,
            next_id,
            width
        );

        Ok(Self {
            alphabet,
            root,
            node_count: next_id as usize,
            word_count,
        })
    }

    /// Returns `true` if `word` was inserted.
    ///
    /// A character outside the alphabet simply means the word cannot be in
    /// the dictionary; it is not an error.
    pub fn contains(&self, word: &str) -> bool {
        self.find_prefix(word).is_some_and(TrieNode::terminates)
    }

    /// Returns `true` if some dictionary word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.find_prefix(prefix).is_some()
    }

    /// Walk the trie along `prefix` and return the node it ends at.
    pub fn find_prefix(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            let symbol = self.alphabet.index_of(c)?;
            node = node.child(symbol)?;
        }
        Some(node)
    }

    /// The alphabet the trie was built over.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The node representing the empty prefix.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of distinct dictionary words.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Returns `true` if the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// All dictionary words, shorter prefixes first and siblings in
    /// alphabet order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        let mut path: Vec<Symbol> = Vec::new();
        // (node, depth, symbol leading to it)
        let mut stack = vec![(&self.root, 0usize, None)];
        while let Some((node, depth, symbol)) = stack.pop() {
            path.truncate(depth.saturating_sub(1));
            if let Some(symbol) = symbol {
                path.push(symbol);
            }
            if node.terminates() {
                words.push(self.alphabet.spell(&path));
            }
            let children: Vec<_> = node.children().collect();
            for (symbol, child) in children.into_iter().rev() {
                stack.push((child, depth + 1, Some(symbol)));
            }
        }
        words
    }
}
