// Trie node: fixed-width child slots addressed by alphabet symbol.

use triespell_core::Symbol;

/// Identifier of a node, unique within its trie. The root is always 0.
pub type NodeId = u32;

/// A node of the dictionary trie, representing a prefix of zero or more
/// dictionary words.
///
/// Each node exclusively owns its children. The child vector has one slot
/// per alphabet symbol, so its length equals the alphabet cardinality.
#[derive(Debug)]
pub struct TrieNode {
    id: NodeId,
    children: Vec<Option<Box<TrieNode>>>,
    terminates: bool,
}

impl TrieNode {
    pub(crate) fn new(id: NodeId, width: usize) -> Self {
        let mut children = Vec::with_capacity(width);
        children.resize_with(width, || None);
        Self {
            id,
            children,
            terminates: false,
        }
    }

    /// Identifier used to key search state; stable for the trie's lifetime.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns `true` if the prefix ending here is itself a dictionary word.
    #[inline]
    pub fn terminates(&self) -> bool {
        self.terminates
    }

    /// The child reached by `symbol`, if any.
    #[inline]
    pub fn child(&self, symbol: Symbol) -> Option<&TrieNode> {
        self.children.get(symbol as usize)?.as_deref()
    }

    /// Existing children in ascending symbol order.
    pub fn children(&self) -> impl Iterator<Item = (Symbol, &TrieNode)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_deref().map(|node| (i as Symbol, node)))
    }

    /// Returns `true` if no word continues past this node.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Width of the child array (the alphabet cardinality).
    pub fn width(&self) -> usize {
        self.children.len()
    }

    pub(crate) fn mark_terminal(&mut self) -> bool {
        !std::mem::replace(&mut self.terminates, true)
    }

    /// Return the child at `symbol`, creating it with `next_id` if absent.
    /// `next_id` is advanced only when a node is created.
    pub(crate) fn child_or_insert(&mut self, symbol: Symbol, next_id: &mut NodeId) -> &mut TrieNode {
        let width = self.children.len();
        let slot = &mut self.children[symbol as usize];
        let node = slot.get_or_insert_with(|| {
            let node = Box::new(TrieNode::new(*next_id, width));
            *next_id += 1;
            node
        });
        &mut **node
    }
}

// Children are released iteratively; the default recursive drop would use
// one stack frame per trie level.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TrieNode>> = self.children.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_empty() {
        let node = TrieNode::new(0, 4);
        assert_eq!(node.width(), 4);
        assert!(node.is_leaf());
        assert!(!node.terminates());
        assert!(node.child(0).is_none());
        assert!(node.child(17).is_none());
    }

    #[test]
    fn child_or_insert_assigns_ids_once() {
        let mut root = TrieNode::new(0, 3);
        let mut next_id = 1;
        assert_eq!(root.child_or_insert(2, &mut next_id).id(), 1);
        assert_eq!(root.child_or_insert(2, &mut next_id).id(), 1);
        assert_eq!(root.child_or_insert(0, &mut next_id).id(), 2);
        assert_eq!(next_id, 3);

        let symbols: Vec<Symbol> = root.children().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec![0, 2]);
    }

    #[test]
    fn mark_terminal_reports_first_marking() {
        let mut node = TrieNode::new(0, 1);
        assert!(node.mark_terminal());
        assert!(!node.mark_terminal());
        assert!(node.terminates());
    }
}
