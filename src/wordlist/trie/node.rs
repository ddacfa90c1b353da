use std::fmt::{Debug, Formatter};

use crate::alphabet::ALPHABET;

/// One prefix of the dictionary. Children are owned, one slot per letter.
#[derive(Default, PartialEq, Eq)]
pub struct TrieNode {
    pub(crate) children: [Option<Box<TrieNode>>; ALPHABET.len()],
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    /// True iff the path from the root to this node spells a whole word.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub(crate) fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    pub(crate) fn get_or_create_child(&mut self, idx: usize) -> &mut TrieNode {
        self.children[idx].get_or_insert_with(Default::default)
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children().map(|(c, _)| c).collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::get_idx;

    #[test]
    fn child_creation_is_idempotent() {
        let mut root = TrieNode::default();
        let idx = get_idx('r').unwrap();
        root.get_or_create_child(idx).is_terminal = true;
        let again = root.get_or_create_child(idx);
        assert!(again.is_terminal());
        assert_eq!(root.children().count(), 1);
    }

    #[test]
    fn fresh_node_is_a_leaf() {
        let node = TrieNode::default();
        assert!(!node.is_terminal());
        assert!(!node.has_children());
    }
}
