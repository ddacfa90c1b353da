use crate::alphabet::letter_of;
use crate::wordlist::trie::node::TrieNode;

/// Present children of a node, in alphabet order.
#[derive(Debug)]
pub struct Children<'a> {
    idx: usize,
    node: &'a TrieNode,
}

impl<'a> Iterator for Children<'a> {
    type Item = (char, &'a TrieNode);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < self.node.children.len() {
            let idx = self.idx;
            self.idx += 1;
            if let Some(child) = self.node.children[idx].as_deref() {
                return Some((letter_of(idx), child));
            }
        }
        None
    }
}

impl TrieNode {
    pub fn children(&self) -> Children<'_> {
        Children { idx: 0, node: self }
    }
}

impl<'a> IntoIterator for &'a TrieNode {
    type Item = (char, &'a TrieNode);
    type IntoIter = Children<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.children()
    }
}
