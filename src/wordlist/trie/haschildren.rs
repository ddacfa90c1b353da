use crate::alphabet::get_idx;
use crate::wordlist::trie::node::TrieNode;

impl TrieNode {
    pub fn get_child(&self, c: char) -> Option<&TrieNode> {
        get_idx(c).and_then(|idx| self.children[idx].as_deref())
    }

    /// Follows `word` letter by letter from this node.
    pub fn get_node(&self, word: &str) -> Option<&TrieNode> {
        word.chars().try_fold(self, |node, c| node.get_child(c))
    }

    /// Visits every node in prefix order along with the letters that lead to it.
    pub(crate) fn traverse_prefix<F>(&self, f: &mut F)
        where F: FnMut(&str, &TrieNode) {
        let mut path = String::new();
        self.traverse_prefix_from(&mut path, f);
    }

    fn traverse_prefix_from<F>(&self, path: &mut String, f: &mut F)
        where F: FnMut(&str, &TrieNode) {
        f(path.as_str(), self);
        for (c, child) in self.children() {
            path.push(c);
            child.traverse_prefix_from(path, f);
            path.pop();
        }
    }
}
