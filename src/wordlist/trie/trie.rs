use std::fmt::{Debug, Formatter};

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trie_builder::TrieBuilder;

/// Immutable prefix index over a dictionary.
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub(crate) fn new(root: TrieNode, len: usize) -> Trie {
        Trie { root, len }
    }

    pub fn builder() -> TrieBuilder {
        TrieBuilder::new()
    }

    pub fn from_words<I>(words: I) -> Trie
        where I: IntoIterator, I::Item: AsRef<str> {
        let mut builder = Trie::builder();
        builder.add_all(words);
        builder.build()
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    pub fn get_node(&self, prefix: &str) -> Option<&TrieNode> {
        self.root.get_node(prefix)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get_node(word).map(|x| x.is_terminal()).unwrap_or(false)
    }

    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.get_node(prefix).is_some()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All words, in alphabetical order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.len);
        self.root.traverse_prefix(&mut |path, node| {
            if node.is_terminal() {
                words.push(path.to_string());
            }
        });
        words
    }
}

impl Serialize for Trie {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        for word in self.words() {
            seq.serialize_element(&word)?;
        }
        seq.end()
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.words()).finish()
    }
}
