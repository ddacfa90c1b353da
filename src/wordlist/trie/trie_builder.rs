use std::fmt::Formatter;

use log::{debug, warn};
use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::alphabet::get_idx;
use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trie::Trie;

/// Mutable phase of a [`Trie`]. Add words, then `build`.
#[derive(Default)]
pub struct TrieBuilder {
    root: TrieNode,
    len: usize,
}

impl TrieBuilder {
    pub fn new() -> TrieBuilder {
        Default::default()
    }

    /// Inserts `word`. Words that are empty or hold a character outside the
    /// alphabet are skipped whole, so no node is created for them.
    pub fn add(&mut self, word: &str) -> &mut TrieBuilder {
        let idxs: Option<Vec<usize>> = word.chars().map(get_idx).collect();
        let idxs = match idxs {
            Some(idxs) if !idxs.is_empty() => idxs,
            Some(_) => {
                debug!("Skipping empty word");
                return self;
            }
            None => {
                warn!("Skipping {:?}: not made of letters a-z", word);
                return self;
            }
        };

        let mut current = &mut self.root;
        for idx in idxs {
            current = current.get_or_create_child(idx);
        }
        if !current.is_terminal {
            current.is_terminal = true;
            self.len += 1;
        }
        self
    }

    pub fn add_all<I>(&mut self, items: I) -> &mut TrieBuilder
        where I: IntoIterator, I::Item: AsRef<str> {
        items.into_iter().for_each(|x| { self.add(x.as_ref()); });
        self
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn build(self) -> Trie {
        Trie::new(self.root, self.len)
    }
}

impl<'de> Deserialize<'de> for Trie {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        deserializer.deserialize_seq(DeserializeTrieVisitor {})
    }
}

struct DeserializeTrieVisitor {}

impl<'de> Visitor<'de> for DeserializeTrieVisitor {
    type Value = Trie;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        write!(formatter, "a sequence of words")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error> where A: SeqAccess<'de> {
        let mut builder = TrieBuilder::new();
        while let Some(word) = seq.next_element::<String>()? {
            builder.add(&word);
        }
        Ok(builder.build())
    }
}
