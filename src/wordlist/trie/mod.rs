pub mod trie;
pub mod trie_builder;
pub mod node;
pub mod iterators;

mod haschildren;

pub use node::TrieNode;
pub use trie::Trie;
pub use trie_builder::TrieBuilder;
