pub mod trie;
pub mod wordlist;
