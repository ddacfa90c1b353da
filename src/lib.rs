pub mod alphabet;
pub mod board;
pub mod errors;
pub mod grouper;
pub mod log;
pub mod search;
pub mod wordlist;

pub use board::{Board, Position};
pub use search::{find_words, SearchConfig, SearchResult, SearchStatus, Searcher};
pub use wordlist::trie::Trie;
pub use wordlist::wordlist::{FileFormat, Wordlist};
