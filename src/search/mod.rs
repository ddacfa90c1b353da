//! Trie-pruned depth-first search of a [`Board`].
//!
//! Every cell starts an independent search. A branch is abandoned as soon as its
//! letters stop being a prefix of some dictionary word; a word is recorded when
//! the path is long enough and ends on a terminal node, and exploration goes on
//! past it so longer words sharing the prefix are found too.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use log::debug;
use metrics::{counter, histogram};

use crate::board::{Board, Position};
use crate::search::path::PathState;
use crate::wordlist::trie::{Trie, TrieNode};

pub mod multithreaded_search;
pub mod searchconfig;

mod path;

pub use searchconfig::{SearchConfig, MIN_WORD_LEN};

/// Found words, each with one path that spells it.
pub type Found = HashMap<String, Vec<Position>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Every starting cell was searched.
    Complete,
    /// The time limit ran out before every starting cell was searched.
    TimedOut { elapsed: Duration },
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub words: Found,
    pub status: SearchStatus,
    pub elapsed: Duration,
}

impl SearchResult {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn path(&self, word: &str) -> Option<&[Position]> {
        self.words.get(word).map(Vec::as_slice)
    }

    pub fn word_set(&self) -> HashSet<String> {
        self.words.keys().cloned().collect()
    }

    pub fn into_word_set(self) -> HashSet<String> {
        self.words.into_keys().collect()
    }
}

/// Every dictionary word of four or more letters that can be traced on `board`.
pub fn find_words(board: &Board, trie: &Trie) -> HashSet<String> {
    let config = SearchConfig::default();
    Searcher::new(board, trie, &config).run().into_word_set()
}

pub struct Searcher<'a> {
    board: &'a Board,
    trie: &'a Trie,
    config: &'a SearchConfig,
    min_word_len: usize,
}

impl<'a> Searcher<'a> {
    pub fn new(board: &'a Board, trie: &'a Trie, config: &'a SearchConfig) -> Searcher<'a> {
        let min_word_len = config.min_word_len.max(MIN_WORD_LEN);
        if min_word_len != config.min_word_len {
            debug!("min_word_len {} raised to {}", config.min_word_len, min_word_len);
        }
        Searcher { board, trie, config, min_word_len }
    }

    pub fn run(&self) -> SearchResult {
        let start = Instant::now();
        let mut found = Found::new();
        let mut timed_out = false;

        for cell in self.board.positions() {
            if self.out_of_time(start) {
                timed_out = true;
                break;
            }
            self.search_from(cell, &mut found);
        }

        self.finish(found, timed_out, start)
    }

    fn out_of_time(&self, start: Instant) -> bool {
        self.config.time_limit.map(|limit| start.elapsed() >= limit).unwrap_or(false)
    }

    /// Searches every path starting at `cell` with a fresh path state.
    pub(crate) fn search_from(&self, cell: Position, found: &mut Found) {
        let mut state = PathState::new(self.board);
        self.dfs(cell.row as isize, cell.col as isize, self.trie.root(), &mut state, found);
    }

    fn dfs(&self, row: isize, col: isize, node: &TrieNode, state: &mut PathState, found: &mut Found) {
        let pos = match self.board.checked_position(row, col) {
            Some(pos) => pos,
            None => return,
        };
        if state.is_visited(pos) {
            return;
        }
        let letter = self.board.at(pos);
        let child = match node.get_child(letter) {
            Some(child) => child,
            None => return,
        };

        let mut step = state.enter(pos, letter);
        if step.len() >= self.min_word_len && child.is_terminal() && !found.contains_key(step.word()) {
            found.insert(step.word().to_string(), step.trail().to_vec());
        }
        if !child.has_children() {
            return;
        }

        for (r, c) in self.board.neighbors(pos.row, pos.col) {
            self.dfs(r, c, child, &mut step, found);
        }
    }

    pub(crate) fn finish(&self, found: Found, timed_out: bool, start: Instant) -> SearchResult {
        let elapsed = start.elapsed();
        let status = if timed_out {
            SearchStatus::TimedOut { elapsed }
        } else {
            SearchStatus::Complete
        };

        counter!("squares.search.runs", 1);
        counter!("squares.search.words_found", found.len() as u64);
        histogram!("squares.search.elapsed_ms", elapsed.as_secs_f64() * 1000.0);
        debug!("Searched {}x{} board: {} words in {:?} ({:?})",
               self.board.rows(), self.board.cols(), found.len(), elapsed, status);

        SearchResult { words: found, status, elapsed }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use maplit::hashset;

    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn words(set: &[&str]) -> HashSet<String> {
        set.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn finds_the_sample_board_words() {
        let trie = Trie::from_words(["rite", "fire", "area", "lair", "gall", "will", "kiwi"]);
        let found = find_words(&board("IAKW/FRIT/UEAA/JLLG"), &trie);
        assert_eq!(found, words(&["area", "fire", "gall", "lair"]));
    }

    #[test]
    fn witness_path_spells_the_word() {
        let trie = Trie::from_words(["fire"]);
        let b = board("IAKW/FRIT/UEAA/JLLG");
        let config = SearchConfig::default();
        let result = Searcher::new(&b, &trie, &config).run();
        let path = result.path("fire").unwrap();
        assert_eq!(
            path,
            &[Position::new(1, 0), Position::new(0, 0), Position::new(1, 1), Position::new(2, 1)]
        );
        assert_eq!(result.status, SearchStatus::Complete);
    }

    #[test]
    fn empty_dictionary_finds_nothing() {
        let trie = Trie::from_words(Vec::<&str>::new());
        assert!(find_words(&board("IAKW/FRIT/UEAA/JLLG"), &trie).is_empty());
    }

    #[test]
    fn empty_board_finds_nothing() {
        let trie = Trie::from_words(["fire"]);
        assert!(find_words(&board(""), &trie).is_empty());
    }

    #[test]
    fn short_words_are_never_recorded() {
        let trie = Trie::from_words(["fir", "fire", "ir"]);
        let found = find_words(&board("IAKW/FRIT/UEAA/JLLG"), &trie);
        assert_eq!(found, words(&["fire"]));
    }

    #[test]
    fn min_word_len_can_only_be_raised() {
        let trie = Trie::from_words(["fir", "fire", "tiara"]);
        let b = board("IAKW/FRIT/UEAA/JLLG");

        let config = SearchConfig::builder().min_word_len(5).build();
        let found = Searcher::new(&b, &trie, &config).run().into_word_set();
        assert_eq!(found, words(&["tiara"]));

        let config = SearchConfig::builder().min_word_len(3).build();
        let found = Searcher::new(&b, &trie, &config).run_multithreaded().into_word_set();
        assert_eq!(found, words(&["fire", "tiara"]));
    }

    #[test]
    fn search_continues_past_a_word() {
        let trie = Trie::from_words(["fire", "fires"]);
        let found = find_words(&board("FIR/XSE"), &trie);
        assert_eq!(found, words(&["fire", "fires"]));
    }

    #[test]
    fn cells_are_released_for_sibling_branches() {
        // "abc" is explored first from 'a' and dead-ends; "acbd" must still reuse 'b' and 'c'.
        let trie = Trie::from_words(["abcx", "acbd"]);
        let found = find_words(&board("ab/cd"), &trie);
        assert_eq!(found, words(&["acbd"]));
    }

    #[test]
    fn cells_are_not_reused_within_a_word() {
        let trie = Trie::from_words(["aaaa", "aaaaa"]);
        let found = find_words(&board("aa/aa"), &trie);
        assert_eq!(found, words(&["aaaa"]));
    }

    #[test]
    fn non_adjacent_letters_do_not_form_words() {
        // 'w' and 'i' are both on the board but "will" needs an 'l' next to an 'i'.
        let trie = Trie::from_words(["will", "kiwi", "rite"]);
        assert!(find_words(&board("IAKW/FRIT/UEAA/JLLG"), &trie).is_empty());
    }

    #[test]
    fn uppercase_dictionary_words_match() {
        let trie = Trie::from_words(["GALL"]);
        assert_eq!(find_words(&board("IAKW/FRIT/UEAA/JLLG"), &trie), hashset! {"gall".to_string()});
    }

    #[test]
    fn repeated_runs_agree() {
        let trie = Trie::from_words(["rite", "fire", "area", "lair", "gall", "tiara", "tier"]);
        let b = board("IAKW/FRIT/UEAA/JLLG");
        assert_eq!(find_words(&b, &trie), find_words(&b, &trie));
    }

    #[test]
    fn zero_time_limit_searches_nothing() {
        let trie = Trie::from_words(["fire"]);
        let b = board("IAKW/FRIT/UEAA/JLLG");
        let config = SearchConfig::builder().time_limit(Duration::ZERO).build();
        let result = Searcher::new(&b, &trie, &config).run();
        assert!(result.is_empty());
        assert!(matches!(result.status, SearchStatus::TimedOut { .. }));
    }
}
