use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering::Relaxed;
use std::time::Instant;

use rayon::prelude::*;

use crate::board::Position;
use crate::search::{Found, SearchResult, Searcher};

impl<'a> Searcher<'a> {
    /// Searches starting cells in parallel. Board and trie are shared read-only;
    /// each worker folds into its own map and the maps are merged at the end.
    pub fn run_multithreaded(&self) -> SearchResult {
        let start = Instant::now();
        let timed_out = AtomicBool::new(false);
        let cols = self.board.cols();

        let found = (0..self.board.rows() * cols)
            .into_par_iter()
            .map(|idx| Position::new(idx / cols, idx % cols))
            .fold(Found::new, |mut found, cell| {
                if self.out_of_time(start) {
                    timed_out.store(true, Relaxed);
                } else {
                    self.search_from(cell, &mut found);
                }
                found
            })
            .reduce(Found::new, merge);

        self.finish(found, timed_out.into_inner(), start)
    }
}

fn merge(mut into: Found, from: Found) -> Found {
    if into.len() < from.len() {
        return merge(from, into);
    }
    for (word, path) in from {
        into.entry(word).or_insert(path);
    }
    into
}
