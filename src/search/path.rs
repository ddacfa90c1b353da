use std::ops::{Deref, DerefMut};

use crate::board::{Board, Position};

/// Cells and letters of the path currently being explored from one start cell.
pub(crate) struct PathState {
    visited: Vec<bool>,
    cols: usize,
    trail: Vec<Position>,
    letters: String,
}

impl PathState {
    pub(crate) fn new(board: &Board) -> PathState {
        PathState {
            visited: vec![false; board.rows() * board.cols()],
            cols: board.cols(),
            trail: Vec::new(),
            letters: String::new(),
        }
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    pub(crate) fn is_visited(&self, pos: Position) -> bool {
        self.visited[self.index(pos)]
    }

    /// Marks `pos` visited and appends `letter`. Both are undone when the
    /// returned step is dropped.
    pub(crate) fn enter(&mut self, pos: Position, letter: char) -> Step<'_> {
        let idx = self.index(pos);
        self.visited[idx] = true;
        self.trail.push(pos);
        self.letters.push(letter);
        Step { state: self }
    }

    pub(crate) fn len(&self) -> usize {
        self.trail.len()
    }

    pub(crate) fn word(&self) -> &str {
        &self.letters
    }

    pub(crate) fn trail(&self) -> &[Position] {
        &self.trail
    }

    #[cfg(test)]
    fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }
}

pub(crate) struct Step<'s> {
    state: &'s mut PathState,
}

impl Deref for Step<'_> {
    type Target = PathState;

    fn deref(&self) -> &PathState {
        self.state
    }
}

impl DerefMut for Step<'_> {
    fn deref_mut(&mut self) -> &mut PathState {
        self.state
    }
}

impl Drop for Step<'_> {
    fn drop(&mut self) {
        if let Some(pos) = self.state.trail.pop() {
            let idx = self.state.index(pos);
            self.state.visited[idx] = false;
            self.state.letters.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropping_a_step_unwinds_it() {
        let board: Board = "ab/cd".parse().unwrap();
        let mut state = PathState::new(&board);
        {
            let mut first = state.enter(Position::new(0, 0), 'a');
            {
                let second = first.enter(Position::new(1, 1), 'd');
                assert_eq!(second.word(), "ad");
                assert_eq!(second.trail(), &[Position::new(0, 0), Position::new(1, 1)]);
                assert_eq!(second.visited_count(), 2);
            }
            assert_eq!(first.word(), "a");
            assert!(!first.is_visited(Position::new(1, 1)));
            assert!(first.is_visited(Position::new(0, 0)));
        }
        assert_eq!(state.len(), 0);
        assert_eq!(state.word(), "");
        assert_eq!(state.visited_count(), 0);
    }
}
