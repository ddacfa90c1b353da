use std::fmt::{Display, Formatter};
use std::str::FromStr;

use derive_new::new;
use rand::Rng;

use crate::alphabet::{is_word_char, letter_of, ALPHABET};
use crate::errors::BoardError;

/// Offsets of the eight cells adjacent to a cell.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

#[derive(new, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// True if `other` is one of the eight cells around this one.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        *self != *other
            && self.row.abs_diff(other.row) <= 1
            && self.col.abs_diff(other.col) <= 1
    }
}

/// An immutable grid of lowercase letters, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<char>,
    rows: usize,
    cols: usize,
}

impl Board {
    /// Builds a board from rows of letters, lowercasing each one.
    pub fn new(rows: Vec<Vec<char>>) -> Result<Board, BoardError> {
        let cols = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(BoardError::InvalidBoardShape {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (j, &letter) in row.iter().enumerate() {
                if !is_word_char(letter) {
                    return Err(BoardError::InvalidLetter { row: i, col: j, letter });
                }
                cells.push(letter.to_ascii_lowercase());
            }
        }

        // a board of empty rows has no cells to search
        let rows = if cols == 0 { 0 } else { rows.len() };
        Ok(Board { cells, rows, cols })
    }

    pub fn random<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Board {
        let cells = (0..rows * cols)
            .map(|_| letter_of(rng.gen_range(0..ALPHABET.len())))
            .collect();
        Board { cells, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn letter_at(&self, row: usize, col: usize) -> Result<char, BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::OutOfBounds { row, col, rows: self.rows, cols: self.cols });
        }
        Ok(self.cells[self.index(Position::new(row, col))])
    }

    /// The eight coordinates around `(row, col)`. Not bounds-filtered.
    pub fn neighbors(&self, row: usize, col: usize) -> [(isize, isize); 8] {
        let (row, col) = (row as isize, col as isize);
        DIRECTIONS.map(|(dr, dc)| (row + dr, col + dc))
    }

    /// Turns a signed coordinate into a position, if it lies on the board.
    pub fn checked_position(&self, row: isize, col: isize) -> Option<Position> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row < self.rows && col < self.cols {
            Some(Position::new(row, col))
        } else {
            None
        }
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    pub(crate) fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    pub(crate) fn at(&self, pos: Position) -> char {
        self.cells[self.index(pos)]
    }
}

/// Parses rows separated by newlines or `/`. Whitespace inside a row is ignored,
/// so both `"IAKW/FRIT"` and `"I A K W\nF R I T"` work.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split(|c: char| c == '\n' || c == '/')
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        Board::new(rows)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            let line = row
                .iter()
                .map(|c| c.to_ascii_uppercase().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
