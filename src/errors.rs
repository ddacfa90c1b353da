//! Error types for board construction and dictionary loading.
//!
//! Each variant carries a stable code for lookup:
//!
//! - E001: `BoardError::OutOfBounds`
//! - E002: `BoardError::InvalidBoardShape`
//! - E003: `BoardError::InvalidLetter`
//! - E101: `WordlistError::Io`
//! - E102: `WordlistError::Read`

use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("row {row} has {found} letters, expected {expected}")]
    InvalidBoardShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({row}, {col}) holds '{letter}', only letters a-z are allowed")]
    InvalidLetter { row: usize, col: usize, letter: char },
}

impl BoardError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            BoardError::OutOfBounds { .. } => "E001",
            BoardError::InvalidBoardShape { .. } => "E002",
            BoardError::InvalidLetter { .. } => "E003",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WordlistError {
    #[error("could not read word list {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read line {line} of word list: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

impl WordlistError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            WordlistError::Io { .. } => "E101",
            WordlistError::Read { .. } => "E102",
        }
    }
}
