//! Error types for puzzle loading and parsing.

use thiserror::Error;

/// Any failure while loading or parsing a puzzle.
///
/// The loader and parser perform no local recovery; every variant propagates
/// immediately to the caller.
#[derive(Error, Debug)]
pub enum PuzzleError {
    /// The source contained no non-blank lines.
    #[error("puzzle {name:?} has no non-blank lines")]
    EmptyInput {
        /// Name of the offending puzzle.
        name: String,
    },

    /// A retained line's length differs from the first retained line's.
    #[error("puzzle {name:?} is not rectangular: row {row} has length {len}, expected {expected}")]
    NonRectangularGrid {
        /// Name of the offending puzzle.
        name: String,
        /// Index of the mismatched row among retained lines.
        row: usize,
        /// Actual character count of that row.
        len: usize,
        /// Character count of the first retained line.
        expected: usize,
    },

    /// A row's length does not equal the row count, so the grid is not square.
    #[error("row {row} has length {len} != {size}")]
    SquareMismatch {
        /// Index of the offending row.
        row: usize,
        /// Actual character count of that row.
        len: usize,
        /// The board dimension derived from the row count.
        size: usize,
    },

    /// A cell character is neither `'.'` nor an ASCII letter.
    #[error("invalid cell character {ch:?} at row {row}, column {col}")]
    InvalidCell {
        /// The rejected character.
        ch: char,
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
    },

    /// The source file could not be opened or read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PuzzleError>;
