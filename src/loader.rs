use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use itertools::Itertools;
use log::debug;

use crate::error::{PuzzleError, Result};

/// A puzzle's identifying name and its validated text lines, as read from a
/// file but not yet interpreted.
///
/// Produced by [`load_puzzle_from_file`] or [`read_puzzle`] and consumed
/// exactly once by [`parse_raw_puzzle`](crate::parser::parse_raw_puzzle).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawPuzzle {
    /// The final path component of the source file.
    pub name: String,
    /// The non-blank lines of the source, newline-stripped, in file order.
    /// Every line has the same character count.
    pub grid_lines: Vec<String>,
}

/// Read the puzzle file at `path` in full and return its retained lines.
///
/// Cell characters are not interpreted here; that is the parser's job.
pub fn load_puzzle_from_file(path: impl AsRef<Path>) -> Result<RawPuzzle> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    read_puzzle(name, BufReader::new(File::open(path)?))
}

/// Read a puzzle from any buffered source under the given `name`.
///
/// Lines that are empty or whitespace-only are discarded wherever they occur;
/// the rest keep their original order. Fails with
/// [`EmptyInput`](PuzzleError::EmptyInput) if nothing remains, or with
/// [`NonRectangularGrid`](PuzzleError::NonRectangularGrid) if any retained
/// line's length differs from the first retained line's.
pub fn read_puzzle(name: String, reader: impl BufRead) -> Result<RawPuzzle> {
    let grid_lines = reader
        .lines()
        .filter_ok(|line| !line.trim().is_empty())
        .collect::<std::io::Result<Vec<_>>>()?;

    let Some(first) = grid_lines.first() else {
        return Err(PuzzleError::EmptyInput { name });
    };

    let expected = first.chars().count();
    for (row, line) in grid_lines.iter().enumerate() {
        let len = line.chars().count();
        if len != expected {
            return Err(PuzzleError::NonRectangularGrid { name, row, len, expected });
        }
    }

    debug!("loaded puzzle {:?}: {} retained lines of width {}", name, grid_lines.len(), expected);

    Ok(RawPuzzle { name, grid_lines })
}
