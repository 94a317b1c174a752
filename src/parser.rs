use std::collections::BTreeMap;

use log::debug;
use ndarray::Array2;

use crate::board::Board;
use crate::cell::{Cell, Color};
use crate::error::{PuzzleError, Result};
use crate::loader::RawPuzzle;
use crate::location::Location;

/// Convert a [`RawPuzzle`] into a [`Board`], consuming it.
///
/// The board dimension is the line count, and every line must be exactly that
/// long; the loader's rectangularity check does not guarantee this, so a
/// rectangular 2x3 input fails here with
/// [`SquareMismatch`](PuzzleError::SquareMismatch).
///
/// Cells are scanned row-major. `'.'` is empty; a letter is case-folded into
/// a [`Color`] and its location appended to that color's terminal list. Any
/// other character fails with [`InvalidCell`](PuzzleError::InvalidCell).
///
/// Terminal counts per color are not validated: zero, one, two, or more
/// occurrences of a letter are all accepted.
pub fn parse_raw_puzzle(raw: RawPuzzle) -> Result<Board> {
    let size = raw.grid_lines.len();

    let mut grid = Array2::from_elem((size, size), Cell::Empty);
    let mut terminals: BTreeMap<Color, Vec<Location>> = BTreeMap::new();

    for (row, line) in raw.grid_lines.iter().enumerate() {
        let len = line.chars().count();
        if len != size {
            return Err(PuzzleError::SquareMismatch { row, len, size });
        }

        for (col, ch) in line.chars().enumerate() {
            if ch == '.' {
                continue;
            }

            let color = Color::try_from(ch)
                .map_err(|ch| PuzzleError::InvalidCell { ch, row, col })?;
            grid[(row, col)] = Cell::Terminus(color);
            terminals.entry(color).or_default().push(Location(row, col));
        }
    }

    debug!("parsed puzzle {:?}: size {}, {} colors", raw.name, size, terminals.len());

    Ok(Board { size, grid, terminals })
}
