#![warn(missing_docs)]

//! # `flowboard`
//!
//! A loader and board model for [Numberlink](https://en.wikipedia.org/wiki/Numberlink) puzzles as posited in the mobile game Flow Free.
//! Load a puzzle file with [`load_puzzle_from_file`] (or any buffered source with [`read_puzzle`]), yielding a [`RawPuzzle`], then convert it with [`parse_raw_puzzle`] into a queryable [`Board`].
//!
//! The pipeline validates as it goes: the loader drops blank lines and rejects non-rectangular input, and the parser rejects non-square grids and any cell character that is not `'.'` or an ASCII letter.
//! Every failure is a [`PuzzleError`] and is a deterministic function of the input text.
//!
//! A [`Board`] owns an N x N grid of [`Cell`]s and an index from each [`Color`] to its terminal [`Location`]s in row-major discovery order.
//! It exposes bounds checking, cell read/write, cardinal-neighbor enumeration in a fixed order, and grid rendering to any output sink.
//! Solving is out of scope here; the board's write surface exists for downstream consumers such as a path-finding solver.

pub use board::Board;
pub use cell::{Cell, Color};
pub use error::{PuzzleError, Result};
pub use loader::{load_puzzle_from_file, read_puzzle, RawPuzzle};
pub use location::Location;
pub use parser::parse_raw_puzzle;
pub use step::Step;

pub(crate) mod board;
mod tests;
pub(crate) mod cell;
pub(crate) mod error;
pub(crate) mod loader;
pub(crate) mod location;
pub(crate) mod parser;
pub(crate) mod step;
