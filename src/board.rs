use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::io;
use std::io::Write;

use itertools::Itertools;
use ndarray::Array2;
use strum::VariantArray;

use crate::cell::{Cell, Color};
use crate::location::Location;
use crate::step::Step;

/// A validated square board: the grid of cells plus an index of terminal
/// locations per color.
///
/// Boards are produced by [`parse_raw_puzzle`](crate::parser::parse_raw_puzzle)
/// and then only queried, except through [`set`](Board::set), which exists for
/// consumers such as a solver marking path cells.
#[derive(Debug)]
pub struct Board {
    pub(crate) size: usize,
    pub(crate) grid: Array2<Cell>,
    // per color, terminal locations in row-major discovery order
    pub(crate) terminals: BTreeMap<Color, Vec<Location>>,
}

impl Board {
    /// The side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether both components of `location` lie in `[0, size)`.
    pub fn in_bounds(&self, location: Location) -> bool {
        location.0 < self.size && location.1 < self.size
    }

    /// The cell at `location`.
    ///
    /// Bounds are the caller's responsibility: indexing out of bounds panics.
    /// Call [`in_bounds`](Board::in_bounds) first where that matters.
    pub fn get(&self, location: Location) -> Cell {
        self.grid[location.as_index()]
    }

    /// Overwrite the cell at `location`. Same bounds contract as
    /// [`get`](Board::get).
    pub fn set(&mut self, location: Location, value: Cell) {
        self.grid[location.as_index()] = value;
    }

    /// The in-bounds subset of the four cardinal neighbors of `location`, in
    /// the fixed order up, right, down, left.
    pub fn neighbors4(&self, location: Location) -> Vec<Location> {
        Step::VARIANTS
            .iter()
            .map(|step| step.attempt_from(location))
            .filter(|neighbor| self.in_bounds(*neighbor))
            .collect_vec()
    }

    /// All colors with at least one terminal on the board, ascending.
    pub fn colors(&self) -> Vec<Color> {
        self.terminals.keys().copied().collect_vec()
    }

    /// The terminal locations of `color` in row-major discovery order, or an
    /// empty slice if the color does not appear on the board.
    pub fn terminals(&self, color: Color) -> &[Location] {
        self.terminals.get(&color).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Write the grid to `out`, one line per row, cells in column order.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        for row in self.grid.rows() {
            for cell in row {
                write!(out, "{}", cell.as_char())?;
            }
            writeln!(out)?;
        }

        Ok(())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.grid.rows() {
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
