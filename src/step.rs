use strum::VariantArray;

use crate::location::Location;

/// The four cardinal step directions on a square board.
///
/// Variant order is a contract: [`Board::neighbors4`](crate::Board::neighbors4)
/// visits directions in `Step::VARIANTS` order, so consumers relying on a
/// deterministic traversal get up, right, down, left.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Step {
    Up,
    Right,
    Down,
    Left,
}

impl Step {
    /// Attempt the step from `location` in the direction specified by `self`
    /// and return the resultant [`Location`], which may be out of bounds.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((0, 1)),
            Self::Down => location.offset_by((1, 0)),
            Self::Left => location.offset_by((0, -1)),
        }
    }
}
