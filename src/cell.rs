use std::fmt::{Display, Formatter};

/// A terminal color, normalized to a single uppercase ASCII letter.
///
/// Construction goes through [`TryFrom<char>`], which case-folds lowercase
/// letters and rejects everything else, so a `Color` in hand is always valid.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Color(char);

impl Color {
    /// The uppercase letter this color displays as.
    pub fn as_char(&self) -> char {
        self.0
    }
}

impl TryFrom<char> for Color {
    type Error = char;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        if ch.is_ascii_alphabetic() {
            Ok(Self(ch.to_ascii_uppercase()))
        } else {
            Err(ch)
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single cell of a board: empty, or a terminus of some color.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Cell {
    /// No terminal here; renders as `'.'`.
    #[default]
    Empty,
    /// An endpoint of the flow for the contained color.
    Terminus(Color),
}

impl Cell {
    /// The character this cell renders as.
    pub fn as_char(&self) -> char {
        match self {
            Self::Empty => '.',
            Self::Terminus(color) => color.as_char(),
        }
    }
}
