//! The eight winning lines.

use crate::types::Mark;
use strum::IntoEnumIterator;

/// One of the eight index triples that wins when uniformly occupied.
///
/// Iteration order (via [`WinLine::all`]) is the fixed table order:
/// rows top to bottom, columns left to right, then the two diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum WinLine {
    /// Spaces 0, 1, 2.
    TopRow,
    /// Spaces 3, 4, 5.
    MiddleRow,
    /// Spaces 6, 7, 8.
    BottomRow,
    /// Spaces 0, 3, 6.
    LeftColumn,
    /// Spaces 1, 4, 7.
    CenterColumn,
    /// Spaces 2, 5, 8.
    RightColumn,
    /// Spaces 0, 4, 8.
    MainDiagonal,
    /// Spaces 2, 4, 6.
    AntiDiagonal,
}

impl WinLine {
    /// Space indices of this line, in scoring order.
    pub const fn cells(self) -> [usize; 3] {
        match self {
            WinLine::TopRow => [0, 1, 2],
            WinLine::MiddleRow => [3, 4, 5],
            WinLine::BottomRow => [6, 7, 8],
            WinLine::LeftColumn => [0, 3, 6],
            WinLine::CenterColumn => [1, 4, 7],
            WinLine::RightColumn => [2, 5, 8],
            WinLine::MainDiagonal => [0, 4, 8],
            WinLine::AntiDiagonal => [2, 4, 6],
        }
    }

    /// All lines in table order.
    pub fn all() -> impl Iterator<Item = WinLine> {
        WinLine::iter()
    }
}

/// A completed line and the player holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Win {
    /// The completed line.
    pub line: WinLine,
    /// The player occupying all three spaces.
    pub mark: Mark,
}
