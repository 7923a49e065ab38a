//! Core domain types for tic-tac-toe.

use crate::error::{BoardError, SearchError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A player's mark on the board.
///
/// The mark is the player's identity: two players are the same player
/// exactly when their marks are equal. The symbol is what the grid shows
/// in an occupied space, so it must not look like an open space index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Mark(char);

impl Mark {
    /// Default mark for the human player.
    pub const HUMAN: Mark = Mark('H');

    /// Default mark for the computer player.
    pub const COMPUTER: Mark = Mark('C');

    /// Creates a mark from a display symbol.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidMark`] for ASCII digits, `|`,
    /// whitespace and control characters.
    pub fn new(symbol: char) -> Result<Self, BoardError> {
        if symbol.is_ascii_digit() || symbol == '|' || symbol.is_whitespace() || symbol.is_control()
        {
            return Err(BoardError::InvalidMark(symbol));
        }
        Ok(Self(symbol))
    }

    /// Returns the display symbol.
    pub fn symbol(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Mark {
    type Error = BoardError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::new(symbol)
    }
}

impl From<Mark> for char {
    fn from(mark: Mark) -> char {
        mark.0
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A space on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Open space.
    Empty,
    /// Space occupied by a player.
    Occupied(Mark),
}

impl Square {
    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// Whose move it is and who is waiting.
///
/// Evaluation and search score positions from the `current` player's
/// point of view: the current player maximizes, the waiting player
/// minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Turn {
    current: Mark,
    waiting: Mark,
}

impl Turn {
    /// Creates a turn context.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::SamePlayer`] if both players share a mark.
    pub fn new(current: Mark, waiting: Mark) -> Result<Self, SearchError> {
        if current == waiting {
            return Err(SearchError::SamePlayer(current));
        }
        Ok(Self { current, waiting })
    }

    /// Player to move.
    pub fn current(self) -> Mark {
        self.current
    }

    /// Player waiting for their turn.
    pub fn waiting(self) -> Mark {
        self.waiting
    }

    /// The turn context after `current` has moved.
    pub fn swapped(self) -> Self {
        Self {
            current: self.waiting,
            waiting: self.current,
        }
    }

    /// True if a node where `mover` plays is a maximizing node.
    pub fn is_maximizing(self, mover: Mark) -> bool {
        mover == self.current
    }

    /// The player who moves after `mover`.
    pub fn next_mover(self, mover: Mark) -> Mark {
        if self.is_maximizing(mover) {
            self.waiting
        } else {
            self.current
        }
    }
}
