//! The 3x3 board: state, win detection, legal moves and rendering.

use crate::error::BoardError;
use crate::lines::{Win, WinLine};
use crate::types::{Mark, Square};
use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// Number of spaces on the board.
pub const NUM_SPACES: usize = 9;

/// Legal move indices in ascending order. Lives on the stack.
pub type LegalMoves = ArrayVec<usize, NUM_SPACES>;

/// Indentation preceding every grid row and closing the rendered text.
const GRID_INDENT: &str = "        ";

/// Current status of the game on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves remain and nobody has won.
    InProgress,
    /// A player completed a line.
    Won(Win),
    /// Every space is taken and nobody won.
    Tie,
}

impl GameStatus {
    /// True once the game is decided.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Spaces are indexed row-major:
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; NUM_SPACES],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; NUM_SPACES],
        }
    }

    /// Returns all squares in index order.
    pub fn squares(&self) -> &[Square; NUM_SPACES] {
        &self.squares
    }

    /// Gets the square at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidIndex`] if `index` is 9 or more.
    pub fn get(&self, index: usize) -> Result<Square, BoardError> {
        self.squares
            .get(index)
            .copied()
            .ok_or(BoardError::InvalidIndex(index))
    }

    /// Checks whether a space is unoccupied.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidIndex`] if `index` is 9 or more.
    pub fn is_space_open(&self, index: usize) -> Result<bool, BoardError> {
        Ok(self.get(index)? == Square::Empty)
    }

    /// True if `index` is on the board and the space is open.
    pub fn is_valid_space(&self, index: usize) -> bool {
        self.is_space_open(index).unwrap_or(false)
    }

    /// Places `mark` on the space at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidIndex`] for an index off the board and
    /// [`BoardError::IllegalMove`] for an occupied space. The board is left
    /// unchanged in both cases.
    #[instrument(skip(self, mark), fields(mark = %mark))]
    pub fn mark_space(&mut self, index: usize, mark: Mark) -> Result<(), BoardError> {
        match self.get(index)? {
            Square::Empty => {
                self.squares[index] = Square::Occupied(mark);
                debug!(index, "Space marked");
                Ok(())
            }
            Square::Occupied(occupant) => Err(BoardError::IllegalMove { index, occupant }),
        }
    }

    /// Open spaces in ascending order, or none once somebody has won.
    #[instrument(level = "trace", skip(self))]
    pub fn legal_moves(&self) -> LegalMoves {
        if self.winner(None).is_some() {
            return LegalMoves::new();
        }
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Finds the first completed line in table order.
    ///
    /// With a `filter`, lines completed by other players are skipped. If
    /// several lines are complete (which legal play cannot produce) only the
    /// first one in table order is reported.
    #[instrument(level = "trace", skip(self))]
    pub fn winner(&self, filter: Option<Mark>) -> Option<Win> {
        WinLine::all().find_map(|line| {
            let [a, b, c] = line.cells();
            let mark = self.squares[a].mark()?;
            let complete = self.squares[b] == self.squares[a] && self.squares[c] == self.squares[a];
            let wanted = filter.is_none_or(|f| f == mark);
            (complete && wanted).then_some(Win { line, mark })
        })
    }

    /// Reports whether the game is still running, won or tied.
    pub fn status(&self) -> GameStatus {
        if let Some(win) = self.winner(None) {
            GameStatus::Won(win)
        } else if self.is_full() {
            GameStatus::Tie
        } else {
            GameStatus::InProgress
        }
    }

    /// True if every space is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of occupied spaces.
    pub fn marks_placed(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Renders the board as a grid; open spaces show their own index.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Replaces a square and returns the previous one.
    ///
    /// Used by the search for speculative moves. `index` comes from
    /// [`Board::legal_moves`] and is always on the board.
    pub(crate) fn swap(&mut self, index: usize, square: Square) -> Square {
        std::mem::replace(&mut self.squares[index], square)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for (row, squares) in self.squares.chunks(3).enumerate() {
            write!(f, "{GRID_INDENT}|")?;
            for (col, square) in squares.iter().enumerate() {
                match square {
                    Square::Empty => write!(f, "{}|", row * 3 + col)?,
                    Square::Occupied(mark) => write!(f, "{}|", mark)?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "{GRID_INDENT}")
    }
}
