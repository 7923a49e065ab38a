//! Error types for board mutation and move search.

use crate::types::Mark;

/// Error raised when a board operation receives input it cannot honour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The space index is outside the board (0-8).
    #[display("Space {} is outside the board (0-8)", _0)]
    InvalidIndex(usize),

    /// The space is already occupied.
    #[display("Space {} is already occupied by {}", index, occupant)]
    IllegalMove {
        /// Requested space.
        index: usize,
        /// Mark currently holding the space.
        occupant: Mark,
    },

    /// The symbol cannot be told apart from an open space in the grid.
    #[display("Symbol {:?} cannot be used as a player mark", _0)]
    InvalidMark(char),
}

impl std::error::Error for BoardError {}

/// Error raised when the search engine cannot produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The board is already won or full.
    #[display("No legal moves available")]
    NoLegalMoves,

    /// A zero-depth search scores the board but never selects a move.
    #[display("Search depth is exhausted before any move was chosen")]
    DepthExhausted,

    /// Both sides of the turn carry the same mark.
    #[display("Both players use the mark {}", _0)]
    SamePlayer(Mark),
}

impl std::error::Error for SearchError {}
