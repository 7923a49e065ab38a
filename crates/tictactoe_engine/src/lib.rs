//! Tic-tac-toe engine: board, positional heuristic and minimax search.
//!
//! The crate holds the pure game logic. A turn loop drives it through a
//! narrow interface:
//!
//! - [`Board::mark_space`], [`Board::is_valid_space`],
//!   [`Board::legal_moves`], [`Board::winner`] and [`Board::render`]
//!   to apply moves and query state.
//! - [`Minimax::make_pick`] (or the [`pick_move`] shorthand) to choose the
//!   computer's move.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Mark, pick_move};
//!
//! let mut board = Board::new();
//! board.mark_space(0, Mark::HUMAN)?;
//! board.mark_space(1, Mark::HUMAN)?;
//! board.mark_space(4, Mark::COMPUTER)?;
//! board.mark_space(8, Mark::COMPUTER)?;
//!
//! // The computer blocks the top row.
//! assert_eq!(pick_move(&board, Mark::COMPUTER, Mark::HUMAN, 2)?, 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod evaluator;
mod lines;
mod search;
mod types;

pub use board::{Board, GameStatus, LegalMoves, NUM_SPACES};
pub use error::{BoardError, SearchError};
pub use evaluator::Heuristic;
pub use lines::{Win, WinLine};
pub use search::{DEFAULT_DEPTH, Minimax, pick_move};
pub use types::{Mark, Square, Turn};
