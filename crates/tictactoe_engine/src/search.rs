//! Depth-bounded minimax over the live board.
//!
//! The search explores hypothetical positions by placing a mark, recursing,
//! and putting the previous square back before trying the next move. The
//! board is therefore borrowed mutably for the whole search, and is
//! identical before and after every call.

use crate::board::{Board, NUM_SPACES};
use crate::error::SearchError;
use crate::evaluator::Heuristic;
use crate::types::{Mark, Square, Turn};
use rand::Rng;
use tracing::{debug, instrument, trace};

/// Default search depth, in plies.
pub const DEFAULT_DEPTH: u8 = 2;

/// Minimax move selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    depth: u8,
    heuristic: Heuristic,
}

impl Minimax {
    /// Creates a search engine with the given depth and heuristic.
    pub fn new(depth: u8, heuristic: Heuristic) -> Self {
        Self { depth, heuristic }
    }

    /// Creates a search engine with the default heuristic.
    pub fn with_depth(depth: u8) -> Self {
        Self::new(depth, Heuristic::default())
    }

    /// Search depth in plies.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Line scoring rule applied at the leaves.
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Chooses a move for `turn.current()`.
    ///
    /// On an empty board every space is picked uniformly at random from
    /// `rng`; otherwise the choice is fully determined by the board, the
    /// turn, the depth and the heuristic. The board is not changed.
    ///
    /// # Errors
    ///
    /// [`SearchError::NoLegalMoves`] if the game is already decided and
    /// [`SearchError::DepthExhausted`] for a depth of zero.
    #[instrument(skip(self, board, rng), fields(depth = self.depth, heuristic = %self.heuristic))]
    pub fn make_pick<R: Rng>(
        &self,
        board: &mut Board,
        turn: Turn,
        rng: &mut R,
    ) -> Result<usize, SearchError> {
        let legal = board.legal_moves();
        if legal.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }
        if legal.len() == NUM_SPACES {
            let index = rng.gen_range(0..NUM_SPACES);
            debug!(index, "Opening move chosen at random");
            return Ok(index);
        }

        let (score, index) = self.search(board, self.depth, turn.current(), turn);
        let index = index.ok_or(SearchError::DepthExhausted)?;
        debug!(index, score, "Minimax chose move");
        Ok(index)
    }

    /// Scores the position with `mover` to play, returning the best score
    /// and the move achieving it.
    ///
    /// Nodes where `mover` is `turn.current()` maximize, the others
    /// minimize. Ties go to the lowest index, since only a strictly better
    /// score replaces the incumbent. Leaves (depth 0 or no legal moves)
    /// return the static evaluation and no move.
    pub fn search(
        &self,
        board: &mut Board,
        depth: u8,
        mover: Mark,
        turn: Turn,
    ) -> (i32, Option<usize>) {
        let moves = board.legal_moves();
        if moves.is_empty() || depth == 0 {
            return (self.heuristic.evaluate(board, turn), None);
        }

        let maximizing = turn.is_maximizing(mover);
        let next = turn.next_mover(mover);
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_index = None;

        for index in moves {
            let saved = board.swap(index, Square::Occupied(mover));
            let (score, _) = self.search(board, depth - 1, next, turn);
            board.swap(index, saved);

            trace!(index, depth, score, maximizing, "Explored move");

            let better = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if better {
                best_score = score;
                best_index = Some(index);
            }
        }

        (best_score, best_index)
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }
}

/// Picks a move for `player` against `waiting` on a copy of `board`.
///
/// Uses the default heuristic and the thread-local RNG for the empty-board
/// opening.
///
/// # Errors
///
/// [`SearchError::SamePlayer`] if `player` and `waiting` share a mark,
/// otherwise see [`Minimax::make_pick`].
pub fn pick_move(
    board: &Board,
    player: Mark,
    waiting: Mark,
    depth: u8,
) -> Result<usize, SearchError> {
    let turn = Turn::new(player, waiting)?;
    let mut scratch = board.clone();
    Minimax::with_depth(depth).make_pick(&mut scratch, turn, &mut rand::thread_rng())
}
