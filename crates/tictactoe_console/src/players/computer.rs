//! Computer player backed by the minimax engine.

use super::Player;
use anyhow::Result;
use rand_chacha::ChaCha8Rng;
use tictactoe_engine::{Board, Mark, Minimax, Turn};
use tracing::{debug, instrument};

/// Computer player that searches for its move.
pub struct ComputerPlayer {
    name: String,
    mark: Mark,
    engine: Minimax,
    rng: ChaCha8Rng,
}

impl ComputerPlayer {
    /// Creates a computer player; `rng` drives the empty-board opening.
    pub fn new(name: impl Into<String>, mark: Mark, engine: Minimax, rng: ChaCha8Rng) -> Self {
        Self {
            name: name.into(),
            mark,
            engine,
            rng,
        }
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip(self, board), fields(computer = %self.name))]
    fn make_play(&mut self, board: &mut Board, opponent: Mark) -> Result<usize> {
        let turn = Turn::new(self.mark, opponent)?;
        let space = self.engine.make_pick(board, turn, &mut self.rng)?;
        board.mark_space(space, self.mark)?;
        debug!(space, "Computer played");
        Ok(space)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }
}
