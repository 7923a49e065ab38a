//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use tictactoe_engine::{Board, Mark};

/// Trait for players that can make moves.
pub trait Player {
    /// Chooses a space, marks it on the board and returns its index.
    ///
    /// `opponent` is the mark of the player waiting for their turn.
    fn make_play(&mut self, board: &mut Board, opponent: Mark) -> Result<usize>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns the player's mark.
    fn mark(&self) -> Mark;
}
