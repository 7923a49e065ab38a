//! Turn loop between two players.

use crate::players::Player;
use anyhow::Result;
use std::io::Write;
use tictactoe_engine::{Board, GameStatus, Mark, WinLine};
use tracing::{debug, info};

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// A player completed a line.
    Won {
        /// Winner's display name.
        name: String,
        /// Winner's mark.
        mark: Mark,
        /// The completed line.
        line: WinLine,
    },
    /// The board filled up without a winner.
    Tie,
}

/// Runs a game between two seated players, printing to `out`.
pub struct Orchestrator<W> {
    board: Board,
    players: [Box<dyn Player>; 2],
    out: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates an orchestrator; `players[0]` moves first.
    pub fn new(players: [Box<dyn Player>; 2], out: W) -> Self {
        Self {
            board: Board::new(),
            players,
            out,
        }
    }

    /// Plays turns until the game is won or tied.
    pub fn run(&mut self) -> Result<GameOutcome> {
        info!(
            first = self.players[0].name(),
            second = self.players[1].name(),
            "Starting game"
        );
        writeln!(self.out, "{}", self.board)?;

        loop {
            for seat in 0..2 {
                let opponent = self.players[1 - seat].mark();
                let player = &mut self.players[seat];

                writeln!(self.out, "{}'s Turn ({}):", player.name(), player.mark())?;
                let space = player.make_play(&mut self.board, opponent)?;
                debug!(player = player.name(), space, "Move made");
                writeln!(self.out, "{}", self.board)?;

                match self.board.status() {
                    GameStatus::InProgress => {}
                    GameStatus::Tie => {
                        writeln!(self.out, "Tie!!!")?;
                        info!("Game tied");
                        return Ok(GameOutcome::Tie);
                    }
                    GameStatus::Won(win) => {
                        // Only the player who just moved can have completed a line.
                        let name = self.players[seat].name().to_string();
                        writeln!(self.out, "{} Won! Game Over", name)?;
                        info!(winner = %name, line = %win.line, "Game won");
                        return Ok(GameOutcome::Won {
                            name,
                            mark: win.mark,
                            line: win.line,
                        });
                    }
                }
            }
        }
    }
}
