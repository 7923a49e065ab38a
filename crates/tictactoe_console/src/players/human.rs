//! Human player reading space numbers from a line-oriented input.

use super::Player;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_engine::{Board, Mark};
use tracing::debug;

/// Human player answering `Space Number?` prompts.
pub struct HumanPlayer<R, W> {
    name: String,
    mark: Mark,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, mark: Mark, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            mark,
            input,
            output,
        }
    }

    /// Prompts until the input names an open space.
    fn read_space(&mut self, board: &Board) -> Result<usize> {
        loop {
            write!(self.output, "Space Number?")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read space number")?;
            if read == 0 {
                anyhow::bail!("Input closed before a space was chosen");
            }

            match line.trim().parse::<usize>() {
                Ok(space) if board.is_valid_space(space) => return Ok(space),
                Ok(space) => debug!(space, "Space is taken or off the board"),
                Err(e) => debug!(input = line.trim(), error = %e, "Not a space number"),
            }
            writeln!(self.output, "Invalid Space Number, Please choose again")?;
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn make_play(&mut self, board: &mut Board, _opponent: Mark) -> Result<usize> {
        let space = self.read_space(board)?;
        board.mark_space(space, self.mark)?;
        Ok(space)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }
}
