//! Command-line interface for the console game.

use crate::config::FirstPlayer;
use clap::Parser;
use tictactoe_engine::Heuristic;

/// Play tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply if it is missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Search depth of the computer, in plies (1-9)
    #[arg(short, long)]
    pub depth: Option<u8>,

    /// Line scoring rule: corrected or faithful
    #[arg(long)]
    pub heuristic: Option<Heuristic>,

    /// Who opens the game
    #[arg(long, value_enum)]
    pub first: Option<FirstPlayer>,

    /// Seed for seat shuffling and the computer's opening move
    #[arg(long)]
    pub seed: Option<u64>,

    /// Symbol for the human's marks
    #[arg(long)]
    pub human_symbol: Option<char>,

    /// Symbol for the computer's marks
    #[arg(long)]
    pub computer_symbol: Option<char>,
}
