//! Tic-tac-toe against a minimax opponent, played on the console.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod orchestrator;
mod players;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::{FirstPlayer, GameConfig};
use orchestrator::{GameOutcome, Orchestrator};
use players::{ComputerPlayer, HumanPlayer, Player};
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tictactoe_engine::Minimax;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?
        .with_overrides(&cli)
        .context("Invalid game configuration")?;

    match run_game(&config)? {
        GameOutcome::Won { name, mark, line } => {
            info!(winner = %name, %mark, %line, "Game finished")
        }
        GameOutcome::Tie => info!("Game finished in a tie"),
    }
    Ok(())
}

/// Logs go to stderr so they never interleave with the grid on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("warn,tictactoe_engine=info,tictactoe_console=info")
            }),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Seats the players and runs one game on stdin/stdout.
#[instrument(skip(config), fields(depth = *config.depth(), heuristic = %config.heuristic()))]
fn run_game(config: &GameConfig) -> Result<GameOutcome> {
    let mut rng = match config.seed() {
        Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let human: Box<dyn Player> = Box::new(HumanPlayer::new(
        "human",
        *config.human_symbol(),
        std::io::stdin().lock(),
        std::io::stdout(),
    ));
    let computer: Box<dyn Player> = Box::new(ComputerPlayer::new(
        "computer",
        *config.computer_symbol(),
        Minimax::new(*config.depth(), *config.heuristic()),
        ChaCha8Rng::seed_from_u64(rng.next_u64()),
    ));

    let mut players = [human, computer];
    match config.first() {
        FirstPlayer::Human => {}
        FirstPlayer::Computer => players.swap(0, 1),
        FirstPlayer::Random => players.shuffle(&mut rng),
    }

    Orchestrator::new(players, std::io::stdout()).run()
}
