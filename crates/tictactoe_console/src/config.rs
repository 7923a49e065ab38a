//! Game configuration loaded from TOML and command-line overrides.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::{DEFAULT_DEPTH, Heuristic, Mark, NUM_SPACES};
use tracing::{debug, info, instrument};

/// Who takes the first turn.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// Shuffle the seats.
    #[default]
    Random,
    /// The human opens.
    Human,
    /// The computer opens.
    Computer,
}

/// Settings for one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Minimax search depth in plies.
    #[serde(default = "default_depth")]
    depth: u8,

    /// Line scoring rule used by the computer.
    #[serde(default)]
    heuristic: Heuristic,

    /// Symbol shown for the human's marks.
    #[serde(default = "default_human_symbol")]
    human_symbol: Mark,

    /// Symbol shown for the computer's marks.
    #[serde(default = "default_computer_symbol")]
    computer_symbol: Mark,

    /// Seat order.
    #[serde(default)]
    first: FirstPlayer,

    /// RNG seed for seat shuffling and the computer's opening move.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_depth() -> u8 {
    DEFAULT_DEPTH
}

fn default_human_symbol() -> Mark {
    Mark::HUMAN
}

fn default_computer_symbol() -> Mark {
    Mark::COMPUTER
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            depth: default_depth(),
            heuristic: Heuristic::default(),
            human_symbol: default_human_symbol(),
            computer_symbol: default_computer_symbol(),
            first: FirstPlayer::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(depth = config.depth, heuristic = %config.heuristic, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides and validates the result.
    #[instrument(skip_all)]
    pub fn with_overrides(mut self, cli: &Cli) -> Result<Self, ConfigError> {
        if let Some(depth) = cli.depth {
            debug!(depth, "Overriding depth");
            self.depth = depth;
        }
        if let Some(heuristic) = cli.heuristic {
            self.heuristic = heuristic;
        }
        if let Some(first) = cli.first {
            self.first = first;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if let Some(symbol) = cli.human_symbol {
            self.human_symbol =
                Mark::new(symbol).map_err(|e| ConfigError::new(format!("Human symbol: {}", e)))?;
        }
        if let Some(symbol) = cli.computer_symbol {
            self.computer_symbol = Mark::new(symbol)
                .map_err(|e| ConfigError::new(format!("Computer symbol: {}", e)))?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks the depth range and that the two symbols differ.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 || usize::from(self.depth) > NUM_SPACES {
            return Err(ConfigError::new(format!(
                "Depth must be between 1 and {}, got {}",
                NUM_SPACES, self.depth
            )));
        }
        if self.human_symbol == self.computer_symbol {
            return Err(ConfigError::new(format!(
                "Both players use the symbol {}",
                self.human_symbol
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
