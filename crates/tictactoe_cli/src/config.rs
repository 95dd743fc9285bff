//! Game configuration loaded from `tictactoe.toml`.

use crate::cli::{ModeArgs, PlayArgs};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_engine::{Difficulty, SessionConfig};
use tracing::{debug, info, instrument};

/// File read when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Settings under `[game]`.
    #[serde(default)]
    game: GameSettings,
}

/// How a match is set up.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GameSettings {
    /// Human vs computer when true.
    #[serde(default = "default_single_player")]
    single_player: bool,

    /// Computer strength.
    #[serde(default)]
    difficulty: Difficulty,

    /// Pause before the computer replies, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Seed for reproducible random choices.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_single_player() -> bool {
    true
}

fn default_computer_delay_ms() -> u64 {
    500
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            single_player: default_single_player(),
            difficulty: Difficulty::default(),
            computer_delay_ms: default_computer_delay_ms(),
            seed: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `path`, or from [`DEFAULT_CONFIG_FILE`].
    ///
    /// A missing default file yields the defaults; a missing file that
    /// was asked for explicitly is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(game = ?config.game, "Config loaded successfully");
        Ok(config)
    }
}

impl GameSettings {
    /// Applies `play` flags on top of the file values.
    pub fn with_play_args(self, args: &PlayArgs) -> Self {
        let mut settings = self.with_mode_args(&args.mode);
        if let Some(delay) = args.delay_ms {
            settings.computer_delay_ms = delay;
        }
        settings
    }

    /// Applies mode flags on top of the file values.
    pub fn with_mode_args(mut self, args: &ModeArgs) -> Self {
        if args.two_player {
            self.single_player = false;
        }
        if let Some(difficulty) = args.difficulty {
            self.difficulty = difficulty;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        self
    }

    /// Engine configuration for a new session.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(self.single_player, self.difficulty)
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
