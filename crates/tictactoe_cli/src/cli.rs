//! Command-line interface for tictactoe.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::{Difficulty, Position};

/// Tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe in the terminal with three computer strengths", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults to tictactoe.toml)
    #[arg(long, global = true, env = "TICTACTOE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play(PlayArgs),

    /// Drive one session from a list of moves and print what happened
    Replay {
        /// Comma-separated cells as indices (0-8) or labels, e.g. 4,top-left,8
        #[arg(long, value_delimiter = ',', required = true, value_parser = parse_cell)]
        moves: Vec<usize>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        mode: ModeArgs,
    },

    /// Pit two computer strengths against each other
    Simulate {
        /// Strategy playing X
        #[arg(long = "x", default_value = "easy")]
        x: Difficulty,

        /// Strategy playing O
        #[arg(long = "o", default_value = "hard")]
        o: Difficulty,

        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for reproducible random choices
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Flags for the interactive game.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    #[command(flatten)]
    pub mode: ModeArgs,

    /// Pause before the computer replies, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

/// Mode flags shared by `play` and `replay`; unset flags fall back to
/// the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct ModeArgs {
    /// Two humans share the keyboard
    #[arg(long)]
    pub two_player: bool,

    /// Computer strength: easy, medium or hard
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Seed for reproducible random choices
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Parses a cell label or index. Indices past 8 are kept so the session
/// can reject them like any other bad move.
fn parse_cell(s: &str) -> Result<usize, String> {
    match Position::from_label_or_number(s) {
        Some(position) => Ok(position.to_index()),
        None => s
            .trim()
            .parse::<usize>()
            .map_err(|_| format!("'{s}' is neither a cell index nor a cell label")),
    }
}
