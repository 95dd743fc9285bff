//! tictactoe - terminal front end
//!
//! Interactive play plus headless replay and simulation.

#![warn(missing_docs)]

mod cli;
mod config;
mod headless;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::AppConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if matches!(cli.command, Command::Play(_)) {
        init_file_tracing()?;
    } else {
        init_stderr_tracing();
    }

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Play(args) => {
            let settings = config.game().clone().with_play_args(&args);
            tui::run_tui(settings).await
        }
        Command::Replay { moves, json, mode } => {
            let settings = config.game().clone().with_mode_args(&mode);
            let report = headless::replay(&moves, settings.session_config(), *settings.seed());
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.to_text());
            }
            Ok(())
        }
        Command::Simulate { x, o, games, seed } => {
            let seed = seed.or(*config.game().seed());
            let summary = headless::simulate(x, o, games, seed)?;
            println!("{summary}");
            Ok(())
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Logs to a file so output does not corrupt the TUI.
fn init_file_tracing() -> Result<()> {
    let log_file = std::fs::File::create(tui::LOG_FILE)
        .with_context(|| format!("Failed to create {}", tui::LOG_FILE))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    info!("Logging to {}", tui::LOG_FILE);
    Ok(())
}

/// Headless commands keep stdout for results.
fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}
