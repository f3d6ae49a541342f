//! tictoc - unified CLI
//!
//! Two-player tic-tac-toe with a countdown clock.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tictoc::{Controller, GameConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { ref log_file } => {
            init_file_tracing(log_file)?;
            let config = load(&cli)?;
            tictoc::tui::run_tui(Controller::new(&config)).await
        }
        Command::Headless => {
            init_stderr_tracing();
            let config = load(&cli)?;
            tictoc::headless::run_headless(Controller::new(&config)).await
        }
    }
}

fn load(cli: &Cli) -> Result<GameConfig> {
    let config = cli.game.load_config().context("Failed to load configuration")?;
    info!(
        player_x = %config.names().name_of(tictoc::Player::X),
        player_o = %config.names().name_of(tictoc::Player::O),
        duration_secs = *config.timer().duration_secs(),
        "Configuration ready"
    );
    Ok(config)
}

/// Logs to a file so the terminal stays clean for the board.
fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Logs to stderr; stdout carries the JSON stream.
fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
