//! Command-line interface for tictoc.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictoc::{ConfigError, GameConfig, TimerConfig};
use tracing::instrument;

/// Tic Tac Toe - two players, one board, one clock
#[derive(Parser, Debug)]
#[command(name = "tictoc")]
#[command(about = "Two-player tic-tac-toe with a countdown clock", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Game settings
    #[command(flatten)]
    pub game: GameArgs,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Log file (the terminal is busy drawing the board)
        #[arg(long, default_value = "tictoc.log")]
        log_file: PathBuf,
    },

    /// Read commands from stdin and print JSON notifications
    Headless,
}

/// Settings shared by every command. Flags override the config file and
/// environment.
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Name for player X
    #[arg(long, global = true)]
    pub player_x: Option<String>,

    /// Name for player O
    #[arg(long, global = true)]
    pub player_o: Option<String>,

    /// Seconds on the clock
    #[arg(long, global = true)]
    pub timer_secs: Option<u32>,

    /// Start the clock with every new game
    #[arg(long, global = true)]
    pub auto_timer: bool,
}

impl GameArgs {
    /// Builds the configuration: file, then environment, then flags.
    #[instrument(skip(self))]
    pub fn load_config(&self) -> Result<GameConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        let mut config = config.apply_env()?;

        if let Some(name) = &self.player_x {
            config = config.with_player_x_name(name.clone());
        }
        if let Some(name) = &self.player_o {
            config = config.with_player_o_name(name.clone());
        }

        let mut timer: TimerConfig = *config.timer();
        if let Some(secs) = self.timer_secs {
            timer = timer.with_duration_secs(secs);
        }
        if self.auto_timer {
            timer = timer.with_auto_start(true);
        }
        let config = config.with_timer(timer);

        config.validate()?;
        Ok(config)
    }
}
