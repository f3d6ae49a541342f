//! Game configuration: player names and the countdown.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictoc_core::PlayerNames;
use tictoc_core::timer::DEFAULT_DURATION_SECS;
use tracing::{debug, info, instrument};

/// Environment variable overriding X's name.
pub const ENV_PLAYER_X: &str = "TICTOC_PLAYER_X";
/// Environment variable overriding O's name.
pub const ENV_PLAYER_O: &str = "TICTOC_PLAYER_O";
/// Environment variable overriding the countdown length.
pub const ENV_TIMER_SECS: &str = "TICTOC_TIMER_SECS";

/// Configuration for one game session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Display name for X. Blank means "Player X".
    #[serde(default)]
    player_x_name: String,

    /// Display name for O. Blank means "Player O".
    #[serde(default)]
    player_o_name: String,

    /// Countdown settings.
    #[serde(default)]
    timer: TimerConfig,
}

/// Countdown settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct TimerConfig {
    /// Seconds on the clock when it starts.
    #[serde(default = "default_duration_secs")]
    duration_secs: u32,

    /// Start the clock as soon as a game begins.
    #[serde(default)]
    auto_start: bool,

    /// Restart the clock on reset if it had been used.
    #[serde(default = "default_restart_on_reset")]
    restart_on_reset: bool,
}

fn default_duration_secs() -> u32 {
    DEFAULT_DURATION_SECS
}

fn default_restart_on_reset() -> bool {
    true
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_duration_secs(),
            auto_start: false,
            restart_on_reset: default_restart_on_reset(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(
            duration_secs = config.timer.duration_secs,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Applies `TICTOC_*` environment overrides.
    #[instrument(skip(self))]
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up through `var`.
    pub fn apply_vars(
        mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(name) = var(ENV_PLAYER_X) {
            self.player_x_name = name;
        }
        if let Some(name) = var(ENV_PLAYER_O) {
            self.player_o_name = name;
        }
        if let Some(secs) = var(ENV_TIMER_SECS) {
            let secs = secs.trim().parse::<u32>().map_err(|e| {
                ConfigError::new(format!(
                    "{} must be a whole number of seconds: {}",
                    ENV_TIMER_SECS, e
                ))
            })?;
            self.timer.duration_secs = secs;
        }
        self.validate()?;
        Ok(self)
    }

    /// Rejects settings the game cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timer.duration_secs == 0 {
            return Err(ConfigError::new(
                "timer.duration_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Player names with defaults filled in.
    pub fn names(&self) -> PlayerNames {
        PlayerNames::new(self.player_x_name.as_str(), self.player_o_name.as_str())
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
