//! Two-player tic-tac-toe with a countdown clock.
//!
//! # Architecture
//!
//! - **Core** (`tictoc_core`): board/turn engine and countdown state machine
//! - **Controller**: the single dispatcher that routes moves, ticks and
//!   resets to the core
//! - **Session**: async loop owning the event queue and the one-second ticker
//! - **Front ends**: terminal UI and a JSON-lines headless mode
//!
//! # Example
//!
//! ```
//! use tictoc::{Controller, Event, GameConfig, Notification};
//!
//! let mut controller = Controller::new(&GameConfig::default());
//! let notes = controller.handle(Event::Move(4));
//! assert!(matches!(notes.as_slice(), [Notification::State(_)]));
//! // The same cell again is ignored.
//! assert!(controller.handle(Event::Move(4)).is_empty());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
pub mod headless;
mod session;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, ENV_PLAYER_O, ENV_PLAYER_X, ENV_TIMER_SECS, GameConfig, TimerConfig};

// Crate-level exports - Dispatch
pub use controller::{Controller, Event, Notification};

// Crate-level exports - Runtime
pub use session::{SessionHandle, TICK_INTERVAL};

// Crate-level exports - Game types
pub use tictoc_core::{
    Board, Countdown, Game, GameState, Move, MoveError, Outcome, Player, PlayerNames, Position,
    Snapshot, Square, Status, Tick, TimerError, TimerPhase,
};
