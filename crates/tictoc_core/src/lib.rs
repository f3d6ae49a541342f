//! Pure tic-tac-toe game logic with a countdown clock.
//!
//! Nothing in this crate performs I/O or schedules work. A runtime owns one
//! [`Game`] and one [`Countdown`], feeds them clicks and one-second ticks in
//! order, and renders [`Snapshot`]s.
//!
//! # Example
//!
//! ```
//! use tictoc_core::{Game, Outcome, Player, Status};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4] {
//!     game.apply_move(index).unwrap();
//! }
//! let status = game.apply_move(2).unwrap();
//! assert!(matches!(status, Status::Win { player: Player::X, .. }));
//! assert_eq!(game.outcome(), Outcome::Win(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod game;
pub mod invariants;
mod players;
mod position;
pub mod rules;
mod snapshot;
pub mod timer;
mod types;

pub use action::{Move, MoveError, Status};
pub use game::Game;
pub use players::PlayerNames;
pub use position::Position;
pub use snapshot::{Snapshot, status_message};
pub use timer::{Countdown, Tick, TimerError, TimerPhase};
pub use types::{Board, GameState, Outcome, Player, Square};
