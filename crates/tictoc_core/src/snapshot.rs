//! Render-ready view of a game for presentation layers.

use super::timer::{Countdown, TimerPhase};
use super::{Game, Move, Outcome, Player, PlayerNames, Position};
use serde::{Deserialize, Serialize};

/// Everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cell marks in row-major order: `""`, `"X"` or `"O"`.
    pub cells: [String; 9],
    /// Player to move (or who made the winning move).
    pub current_player: Player,
    /// Display name of `current_player`.
    pub current_player_name: String,
    /// Whether moves are accepted.
    pub active: bool,
    /// Game outcome.
    pub outcome: Outcome,
    /// Completed triple, for wins.
    pub winning_line: Option<[Position; 3]>,
    /// Most recent mark placed, if any.
    pub last_move: Option<Move>,
    /// One-line status text.
    pub message: String,
    /// Seconds left on the clock.
    pub remaining_seconds: u32,
    /// Clock phase.
    pub timer: TimerPhase,
}

impl Snapshot {
    /// Captures `game` and `timer` with names from `names`.
    pub fn capture(game: &Game, timer: &Countdown, names: &PlayerNames) -> Self {
        let state = game.state();
        let cells = std::array::from_fn(|i| state.board().squares()[i].symbol().to_string());
        Self {
            cells,
            current_player: state.current_player(),
            current_player_name: names.name_of(state.current_player()).to_string(),
            active: state.active(),
            outcome: state.outcome(),
            winning_line: game.winning_line(),
            last_move: game.last_move(),
            message: status_message(game, names),
            remaining_seconds: timer.remaining(),
            timer: timer.phase(),
        }
    }
}

/// Status line for the game, worded for players.
pub fn status_message(game: &Game, names: &PlayerNames) -> String {
    match game.outcome() {
        Outcome::InProgress => {
            format!("{}'s turn", names.name_of(game.state().current_player()))
        }
        Outcome::Win(player) => format!("{} wins!", names.name_of(player)),
        Outcome::Tie => "It's a tie!".to_string(),
        Outcome::TimedOut => "Time's up! Game over.".to_string(),
        Outcome::Abandoned => "Game has ended. Thanks for playing!".to_string(),
    }
}
