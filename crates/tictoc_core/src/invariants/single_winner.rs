//! At most one player can hold a winning triple.

use super::Invariant;
use crate::rules::LINES;
use crate::{GameState, Player, Square};

/// Invariant: no board has triples for both players.
pub struct SingleWinnerInvariant;

fn has_triple(state: &GameState, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| state.board().get(*pos) == Square::Occupied(player)))
}

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        !(has_triple(state, Player::X) && has_triple(state, Player::O))
    }

    fn description() -> &'static str {
        "At most one player holds a winning triple"
    }
}
