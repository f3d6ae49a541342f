//! Decided games accept no moves; undecided games do.

use super::Invariant;
use crate::GameState;

/// Invariant: `active` is true exactly while the outcome is `InProgress`.
pub struct DecidedInactiveInvariant;

impl Invariant<GameState> for DecidedInactiveInvariant {
    fn holds(state: &GameState) -> bool {
        state.active() != state.outcome().is_decided()
    }

    fn description() -> &'static str {
        "A game is active exactly while its outcome is undecided"
    }
}
