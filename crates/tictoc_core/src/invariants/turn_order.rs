//! Turn order invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Outcome, Player, Square};

/// Invariant: Players alternate turns.
///
/// The n-th played square holds X for even n and O for odd n, and while the
/// game is undecided the player to move follows the same parity.
pub struct TurnOrderInvariant;

fn expected(ply: usize) -> Player {
    if ply % 2 == 0 { Player::X } else { Player::O }
}

impl Invariant<GameState> for TurnOrderInvariant {
    fn holds(state: &GameState) -> bool {
        let marks_alternate = state
            .history()
            .iter()
            .enumerate()
            .all(|(ply, pos)| state.board().get(*pos) == Square::Occupied(expected(ply)));

        let turn_matches = state.outcome() != Outcome::InProgress
            || state.current_player() == expected(state.history().len());

        marks_alternate && turn_matches
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(TurnOrderInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = Game::new();
        for index in [0, 4, 2, 6, 8] {
            game.apply_move(index).expect("legal move");
        }
        assert!(TurnOrderInvariant::holds(game.state()));
        assert_eq!(game.state().current_player(), Player::O);
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut game = Game::new();
        game.apply_move(0).expect("legal move");
        let mut state = game.state().clone();
        state
            .board_mut()
            .set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(!TurnOrderInvariant::holds(&state));
    }
}
