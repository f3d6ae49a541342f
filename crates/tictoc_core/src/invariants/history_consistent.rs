//! History consistency invariant: history and board agree.

use super::Invariant;
use crate::{GameState, Position};

/// Invariant: exactly the played squares are occupied.
///
/// History lists each square at most once, every listed square is occupied,
/// and nothing else is.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let history = state.history();

        let mut seen = [false; 9];
        for pos in history {
            if std::mem::replace(&mut seen[pos.to_index()], true) {
                return false;
            }
        }

        Position::ALL
            .iter()
            .all(|pos| seen[pos.to_index()] != board.is_empty(*pos))
    }

    fn description() -> &'static str {
        "Occupied squares are exactly the squares in the move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, Player, Square};

    #[test]
    fn test_history_matches_board() {
        let mut game = Game::new();
        for index in [4, 0, 8] {
            game.apply_move(index).expect("legal move");
        }
        assert!(HistoryConsistentInvariant::holds(game.state()));
    }

    #[test]
    fn test_unrecorded_mark_violates() {
        let mut state = GameState::new();
        state
            .board_mut()
            .set(Position::Center, Square::Occupied(Player::X));
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}
