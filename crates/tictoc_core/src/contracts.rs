//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use super::action::MoveError;
use super::invariants::check_game;
use super::{GameState, Position};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: The raw index must name a board cell.
pub struct InBounds;

impl InBounds {
    /// Resolves `index` to a position, rejecting anything outside `0..=8`.
    #[instrument]
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::OutOfRange(index))
    }
}

/// Precondition: The game must still accept moves.
pub struct GameActive;

impl GameActive {
    /// Rejects moves once the game is decided.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.active() {
            Ok(())
        } else {
            Err(MoveError::GameOver)
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto occupied squares.
    #[instrument(skip(state))]
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Contract for placing the current player's mark.
///
/// Preconditions:
/// - Index is on the board ([`InBounds`], checked before a position exists)
/// - Game is active
/// - Square is empty
///
/// Postconditions:
/// - Every [`GameInvariants`](super::invariants::GameInvariants) member holds
/// - Exactly one more square is occupied
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(state: &GameState, pos: &Position) -> Result<(), MoveError> {
        GameActive::check(state)?;
        SquareIsEmpty::check(*pos, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "Move did not add exactly one mark"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: move must add exactly one mark".to_string(),
            ));
        }

        check_game(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, Player, Square};

    #[test]
    fn test_in_bounds_resolves_cells() {
        assert_eq!(InBounds::check(0), Ok(Position::TopLeft));
        assert_eq!(InBounds::check(8), Ok(Position::BottomRight));
        assert_eq!(InBounds::check(9), Err(MoveError::OutOfRange(9)));
    }

    #[test]
    fn test_precondition_empty_square() {
        let state = GameState::new();
        assert!(MoveContract::pre(&state, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = Game::new();
        game.apply_move(4).expect("legal move");
        assert_eq!(
            MoveContract::pre(game.state(), &Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_inactive_game() {
        let mut game = Game::new();
        game.force_timeout();
        assert_eq!(
            MoveContract::pre(game.state(), &Position::Center),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let mut game = Game::new();
        game.apply_move(4).expect("legal move");
        assert!(MoveContract::post(&before, game.state()).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::new();
        let mut game = Game::new();
        game.apply_move(4).expect("legal move");
        let mut after = game.state().clone();
        after
            .board_mut()
            .set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
