//! Board/turn engine for tic-tac-toe.

use super::action::{Move, MoveError, Status};
use super::contracts::{Contract, InBounds, MoveContract};
use super::rules;
use super::types::{GameState, Outcome, Player};
use super::Position;
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the only [`GameState`]. Every mutation goes through one of the
/// methods below; rejected moves leave the state exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game: empty board, X to move, active.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether moves are accepted.
    pub fn active(&self) -> bool {
        self.state.active()
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Places the current player's mark on cell `index` (0-8).
    ///
    /// Out-of-range indices, occupied squares and finished games are
    /// rejected without touching the state.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, index: usize) -> Result<Status, MoveError> {
        let pos = InBounds::check(index).inspect_err(|e| debug!(error = %e, "Move ignored"))?;

        MoveContract::pre(&self.state, &pos).inspect_err(|e| debug!(error = %e, "Move ignored"))?;

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        self.state.place(pos);
        let status = self.evaluate_status();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &self.state)?;

        Ok(status)
    }

    /// Classifies the board after a mark was placed.
    ///
    /// A completed triple wins for the player who just moved, even when the
    /// same move fills the last square. Otherwise a full board is a tie, and
    /// anything else passes the turn.
    #[instrument(skip(self))]
    fn evaluate_status(&mut self) -> Status {
        let player = self.state.current_player();

        if let Some((winner, line)) = rules::winning_line(self.state.board()) {
            debug_assert_eq!(winner, player);
            self.state.finish(Outcome::Win(winner));
            info!(winner = %winner, ?line, board = %self.state.board().display(), "Game won");
            return Status::Win {
                player: winner,
                line,
            };
        }

        if rules::is_full(self.state.board()) {
            self.state.finish(Outcome::Tie);
            info!(board = %self.state.board().display(), "Game tied");
            return Status::Tie;
        }

        self.state.switch_player();
        Status::Continue {
            next: self.state.current_player(),
        }
    }

    /// Ends an active game because the clock ran out.
    ///
    /// Returns `false` (and changes nothing) if the game was already over.
    #[instrument(skip(self))]
    pub fn force_timeout(&mut self) -> bool {
        if !self.state.active() {
            debug!(outcome = %self.state.outcome(), "Timeout ignored");
            return false;
        }
        self.state.finish(Outcome::TimedOut);
        info!("Game timed out");
        true
    }

    /// Ends the game from the menu: clears the board and stops play.
    ///
    /// Returns `false` if the game was already abandoned.
    #[instrument(skip(self))]
    pub fn abandon(&mut self) -> bool {
        if self.state.outcome() == Outcome::Abandoned {
            return false;
        }
        self.state.clear_board();
        self.state.finish(Outcome::Abandoned);
        info!("Game abandoned");
        true
    }

    /// Reinitializes the game to its creation values.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
        info!("Game reset");
    }

    /// The completed triple, if the game was won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self.state.outcome() {
            Outcome::Win(_) => rules::winning_line(self.state.board()).map(|(_, line)| line),
            _ => None,
        }
    }

    /// The most recent move, if any.
    pub fn last_move(&self) -> Option<Move> {
        let history = self.state.history();
        let pos = *history.last()?;
        let player = if history.len() % 2 == 1 {
            Player::X
        } else {
            Player::O
        };
        Some(Move::new(player, pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play(game: &mut Game, moves: &[usize]) -> Status {
        let mut status = None;
        for index in moves {
            status = Some(game.apply_move(*index).expect("legal move"));
        }
        status.expect("at least one move")
    }

    #[test]
    fn test_move_marks_and_switches() {
        let mut game = Game::new();
        let status = game.apply_move(4).unwrap();
        assert_eq!(status, Status::Continue { next: Player::O });
        assert_eq!(
            game.state().board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(game.last_move(), Some(Move::new(Player::X, Position::Center)));
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut game = Game::new();
        assert_eq!(game.apply_move(9), Err(MoveError::OutOfRange(9)));
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_occupied_square_is_rejected() {
        let mut game = Game::new();
        game.apply_move(0).unwrap();
        let before = game.clone();
        assert_eq!(
            game.apply_move(0),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_win_beats_tie_on_last_square() {
        // Final board: X X X / O O X / O X O, X's ninth mark at 2.
        let mut game = Game::new();
        let status = play(&mut game, &[0, 3, 1, 4, 5, 6, 7, 8, 2]);
        assert_eq!(
            status,
            Status::Win {
                player: Player::X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            }
        );
        assert!(game.state().board().is_full());
        assert_eq!(game.outcome(), Outcome::Win(Player::X));
    }

    #[test]
    fn test_timeout_is_applied_once() {
        let mut game = Game::new();
        assert!(game.force_timeout());
        assert!(!game.force_timeout());
        assert_eq!(game.outcome(), Outcome::TimedOut);
        assert!(!game.active());
    }

    #[test]
    fn test_timeout_after_win_keeps_win() {
        let mut game = Game::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        assert!(!game.force_timeout());
        assert_eq!(game.outcome(), Outcome::Win(Player::X));
    }

    #[test]
    fn test_abandon_clears_board() {
        let mut game = Game::new();
        play(&mut game, &[0, 4]);
        assert!(game.abandon());
        assert_eq!(game.state().board().empty_count(), 9);
        assert_eq!(game.outcome(), Outcome::Abandoned);
        assert!(!game.active());
        assert!(!game.abandon());
    }

    #[test]
    fn test_winning_line_only_for_wins() {
        let mut game = Game::new();
        assert_eq!(game.winning_line(), None);
        play(&mut game, &[2, 0, 4, 1, 6]);
        assert_eq!(
            game.winning_line(),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }
}
