//! Keyboard mapping for the board.

use crate::controller::Event;
use crossterm::event::KeyCode;
use tictoc_core::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the highlight.
    Cursor(Position),
    /// Forward to the controller.
    Send(Event),
    /// Leave the game.
    Quit,
    /// Nothing.
    None,
}

/// Maps a key to an action given the current cursor.
pub fn key_action(cursor: Position, key: KeyCode) -> Action {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Action::Cursor(move_cursor(cursor, key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Action::Send(Event::Move(cursor.to_index())),
        KeyCode::Char(c @ '1'..='9') => match Position::parse(c.encode_utf8(&mut [0; 4])) {
            Some(pos) => Action::Send(Event::Move(pos.to_index())),
            None => Action::None,
        },
        KeyCode::Char('r') => Action::Send(Event::Reset),
        KeyCode::Char('t') => Action::Send(Event::StartTimer),
        KeyCode::Char('s') => Action::Send(Event::StopTimer),
        KeyCode::Char('e') => Action::Send(Event::EndGame),
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
