//! Terminal-condition rules for tic-tac-toe.

mod draw;
mod win;

pub use draw::{is_full, is_tie};
pub use win::{LINES, check_winner, winning_line};
