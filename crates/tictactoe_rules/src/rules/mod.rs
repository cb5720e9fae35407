//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Callers must check for a
//! win before checking for a draw: a full board that also completes a line
//! is a win.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, has_win, winner, winning_line};
