//! Screen implementations for the lobby state machine.

mod board;
mod register;
mod scoreboard;

pub use board::{BoardScreen, Confirm};
pub use register::{Field, RegisterScreen};
pub use scoreboard::ScoreboardScreen;
