//! Pure tic-tac-toe rules.
//!
//! This crate contains no I/O. It provides the board model, the fixed set of
//! winning lines, win and draw detection, and the single-round state machine
//! used by the scoreboard client.
//!
//! # Example
//!
//! ```
//! use tictactoe_rules::{Outcome, Placement, Position, Round, Symbol};
//!
//! let mut round = Round::new();
//! for pos in [
//!     Position::TopLeft,
//!     Position::MiddleLeft,
//!     Position::TopCenter,
//!     Position::Center,
//! ] {
//!     round.place(pos);
//! }
//! let placement = round.place(Position::TopRight);
//! assert_eq!(placement, Placement::Finished(Outcome::Winner(Symbol::X)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod outcome;
mod position;
mod round;
pub mod rules;
mod types;

pub use outcome::{Outcome, OutcomeTag};
pub use position::Position;
pub use round::{Placement, Round, RoundStatus};
pub use rules::{LINES, has_win, is_draw, winner, winning_line};
pub use types::{Board, BoardParseError, Square, Symbol};
