//! Single-round state machine.
//!
//! A round moves `Empty → InProgress → {Won | Draw}`. Terminal states accept
//! no further placements until [`Round::reset`] returns the round to `Empty`.
//! X always opens, and the turn flips once per accepted placement.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::rules::{has_win, is_draw};
use crate::{Board, Outcome, Position, Square, Symbol};

/// Phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// No symbol placed yet.
    Empty,
    /// At least one symbol placed, no result yet.
    InProgress,
    /// A symbol completed a line.
    Won(Symbol),
    /// The board filled without a line.
    Draw,
}

impl RoundStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundStatus::Won(_) | RoundStatus::Draw)
    }
}

/// Result of a placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Placement rejected: occupied square or finished round. Nothing changed.
    Ignored,
    /// Placement accepted and the round continues.
    Continue {
        /// Symbol to move next.
        next: Symbol,
    },
    /// Placement accepted and ended the round.
    Finished(Outcome),
}

/// One round on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    board: Board,
    to_move: Symbol,
    status: RoundStatus,
    history: Vec<Position>,
}

impl Round {
    /// Creates an empty round with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Symbol::X,
            status: RoundStatus::Empty,
            history: Vec::new(),
        }
    }

    /// Places the current symbol at `pos`.
    ///
    /// Occupied squares and finished rounds are no-ops. A win is checked
    /// before a draw, so a placement that both fills the board and completes
    /// a line is a win.
    #[instrument(skip(self), fields(to_move = %self.to_move, status = ?self.status))]
    pub fn place(&mut self, pos: Position) -> Placement {
        if self.status.is_terminal() {
            debug!("Round already over, ignoring placement");
            return Placement::Ignored;
        }
        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Square occupied, ignoring placement");
            return Placement::Ignored;
        }

        let mover = self.to_move;
        self.board.set(pos, Square::Occupied(mover));
        self.history.push(pos);
        self.to_move = mover.opponent();

        if has_win(&self.board) {
            info!(winner = %mover, moves = self.history.len(), "Round won");
            self.status = RoundStatus::Won(mover);
            return Placement::Finished(Outcome::Winner(mover));
        }

        if is_draw(&self.board) {
            info!("Round drawn");
            self.status = RoundStatus::Draw;
            return Placement::Finished(Outcome::Draw);
        }

        self.status = RoundStatus::InProgress;
        Placement::Continue { next: self.to_move }
    }

    /// Clears the board and hands the first move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting round");
        *self = Self::new();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Symbol that places next.
    pub fn to_move(&self) -> Symbol {
        self.to_move
    }

    /// Current phase.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Positions accepted so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// True once the round is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Outcome of a finished round.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            RoundStatus::Won(symbol) => Some(Outcome::Winner(symbol)),
            RoundStatus::Draw => Some(Outcome::Draw),
            RoundStatus::Empty | RoundStatus::InProgress => None,
        }
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
