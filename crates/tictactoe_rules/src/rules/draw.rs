//! Draw detection logic for tic-tac-toe.

use tracing::instrument;

use crate::Board;

/// Returns true iff all nine squares are occupied.
///
/// Does not look for a winning line. A full board that also completes a line
/// is still a draw by this function alone, so check [`has_win`](super::has_win)
/// first.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.squares().iter().all(|s| !s.is_empty())
}
