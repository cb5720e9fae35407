//! Win detection logic for tic-tac-toe.

use tracing::instrument;

use crate::{Board, Position, Square, Symbol};

/// The eight winning lines: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns true iff some line holds three identical symbols.
#[instrument(skip(board))]
pub fn has_win(board: &Board) -> bool {
    winning_line(board).is_some()
}

/// Returns the symbol that completed a line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Symbol> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).symbol())
}

/// Returns the first completed line in [`LINES`] order.
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &str) -> Board {
        cells.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_win(&board));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board("XXX ... ...");
        assert!(has_win(&board));
        assert_eq!(winner(&board), Some(Symbol::X));
        assert_eq!(
            winning_line(&board),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_winner_column() {
        let board = board(".O. XO. XO.");
        assert_eq!(winner(&board), Some(Symbol::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board("..O .O. OXX");
        assert_eq!(
            winning_line(&board),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board("XXO ... ...");
        assert!(!has_win(&board));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board("XX. ... ...");
        assert!(!has_win(&board));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Square::Occupied(Symbol::O));
            }
            assert!(has_win(&board), "line {line:?} not detected");
            assert_eq!(winning_line(&board), Some(line));
        }
    }
}
