//! Core domain types for tic-tac-toe.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Symbol placed on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Symbol {
    /// X always opens a round.
    #[display("X")]
    X,
    /// O moves second.
    #[display("O")]
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Holds a symbol.
    Occupied(Symbol),
}

impl Square {
    /// Returns the symbol in this square, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Square::Empty => None,
            Square::Occupied(symbol) => Some(symbol),
        }
    }

    /// True if nothing has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// 3x3 board, squares in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at a position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at a position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if the square at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// Input did not describe exactly nine cells.
    #[display("Expected 9 cells, found {_0}")]
    WrongLength(usize),
    /// A cell was not `X`, `O`, or an empty marker.
    #[display("Unexpected cell character '{_0}'")]
    BadCell(char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order: `X`, `O`, or one of `.` `-` `_` for empty.
    /// Whitespace and `|` separators are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if cells.len() != 9 {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut board = Board::new();
        for (pos, c) in Position::ALL.into_iter().zip(cells) {
            let square = match c {
                'X' | 'x' => Square::Occupied(Symbol::X),
                'O' | 'o' => Square::Occupied(Symbol::O),
                '.' | '-' | '_' => Square::Empty,
                other => return Err(BoardParseError::BadCell(other)),
            };
            board.set(pos, square);
        }
        Ok(board)
    }
}
