//! Core domain types for tic-tac-toe on a square board of any size.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Smallest board size offered to players.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest board size offered to players.
pub const MAX_BOARD_SIZE: usize = 8;

/// Marker a player places on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Mark {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Mark {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl FromStr for Mark {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            other => Err(BoardError::InvalidMark(other.to_string())),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's marker.
    Occupied(Mark),
}

impl Square {
    /// Returns the marker in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    /// Single-character rendering: `X`, `O`, or a space for empty.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Mark::X) => 'X',
            Square::Occupied(Mark::O) => 'O',
        }
    }
}

/// Errors raised by board construction and access.
#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error)]
pub enum BoardError {
    /// Board size must be at least one.
    #[display("Board size must be at least 1")]
    ZeroSize,

    /// Board size outside the range offered to players.
    #[display("Board size {size} is outside {min}..={max}")]
    SizeOutOfRange {
        /// Requested size.
        size: usize,
        /// Smallest allowed size.
        min: usize,
        /// Largest allowed size.
        max: usize,
    },

    /// Index past the last cell.
    #[display("Position {index} is out of bounds (max {max_index})")]
    OutOfBounds {
        /// Requested index.
        index: usize,
        /// Highest valid index.
        max_index: usize,
    },

    /// Text that is not a marker.
    #[display("Invalid marker: {_0:?}")]
    InvalidMark(#[error(not(source))] String),

    /// Character that is not a cell symbol in a board literal.
    #[display("Invalid cell symbol: {_0:?}")]
    InvalidCell(#[error(not(source))] char),

    /// Board literal whose cell count is not a perfect square.
    #[display("{_0} cells do not form a square board")]
    NotSquare(#[error(not(source))] usize),
}

/// Square `size × size` board stored in row-major order.
///
/// Index `i` is row `i / size`, column `i % size`. The cell vector always
/// holds exactly `size * size` squares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board of `size × size` cells.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < 1 {
            return Err(BoardError::ZeroSize);
        }
        Ok(Self {
            size,
            squares: vec![Square::Empty; size * size],
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// True when no cell is occupied.
    pub fn is_blank(&self) -> bool {
        self.squares.iter().all(|s| *s == Square::Empty)
    }

    /// Highest valid cell index.
    pub fn max_index(&self) -> usize {
        self.squares.len() - 1
    }

    /// Row-major index of `(row, col)`, if it lies on the board.
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Gets the square at `pos`.
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Overwrites the square at `pos`.
    ///
    /// Occupancy is not checked here; `GameState::apply_move` only calls this
    /// for empty cells.
    pub fn set(&mut self, pos: usize, square: Square) -> Result<(), BoardError> {
        let max_index = self.max_index();
        let cell = self
            .squares
            .get_mut(pos)
            .ok_or(BoardError::OutOfBounds { index: pos, max_index })?;
        *cell = square;
        Ok(())
    }

    /// Empties every cell, keeping the size.
    pub fn clear(&mut self) {
        self.squares.fill(Square::Empty);
    }

    /// Checks whether `pos` is on the board and empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Lowest-index empty cell.
    pub fn first_empty(&self) -> Option<usize> {
        self.squares.iter().position(|s| *s == Square::Empty)
    }

    /// Indices of every empty cell, ascending.
    pub fn empty_positions(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Builds a board of `new_size` that keeps the top-left overlap.
    ///
    /// Cell `(r, c)` is copied for every `r, c < min(old, new)`. Everything
    /// else is empty, so shrinking drops marks past the new edge.
    #[instrument(skip(self), fields(old_size = self.size))]
    pub fn resize(&self, new_size: usize) -> Result<Board, BoardError> {
        let mut resized = Board::new(new_size)?;
        let overlap = self.size.min(new_size);
        for row in 0..overlap {
            for col in 0..overlap {
                resized.squares[row * new_size + col] = self.squares[row * self.size + col];
            }
        }
        debug!(new_size, overlap, "Board resized");
        Ok(resized)
    }
}

/// Parses a board literal such as `"XO_ _X_ O__"`.
///
/// `X`/`O` (any case) are markers; `_`, `.` and `-` are empty cells;
/// whitespace, `|` and `,` are ignored. The cell count must be a perfect
/// square.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != ',')
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Mark::X)),
                'O' | 'o' => Ok(Square::Occupied(Mark::O)),
                '_' | '.' | '-' => Ok(Square::Empty),
                other => Err(BoardError::InvalidCell(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let size = (1..=squares.len())
            .find(|n| n * n >= squares.len())
            .ok_or(BoardError::ZeroSize)?;
        if size * size != squares.len() {
            return Err(BoardError::NotSquare(squares.len()));
        }
        Ok(Self { size, squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().expect("valid board literal")
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.len(), 16);
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Board::new(0), Err(BoardError::ZeroSize));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::new(3).unwrap();
        assert_eq!(
            board.set(9, Square::Occupied(Mark::X)),
            Err(BoardError::OutOfBounds {
                index: 9,
                max_index: 8
            })
        );
    }

    #[test]
    fn test_grow_keeps_every_mark() {
        let small = board("XO_ _X_ O_X");
        let big = small.resize(5).unwrap();
        assert_eq!(big.size(), 5);
        assert_eq!(big.len(), 25);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(
                    big.get(big.index_of(row, col).unwrap()),
                    small.get(small.index_of(row, col).unwrap())
                );
            }
        }
        assert_eq!(big.squares().iter().filter(|s| **s != Square::Empty).count(), 5);
    }

    #[test]
    fn test_shrink_drops_marks_past_edge() {
        let big = board("X__O ____ ____ O__X");
        let small = big.resize(3).unwrap();
        assert_eq!(small, board("X__ ___ ___"));
    }

    #[test]
    fn test_parse_rejects_non_square() {
        assert_eq!("XOXO_".parse::<Board>(), Err(BoardError::NotSquare(5)));
        assert_eq!("XO?O".parse::<Board>(), Err(BoardError::InvalidCell('?')));
    }

    #[test]
    fn test_first_empty() {
        assert_eq!(board("XXX O_O ___").first_empty(), Some(4));
        assert_eq!(board("XOX OXO OXO").first_empty(), None);
    }
}
