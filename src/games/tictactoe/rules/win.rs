//! Win detection for boards of any size with a fixed win length.

use super::super::{Board, Mark, Square};
use tracing::instrument;

/// Number of identical consecutive markers needed to win, on every board size.
pub const WIN_LENGTH: usize = 3;

/// Orientation of a line of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Direction {
    /// Row and column step between neighbouring cells.
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }

    /// Every run of [`WIN_LENGTH`] cells in this direction that fits on a
    /// `size × size` board, as row-major indices.
    pub fn windows(self, size: usize) -> impl Iterator<Item = [usize; WIN_LENGTH]> {
        let (dr, dc) = self.delta();
        let n = size as isize;
        let span = WIN_LENGTH as isize - 1;
        (0..n)
            .flat_map(move |row| (0..n).map(move |col| (row, col)))
            .filter(move |&(row, col)| {
                let end_row = row + dr * span;
                let end_col = col + dc * span;
                end_row < n && (0..n).contains(&end_col)
            })
            .map(move |(row, col)| {
                std::array::from_fn(|k| {
                    let k = k as isize;
                    ((row + dr * k) * n + col + dc * k) as usize
                })
            })
    }
}

/// A completed run of [`WIN_LENGTH`] identical markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    /// Owner of the run.
    pub mark: Mark,
    /// Orientation of the run.
    pub direction: Direction,
    /// Cells making up the run.
    pub cells: [usize; WIN_LENGTH],
}

/// Finds the first completed line, scanning rows, then columns, then both
/// diagonal families.
#[instrument(skip(board), fields(size = board.size()))]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    <Direction as strum::IntoEnumIterator>::iter().find_map(|direction| {
        direction.windows(board.size()).find_map(|cells| {
            let [first, rest @ ..] = cells.map(|i| board.get(i));
            match first {
                Some(Square::Occupied(mark)) if rest.iter().all(|s| *s == first) => {
                    Some(WinningLine {
                        mark,
                        direction,
                        cells,
                    })
                }
                _ => None,
            }
        })
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that marker has three in a row anywhere,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|line| line.mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        for size in 3..=8 {
            assert_eq!(check_winner(&Board::new(size).unwrap()), None);
        }
    }

    #[test]
    fn test_window_counts() {
        // (size - 2) windows per line, size lines per straight family,
        // (size - 2)^2 windows per diagonal family.
        for size in 3..=8 {
            let straight = size * (size - 2);
            let diagonal = (size - 2) * (size - 2);
            assert_eq!(Direction::Horizontal.windows(size).count(), straight);
            assert_eq!(Direction::Vertical.windows(size).count(), straight);
            assert_eq!(Direction::Diagonal.windows(size).count(), diagonal);
            assert_eq!(Direction::AntiDiagonal.windows(size).count(), diagonal);
        }
    }

    #[test]
    fn test_small_boards_have_no_windows() {
        assert_eq!(Direction::Horizontal.windows(2).count(), 0);
        assert_eq!(check_winner(&board("XX XX")), None);
    }

    #[test]
    fn test_winner_mid_row_on_large_board() {
        let board = board(
            "_____ \
             _OOO_ \
             _____ \
             _____ \
             _____",
        );
        let line = winning_line(&board).unwrap();
        assert_eq!(line.mark, Mark::O);
        assert_eq!(line.direction, Direction::Horizontal);
        assert_eq!(line.cells, [6, 7, 8]);
    }

    #[test]
    fn test_winner_anti_diagonal_off_center() {
        let board = board(
            "______ \
             ______ \
             _____X \
             ____X_ \
             ___X__ \
             ______",
        );
        let line = winning_line(&board).unwrap();
        assert_eq!(line.direction, Direction::AntiDiagonal);
        assert_eq!(line.cells, [17, 22, 27]);
    }

    #[test]
    fn test_split_run_is_not_a_win() {
        assert_eq!(check_winner(&board("XX_X ____ ____ ____")), None);
    }

    #[test]
    fn test_run_does_not_wrap_rows() {
        // Indices 2, 3, 4 are consecutive but span two rows.
        assert_eq!(check_winner(&board("__XX X___ ____ ____")), None);
    }
}
