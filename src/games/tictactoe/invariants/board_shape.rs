//! Board shape invariants.

use super::super::{GameState, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use super::Invariant;

/// Invariant: the board holds exactly `size * size` cells.
pub struct BoardShapeInvariant;

impl Invariant<GameState> for BoardShapeInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        board.len() == board.size() * board.size()
    }

    fn description() -> &'static str {
        "Board holds exactly size * size cells"
    }
}

/// Invariant: the board size stays within the offered range.
pub struct BoardSizeInvariant;

impl Invariant<GameState> for BoardSizeInvariant {
    fn holds(game: &GameState) -> bool {
        (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&game.board().size())
    }

    fn description() -> &'static str {
        "Board size stays within the offered range"
    }
}
