//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so they can be reused by the state machine and by tests.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Direction, WIN_LENGTH, WinningLine, check_winner, winning_line};

use super::phases::Outcome;
use super::Board;
use tracing::instrument;

/// Evaluates a board: a winner, a tie, or still open.
///
/// A tie requires a full board with no three-in-a-row anywhere.
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Winner(mark)
    } else if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::Undecided
    }
}
