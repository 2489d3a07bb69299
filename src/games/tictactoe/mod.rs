//! Tic-tac-toe on square boards of size 3 through 8, win length fixed at 3.

mod action;
mod game;
pub mod invariants;
mod phases;
pub mod rules;
mod starter;
mod types;

pub use action::{MoveRecord, NO_EXPLANATION};
pub use game::{GameState, Scoreboard, check_board_size};
pub use phases::{Outcome, Phase};
pub use rules::{Direction, WIN_LENGTH, WinningLine, evaluate};
pub use starter::{RandomStarter, ScriptedStarter, StarterSource};
pub use types::{Board, BoardError, MAX_BOARD_SIZE, MIN_BOARD_SIZE, Mark, Square};
