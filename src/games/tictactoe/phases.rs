//! Game phases and board outcomes.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A marker has three in a row.
    Winner(Mark),
    /// Board is full with no three-in-a-row.
    Tie,
    /// Play continues.
    Undecided,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Tie | Outcome::Undecided => None,
        }
    }

    /// Returns true if the game is over.
    pub fn is_final(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "{} wins", mark),
            Outcome::Tie => write!(f, "Tie"),
            Outcome::Undecided => write!(f, "In progress"),
        }
    }
}

/// Coarse status of the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    #[default]
    InProgress,
    /// A marker completed three in a row.
    Won(Mark),
    /// The board filled up with no winner.
    Tied,
}

impl Phase {
    /// Phase a game enters after a move evaluated to `outcome`.
    pub fn after(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Winner(mark) => Phase::Won(mark),
            Outcome::Tie => Phase::Tied,
            Outcome::Undecided => Phase::InProgress,
        }
    }

    /// Returns true while moves are accepted.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Phase::InProgress)
    }

    /// Final outcome, or `None` while in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Phase::InProgress => None,
            Phase::Won(mark) => Some(Outcome::Winner(*mark)),
            Phase::Tied => Some(Outcome::Tie),
        }
    }
}
