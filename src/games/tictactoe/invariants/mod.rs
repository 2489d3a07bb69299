//! First-class invariants for the game state machine.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are checked in debug builds and can be tested independently.

mod board_shape;
mod score_tally;

pub use board_shape::{BoardShapeInvariant, BoardSizeInvariant};
pub use score_tally::ScoreTallyInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every invariant of [`GameState`](super::GameState).
pub type GameInvariants = (BoardShapeInvariant, BoardSizeInvariant, ScoreTallyInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameState, Mark, ScriptedStarter};

    fn game() -> GameState {
        GameState::with_starter(3, Mark::X, Box::new(ScriptedStarter::always(Mark::X))).unwrap()
    }

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&game()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_play_and_resize() {
        let mut game = game();
        for pos in [0, 3, 1, 4, 2] {
            game.apply_move(pos);
        }
        assert!(GameInvariants::check_all(&game).is_ok());
        game.set_board_size(8).unwrap();
        game.reset();
        game.set_board_size(3).unwrap();
        assert!(GameInvariants::check_all(&game).is_ok());
    }
}
