//! Move records kept for the AI rationale log.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// Rationale shown when the model gave no explanation.
pub const NO_EXPLANATION: &str = "No explanation provided";

/// One AI move and the explanation that came with it.
///
/// Records are appended in play order and survive `GameState::reset`; they
/// are cleared only when the player explicitly starts over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct MoveRecord {
    /// Cell index the AI played.
    pub position: usize,
    /// Explanation given by the model.
    pub rationale: String,
}

impl MoveRecord {
    /// Creates a record, substituting [`NO_EXPLANATION`] for a blank rationale.
    pub fn with_default_rationale(position: usize, rationale: &str) -> Self {
        let rationale = rationale.trim();
        if rationale.is_empty() {
            Self::new(position, NO_EXPLANATION.to_string())
        } else {
            Self::new(position, rationale.to_string())
        }
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move {}: {}", self.position, self.rationale)
    }
}
