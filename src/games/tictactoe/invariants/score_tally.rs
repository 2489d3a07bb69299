//! Score tally invariant.

use super::super::GameState;
use super::Invariant;

/// Invariant: no more games have been scored than started.
///
/// Each game bumps exactly one counter when it ends, and `game_count`
/// counts games started since the last score reset.
pub struct ScoreTallyInvariant;

impl Invariant<GameState> for ScoreTallyInvariant {
    fn holds(game: &GameState) -> bool {
        game.scores().total() <= game.game_count()
    }

    fn description() -> &'static str {
        "Scored games never exceed games started"
    }
}
