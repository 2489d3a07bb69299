//! Sources for choosing which marker opens a game.

use super::Mark;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use tracing::instrument;

/// Picks the marker that moves first in a new game.
pub trait StarterSource: std::fmt::Debug + Send {
    /// Returns the opening marker.
    fn pick(&mut self) -> Mark;
}

/// Uniform coin flip between X and O.
#[derive(Debug)]
pub struct RandomStarter {
    rng: StdRng,
}

impl RandomStarter {
    /// Seeds from operating-system entropy.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    #[instrument]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStarter {
    fn default() -> Self {
        Self::new()
    }
}

impl StarterSource for RandomStarter {
    fn pick(&mut self) -> Mark {
        if self.rng.gen_bool(0.5) {
            Mark::X
        } else {
            Mark::O
        }
    }
}

/// Replays a fixed script of openers, repeating the last one when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedStarter {
    script: VecDeque<Mark>,
    last: Mark,
}

impl ScriptedStarter {
    /// Always opens with `mark`.
    pub fn always(mark: Mark) -> Self {
        Self::new([mark])
    }

    /// Opens with each mark of `script` in turn.
    pub fn new(script: impl IntoIterator<Item = Mark>) -> Self {
        let script: VecDeque<Mark> = script.into_iter().collect();
        let last = script.front().copied().unwrap_or(Mark::X);
        Self { script, last }
    }
}

impl StarterSource for ScriptedStarter {
    fn pick(&mut self) -> Mark {
        if let Some(mark) = self.script.pop_front() {
            self.last = mark;
        }
        self.last
    }
}
