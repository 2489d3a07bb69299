//! Game state machine: board, turn order, phase and scores.
//!
//! Every mutation goes through one of the transitions below. Illegal moves
//! are ignored rather than reported, since stale or repeated input from the
//! front end is expected.

use super::invariants::{GameInvariants, InvariantSet};
use super::phases::{Outcome, Phase};
use super::rules::evaluate;
use super::starter::{RandomStarter, StarterSource};
use super::types::{Board, BoardError, Mark, Square, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Win/loss/tie counters that outlive individual games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    human_wins: u32,
    ai_wins: u32,
    ties: u32,
}

impl Scoreboard {
    /// Games won by the human.
    pub fn human_wins(&self) -> u32 {
        self.human_wins
    }

    /// Games won by the AI.
    pub fn ai_wins(&self) -> u32 {
        self.ai_wins
    }

    /// Games ending in a tie.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Total finished games.
    pub fn total(&self) -> u32 {
        self.human_wins + self.ai_wins + self.ties
    }

    /// Bumps the counter matching a final outcome.
    fn record(&mut self, outcome: Outcome, human_marker: Mark) {
        match outcome {
            Outcome::Winner(mark) if mark == human_marker => self.human_wins += 1,
            Outcome::Winner(_) => self.ai_wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Undecided => {}
        }
    }
}

/// Validates a board size against the offered range.
pub fn check_board_size(size: usize) -> Result<(), BoardError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(BoardError::SizeOutOfRange {
            size,
            min: MIN_BOARD_SIZE,
            max: MAX_BOARD_SIZE,
        })
    }
}

/// One player session: the board in play plus bookkeeping across games.
#[derive(Debug)]
pub struct GameState {
    board: Board,
    current_player: Mark,
    human_marker: Mark,
    phase: Phase,
    scores: Scoreboard,
    game_count: u32,
    starter: Box<dyn StarterSource>,
}

impl GameState {
    /// Creates a session whose opener is picked by a fair coin flip.
    #[instrument]
    pub fn new(size: usize, human_marker: Mark) -> Result<Self, BoardError> {
        Self::with_starter(size, human_marker, Box::new(RandomStarter::new()))
    }

    /// Creates a session with an explicit opener source.
    #[instrument(skip(starter))]
    pub fn with_starter(
        size: usize,
        human_marker: Mark,
        mut starter: Box<dyn StarterSource>,
    ) -> Result<Self, BoardError> {
        check_board_size(size)?;
        let current_player = starter.pick();
        info!(size, %human_marker, %current_player, "Starting game session");
        Ok(Self {
            board: Board::new(size)?,
            current_player,
            human_marker,
            phase: Phase::InProgress,
            scores: Scoreboard::default(),
            game_count: 1,
            starter,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marker whose turn it is (or who moved last, once the game is over).
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// The human's marker.
    pub fn human_marker(&self) -> Mark {
        self.human_marker
    }

    /// The AI's marker, always the opposite of the human's.
    pub fn ai_marker(&self) -> Mark {
        self.human_marker.opponent()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Final outcome of the current game, `None` while in progress.
    pub fn winner(&self) -> Option<Outcome> {
        self.phase.outcome()
    }

    /// Returns true while moves are accepted.
    pub fn is_in_progress(&self) -> bool {
        self.phase.is_in_progress()
    }

    /// Score counters.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Number of games started since the last score reset.
    pub fn game_count(&self) -> u32 {
        self.game_count
    }

    /// Places the current player's marker at `index`.
    ///
    /// Ignored (returns `None`) when the game is over, the index is off the
    /// board, or the cell is occupied. Otherwise returns the evaluation of
    /// the new position.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) -> Option<Outcome> {
        if !self.phase.is_in_progress() {
            debug!(phase = ?self.phase, "Ignoring move: game is over");
            return None;
        }
        if !self.board.is_empty(index) {
            debug!(max_index = self.board.max_index(), "Ignoring move: cell unavailable");
            return None;
        }

        let player = self.current_player;
        if let Err(e) = self.board.set(index, Square::Occupied(player)) {
            warn!(error = %e, "Board rejected a move to an empty cell");
            return None;
        }

        let outcome = evaluate(&self.board);
        if outcome.is_final() {
            self.phase = Phase::after(outcome);
            self.scores.record(outcome, self.human_marker);
            info!(%outcome, game = self.game_count, "Game finished");
        } else {
            self.current_player = player.opponent();
        }

        self.check_invariants();
        Some(outcome)
    }

    /// Starts a new game on an empty board of the current size.
    ///
    /// Scores are kept; the opener is drawn again.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = self.starter.pick();
        self.phase = Phase::InProgress;
        self.game_count += 1;
        info!(game = self.game_count, opener = %self.current_player, "Game reset");
        self.check_invariants();
    }

    /// Zeroes every score counter and restarts game numbering at 1.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores = Scoreboard::default();
        self.game_count = 1;
        info!("Scores reset");
    }

    /// Resizes the board, keeping the top-left overlap of the position.
    ///
    /// Phase, scores and turn are untouched, so shrinking can leave an
    /// unscored three-in-a-row or drop marks entirely.
    #[instrument(skip(self), fields(old_size = self.board.size()))]
    pub fn set_board_size(&mut self, size: usize) -> Result<(), BoardError> {
        check_board_size(size)?;
        self.board = self.board.resize(size)?;
        self.check_invariants();
        Ok(())
    }

    /// Assigns the human's marker; the AI takes the other one.
    #[instrument(skip(self))]
    pub fn set_human_marker(&mut self, marker: Mark) {
        self.human_marker = marker;
        debug!(ai_marker = %self.ai_marker(), "Markers assigned");
    }

    fn check_invariants(&self) {
        debug_assert_eq!(GameInvariants::check_all(self), Ok(()));
    }
}
