//! Match session: the game state, AI opponent and move history behind one
//! front end.

use crate::ai::{AiDecision, AiMovePolicy};
use crate::games::tictactoe::{BoardError, GameState, Mark, MoveRecord, Outcome};
use tracing::{debug, info, instrument};

/// Everything a front end needs to run human-versus-AI games.
///
/// Human moves are only accepted on the human's turn, and an AI turn holds
/// the session mutably until the model answers, so at most one input is ever
/// pending.
#[derive(Debug)]
pub struct MatchSession {
    game: GameState,
    policy: AiMovePolicy,
    history: Vec<MoveRecord>,
    notice: Option<String>,
    pending_marker: Option<Mark>,
}

impl MatchSession {
    /// Creates a session around an existing game and policy.
    #[instrument(skip_all)]
    pub fn new(game: GameState, policy: AiMovePolicy) -> Self {
        Self {
            game,
            policy,
            history: Vec::new(),
            notice: None,
            pending_marker: None,
        }
    }

    /// The game state.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// AI moves with their explanations, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Last non-fatal problem to show the player.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Marker chosen for the next game, if not yet applied.
    pub fn pending_marker(&self) -> Option<Mark> {
        self.pending_marker
    }

    /// True when the game waits for the human.
    pub fn is_human_turn(&self) -> bool {
        self.game.is_in_progress() && self.game.current_player() == self.game.human_marker()
    }

    /// True when the game waits for the AI.
    pub fn is_ai_turn(&self) -> bool {
        self.game.is_in_progress() && self.game.current_player() == self.game.ai_marker()
    }

    /// Plays the human's move. Ignored unless it is the human's turn.
    #[instrument(skip(self))]
    pub fn human_move(&mut self, index: usize) -> Option<Outcome> {
        if !self.is_human_turn() {
            debug!("Ignoring human move: not the human's turn");
            return None;
        }
        self.game.apply_move(index)
    }

    /// Asks the AI for a move, records it, and plays it.
    ///
    /// Ignored unless it is the AI's turn. A failed model call still yields
    /// a move; its error is kept as the session notice.
    #[instrument(skip(self), fields(game = self.game.game_count()))]
    pub async fn ai_turn(&mut self) -> Option<AiDecision> {
        if !self.is_ai_turn() {
            debug!("Ignoring AI turn: not the AI's turn");
            return None;
        }
        let decision = self
            .policy
            .decide(self.game.board(), self.game.ai_marker(), self.game.human_marker())
            .await?;

        self.notice = decision.notice();
        self.history.push(MoveRecord::with_default_rationale(
            decision.index,
            &decision.rationale,
        ));
        self.game.apply_move(decision.index);
        info!(index = decision.index, "AI played");
        Some(decision)
    }

    /// Starts a new game and discards the move history and notice.
    #[instrument(skip(self))]
    pub fn play_again(&mut self) {
        self.history.clear();
        self.notice = None;
        self.reset();
    }

    /// Starts a new game, applying any pending marker choice.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        if let Some(marker) = self.pending_marker.take() {
            self.game.set_human_marker(marker);
        }
        self.game.reset();
    }

    /// Zeroes the scoreboard.
    pub fn reset_scores(&mut self) {
        self.game.reset_scores();
    }

    /// Resizes the board in place.
    pub fn set_board_size(&mut self, size: usize) -> Result<(), BoardError> {
        self.game.set_board_size(size)
    }

    /// Chooses the human's marker.
    ///
    /// Takes effect at once on an untouched board, otherwise from the next
    /// game, so the result of the game in front of the player never changes
    /// hands.
    #[instrument(skip(self))]
    pub fn set_human_marker(&mut self, marker: Mark) {
        if self.game.is_in_progress() && self.game.board().is_blank() {
            self.game.set_human_marker(marker);
            self.pending_marker = None;
        } else if marker == self.game.human_marker() {
            self.pending_marker = None;
        } else {
            debug!("Marker change deferred to next game");
            self.pending_marker = Some(marker);
        }
    }

    /// One-line description of whose turn it is or how the game ended.
    pub fn status_line(&self) -> String {
        let human = self.game.human_marker();
        let ai = self.game.ai_marker();
        match self.game.winner() {
            Some(Outcome::Winner(mark)) if mark == human => "You win!".to_string(),
            Some(Outcome::Winner(_)) => "AI wins!".to_string(),
            Some(Outcome::Tie) => "It's a tie!".to_string(),
            Some(Outcome::Undecided) | None if self.is_human_turn() => {
                format!("Your turn ({})", human)
            }
            Some(Outcome::Undecided) | None => format!("AI's turn ({})", ai),
        }
    }
}
