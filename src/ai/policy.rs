//! AI move selection: prompt, one model call, validated move.

use super::parser::{MoveStrategy, parse_move};
use super::prompt::PromptBuilder;
use crate::config::GameConfig;
use crate::games::tictactoe::{Board, Mark};
use crate::llm_client::{CompletionRequest, TextCompletion};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// How the AI's move was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionSource {
    /// Read from the model's response by the given strategy.
    Parsed(MoveStrategy),
    /// Model call failed; the first empty cell was taken.
    Fallback {
        /// Description of the failure, for display.
        error: String,
    },
}

/// A move chosen for the AI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiDecision {
    /// Index of an empty cell.
    pub index: usize,
    /// Explanation from the model, possibly empty.
    pub rationale: String,
    /// How the index was obtained.
    pub source: DecisionSource,
}

impl AiDecision {
    /// Non-fatal message for the player when the model could not be used.
    pub fn notice(&self) -> Option<String> {
        match &self.source {
            DecisionSource::Parsed(_) => None,
            DecisionSource::Fallback { error } => Some(format!("Error getting AI move: {}", error)),
        }
    }
}

/// Chooses AI moves through a text-completion service.
///
/// The returned index always names an empty cell of the board passed in,
/// whatever the model says or whether it answers at all.
pub struct AiMovePolicy {
    completion: Box<dyn TextCompletion>,
    prompts: PromptBuilder,
    temperature: f32,
    max_tokens: u32,
    timeout: Duration,
}

impl std::fmt::Debug for AiMovePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiMovePolicy")
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl AiMovePolicy {
    /// Creates a policy with sampling limits taken from `config`.
    #[instrument(skip(completion, config))]
    pub fn new(completion: Box<dyn TextCompletion>, config: &GameConfig) -> Self {
        Self {
            completion,
            prompts: PromptBuilder,
            temperature: config.llm_temperature(),
            max_tokens: config.llm_max_tokens(),
            timeout: config.request_timeout(),
        }
    }

    /// Overrides how long to wait for the model.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Picks a move for `ai_marker`.
    ///
    /// Makes exactly one completion call. A failed or timed-out call falls
    /// back to the first empty cell and is reported through
    /// [`AiDecision::notice`]. Returns `None` only for a full board.
    #[instrument(skip(self, board), fields(size = board.size()))]
    pub async fn decide(
        &self,
        board: &Board,
        ai_marker: Mark,
        human_marker: Mark,
    ) -> Option<AiDecision> {
        if board.first_empty().is_none() {
            warn!("No empty cell for the AI to play");
            return None;
        }

        let prompt = self.prompts.build(board, ai_marker, human_marker);
        let request = CompletionRequest {
            system: prompt.system,
            prompt: prompt.user,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        debug!("Requesting AI move");
        let response = match tokio::time::timeout(self.timeout, self.completion.complete(&request))
            .await
        {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => return Self::fallback(board, e.message),
            Err(_) => {
                return Self::fallback(
                    board,
                    format!("model did not respond within {}s", self.timeout.as_secs()),
                );
            }
        };

        debug!(response = %response, "Model responded");
        let parsed = parse_move(&response, board)?;
        info!(index = parsed.index, strategy = %parsed.strategy, "AI move chosen");
        Some(AiDecision {
            index: parsed.index,
            rationale: parsed.rationale,
            source: DecisionSource::Parsed(parsed.strategy),
        })
    }

    fn fallback(board: &Board, error: String) -> Option<AiDecision> {
        warn!(error = %error, "Model call failed, taking first empty cell");
        let index = board.first_empty()?;
        Some(AiDecision {
            index,
            rationale: String::new(),
            source: DecisionSource::Fallback { error },
        })
    }
}
