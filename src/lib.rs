//! Strictly Grid library - tic-tac-toe against an LLM opponent
//!
//! Games are played on a square board of side 3 to 8; three marks in a row
//! win on every size.
//!
//! # Architecture
//!
//! - **Games**: board, win detection and the game state machine
//! - **AI**: prompt building, response parsing and the move policy
//! - **LLM client**: text completion over Anthropic or OpenAI
//! - **Session**: one human-versus-AI match for a front end to drive
//!
//! # Example
//!
//! ```no_run
//! use strictly_grid::{AiMovePolicy, GameConfig, GameState, LlmClient, MatchSession};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let client = LlmClient::new(config.create_llm_config()?);
//! let policy = AiMovePolicy::new(Box::new(client), &config);
//! let game = GameState::new(config.board_size(), config.human_marker())?;
//! let mut session = MatchSession::new(game, policy);
//!
//! if session.is_ai_turn() {
//!     session.ai_turn().await;
//! }
//! session.human_move(4);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod ai;
mod config;
pub mod games;
mod llm_client;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};

// Crate-level exports - LLM client
pub use llm_client::{
    CompletionRequest, LlmClient, LlmConfig, LlmError, LlmProvider, TextCompletion,
};

// Crate-level exports - AI opponent
pub use ai::{AiDecision, AiMovePolicy, DecisionSource, PromptBuilder};

// Crate-level exports - Session
pub use session::MatchSession;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardError, GameState, Mark, MoveRecord, Outcome, Phase, Scoreboard, Square,
};
