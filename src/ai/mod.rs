//! AI opponent: prompt construction, response parsing and move policy.

mod parser;
mod policy;
mod prompt;

pub use parser::{
    MoveStrategy, ParsedMove, REASONING_CLOSE, REASONING_OPEN, RationaleSplit, RationaleStrategy,
    parse_move,
};
pub use policy::{AiDecision, AiMovePolicy, DecisionSource};
pub use prompt::{Prompt, PromptBuilder, render_board, render_positions};
