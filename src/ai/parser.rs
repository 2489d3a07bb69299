//! Extraction of a legal move from free-form model output.
//!
//! Parsing runs two ordered strategy lists. Rationale strategies try to
//! separate the explanation from the answer; move strategies then look for a
//! cell index, ending with a fallback that always succeeds on a board with an
//! empty cell.

use crate::games::tictactoe::Board;
use regex::Regex;
use std::sync::LazyLock;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Opening marker of an explicit rationale block.
pub const REASONING_OPEN: &str = "[reasoning]";

/// Closing marker of an explicit rationale block.
pub const REASONING_CLOSE: &str = "[/reasoning]";

/// Leading text must be longer than this to count as a rationale.
const MIN_LEADING_RATIONALE: usize = 5;

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("integer pattern is valid"));

static TRAILING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(.*?)([0-9]+)\s*$").expect("trailing pattern is valid"));

/// Rationale text pulled out of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RationaleSplit {
    /// The explanation.
    pub rationale: String,
    /// Text outside the explanation, when the two could be separated.
    pub remainder: Option<String>,
}

/// Ways of finding the explanation in a response, in the order tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, strum::Display)]
pub enum RationaleStrategy {
    /// Text between `[reasoning]` and `[/reasoning]`.
    Tagged,
    /// Everything before a trailing integer.
    LeadingText,
}

impl RationaleStrategy {
    /// Applies this strategy to `text`.
    pub fn extract(self, text: &str) -> Option<RationaleSplit> {
        match self {
            RationaleStrategy::Tagged => {
                let open = text.find(REASONING_OPEN)?;
                let body_start = open + REASONING_OPEN.len();
                let close = body_start + text[body_start..].find(REASONING_CLOSE)?;
                let after = &text[close + REASONING_CLOSE.len()..];
                Some(RationaleSplit {
                    rationale: text[body_start..close].trim().to_string(),
                    remainder: Some(format!("{} {}", &text[..open], after)),
                })
            }
            RationaleStrategy::LeadingText => {
                let captures = TRAILING_INTEGER.captures(text)?;
                let leading = captures.get(1)?.as_str().trim();
                (leading.chars().count() > MIN_LEADING_RATIONALE).then(|| RationaleSplit {
                    rationale: leading.to_string(),
                    remainder: None,
                })
            }
        }
    }
}

/// Ways of finding a cell index, in the order tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, strum::Display)]
pub enum MoveStrategy {
    /// Whole integers, so `12` reads as twelve.
    Integer,
    /// Individual digit characters.
    Digit,
    /// Lowest-index empty cell; ignores the text.
    FirstEmpty,
}

impl MoveStrategy {
    /// Returns the first candidate in `text` that names an empty cell.
    pub fn pick(self, text: &str, board: &Board) -> Option<usize> {
        match self {
            MoveStrategy::Integer => INTEGER
                .find_iter(text)
                .filter_map(|m| m.as_str().parse::<usize>().ok())
                .find(|&index| board.is_empty(index)),
            MoveStrategy::Digit => text
                .chars()
                .filter_map(|c| c.to_digit(10))
                .map(|d| d as usize)
                .find(|&index| board.is_empty(index)),
            MoveStrategy::FirstEmpty => board.first_empty(),
        }
    }

    /// True for strategies that read the response text.
    pub fn reads_text(self) -> bool {
        !matches!(self, MoveStrategy::FirstEmpty)
    }
}

/// A legal move recovered from a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMove {
    /// Index of an empty cell.
    pub index: usize,
    /// Explanation, possibly empty.
    pub rationale: String,
    /// Strategy that produced the index.
    pub strategy: MoveStrategy,
}

/// Extracts a move and rationale from `text`.
///
/// When a rationale block was split off, the text outside it is searched
/// first and the whole response second. Returns `None` only when the board
/// has no empty cell.
#[instrument(skip(text, board), fields(size = board.size(), text_len = text.len()))]
pub fn parse_move(text: &str, board: &Board) -> Option<ParsedMove> {
    let split = RationaleStrategy::iter().find_map(|strategy| {
        let split = strategy.extract(text)?;
        debug!(%strategy, "Rationale extracted");
        Some(split)
    });
    let (rationale, remainder) = match split {
        Some(split) => (split.rationale, split.remainder),
        None => (String::new(), None),
    };

    let candidates: Vec<&str> = remainder.as_deref().into_iter().chain([text]).collect();
    let (strategy, index) = MoveStrategy::iter().find_map(|strategy| {
        let index = if strategy.reads_text() {
            candidates
                .iter()
                .find_map(|candidate| strategy.pick(candidate, board))
        } else {
            strategy.pick(text, board)
        };
        index.map(|index| (strategy, index))
    })?;

    debug!(%strategy, index, "Move extracted");
    Some(ParsedMove {
        index,
        rationale,
        strategy,
    })
}
