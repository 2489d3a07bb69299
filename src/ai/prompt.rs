//! Prompt construction for AI moves.

use super::parser::{REASONING_CLOSE, REASONING_OPEN};
use crate::games::tictactoe::{Board, Mark, WIN_LENGTH};
use std::fmt::Write;
use tracing::instrument;

/// Instruction pair sent to the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// System (rules and style) instruction.
    pub system: String,
    /// User message describing the position.
    pub user: String,
}

/// Renders the board and rules into a prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    /// Builds the prompt for the AI playing `ai_marker`.
    #[instrument(skip(self, board), fields(size = board.size()))]
    pub fn build(&self, board: &Board, ai_marker: Mark, human_marker: Mark) -> Prompt {
        Prompt {
            system: self.system_instruction(board),
            user: self.user_prompt(board, ai_marker, human_marker),
        }
    }

    fn system_instruction(&self, board: &Board) -> String {
        let size = board.size();
        let max_index = board.max_index();
        format!(
            "You are playing tic-tac-toe against a human player.\n\
             \n\
             Remember which marker is yours: every one of your markers on the board is yours, \
             every one of the other marker belongs to the human. You can only win with \
             {WIN_LENGTH} of YOUR OWN markers in a row; the human's markers never count for you.\n\
             \n\
             Rules:\n\
             1. The board is a {size}x{size} grid with cells numbered 0-{max_index}.\n\
             2. Players take turns placing their marker on an empty cell.\n\
             3. The first player with {WIN_LENGTH} of their own markers in a row \
             (horizontal, vertical or diagonal) wins, whatever the board size.\n\
             4. If every cell is filled and nobody has {WIN_LENGTH} in a row, the game is a tie.\n\
             \n\
             Before answering, check every row, column and diagonal for your own winning \
             move and for the human's threats.\n\
             \n\
             Respond with a short explanation followed by a single number 0-{max_index}."
        )
    }

    fn user_prompt(&self, board: &Board, ai_marker: Mark, human_marker: Mark) -> String {
        let size = board.size();
        let max_index = board.max_index();
        format!(
            "We're playing tic-tac-toe on a {size}x{size} board. You are '{ai_marker}' and \
             I am '{human_marker}'.\n\
             \n\
             - All '{ai_marker}' marks are YOURS; all '{human_marker}' marks are MINE.\n\
             - A win takes {WIN_LENGTH} marks in a row, not {size}.\n\
             \n\
             Current board:\n\
             \n\
             {board}\n\
             Cell numbers:\n\
             \n\
             {positions}\n\
             Choose an empty cell (0-{max_index}). Explain your choice in one or two \
             sentences, then give the number, like this:\n\
             \n\
             {REASONING_OPEN} I am choosing cell N because ... {REASONING_CLOSE}\n\
             \n\
             N",
            board = render_board(board),
            positions = render_positions(board),
        )
    }
}

/// Draws the board with `|` between cells and a ruled line between rows.
pub fn render_board(board: &Board) -> String {
    render_grid(board.size(), 1, |index| {
        board
            .get(index)
            .map(|square| square.symbol().to_string())
            .unwrap_or_default()
    })
}

/// Draws the cell numbering in the same layout as [`render_board`].
pub fn render_positions(board: &Board) -> String {
    let width = board.max_index().to_string().len();
    render_grid(board.size(), width, |index| index.to_string())
}

fn render_grid(size: usize, width: usize, cell: impl Fn(usize) -> String) -> String {
    let separator = vec!["-".repeat(width + 2); size].join("+");
    let mut out = String::new();
    for row in 0..size {
        let line: Vec<String> = (0..size)
            .map(|col| format!(" {:>width$} ", cell(row * size + col)))
            .collect();
        let _ = writeln!(out, "    {}", line.join("|"));
        if row + 1 < size {
            let _ = writeln!(out, "    {}", separator);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_board() {
        let board: Board = "XO_ _X_ __O".parse().unwrap();
        assert_eq!(
            render_board(&board),
            "     X | O |   \n    ---+---+---\n       | X |   \n    ---+---+---\n       |   | O \n"
        );
    }

    #[test]
    fn test_render_positions_pads_two_digit_indices() {
        let board = Board::new(4).unwrap();
        let rendered = render_positions(&board);
        assert!(rendered.starts_with("      0 |  1 |  2 |  3 \n"));
        assert!(rendered.ends_with("     12 | 13 | 14 | 15 \n"));
    }

    #[test]
    fn test_prompt_states_markers_and_format() {
        let board = Board::new(5).unwrap();
        let prompt = PromptBuilder.build(&board, Mark::O, Mark::X);
        assert!(prompt.user.contains("You are 'O' and I am 'X'"));
        assert!(prompt.user.contains("0-24"));
        assert!(prompt.user.contains(REASONING_OPEN));
        assert!(prompt.system.contains("5x5 grid"));
        assert!(prompt.system.contains("3 of YOUR OWN markers"));
    }
}
