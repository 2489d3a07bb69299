//! Application state and key handling.

use crossterm::event::KeyCode;
use strictly_grid::MatchSession;
use tracing::{debug, info, instrument};

use super::input::{clamp_cursor, move_cursor};

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: MatchSession,
    cursor: usize,
    thinking: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a session.
    pub fn new(session: MatchSession) -> Self {
        Self {
            session,
            cursor: 0,
            thinking: false,
            should_quit: false,
        }
    }

    /// Gets the match session.
    pub fn session(&self) -> &MatchSession {
        &self.session
    }

    /// Gets the cursor cell index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True while the AI is choosing a move.
    pub fn thinking(&self) -> bool {
        self.thinking
    }

    /// True once the player asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Marks the AI as thinking so the next frame shows it.
    pub fn begin_ai_turn(&mut self) {
        self.thinking = true;
    }

    /// Plays the AI's move.
    pub async fn run_ai_turn(&mut self) {
        self.session.ai_turn().await;
        self.thinking = false;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let size = self.session.game().board().size();
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, size, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(outcome) = self.session.human_move(self.cursor) {
                    debug!(%outcome, "Human move applied");
                }
            }
            KeyCode::Char('n') => self.session.play_again(),
            KeyCode::Char('r') => self.session.reset_scores(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.resize(size + 1),
            KeyCode::Char('-') => self.resize(size.saturating_sub(1)),
            KeyCode::Char('m') => {
                let current = self
                    .session
                    .pending_marker()
                    .unwrap_or(self.session.game().human_marker());
                self.session.set_human_marker(current.opponent());
            }
            _ => {}
        }
    }

    fn resize(&mut self, new_size: usize) {
        let old_size = self.session.game().board().size();
        match self.session.set_board_size(new_size) {
            Ok(()) => self.cursor = clamp_cursor(self.cursor, old_size, new_size),
            Err(e) => debug!(error = %e, "Resize refused"),
        }
    }
}
