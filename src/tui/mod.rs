//! Terminal UI for Strictly Grid

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use strictly_grid::MatchSession;
use tracing::{error, info, instrument};

use app::App;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run a match in the terminal until the player quits
pub async fn run_tui(session: MatchSession) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = run_game(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draws, lets the AI move on its turn, and otherwise waits for keys.
#[instrument(skip_all)]
async fn run_game<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    info!("Starting game loop");

    while !app.should_quit() {
        if app.session().is_ai_turn() {
            app.begin_ai_turn();
            terminal.draw(|f| ui::draw(f, app))?;
            app.run_ai_turn().await;
            continue;
        }

        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }
    }

    info!("Game loop finished");
    Ok(())
}
