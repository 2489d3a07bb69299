//! Stateless UI rendering for the match screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use strictly_grid::games::tictactoe::rules::winning_line;
use strictly_grid::{Board, Mark, MatchSession, Square};

use super::app::App;

const HELP: &str = concat!(
    "←↑↓→ move  Enter/Space place  n new game  ",
    "r reset scores  +/- resize  m swap markers  q quit",
);

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let session = app.session();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Board and side panel
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Grid - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_board(frame, columns[0], session.game().board(), app.cursor());
    draw_side_panel(frame, columns[1], session);

    let status = if app.thinking() {
        "AI is thinking...".to_string()
    } else {
        session.status_line()
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: usize) {
    let size = board.size();
    let highlighted = winning_line(board)
        .map(|line| line.cells.to_vec())
        .unwrap_or_default();

    let separator_style = Style::default().fg(Color::DarkGray);
    let separator = vec!["───"; size].join("┼");

    let mut lines = Vec::with_capacity(size * 2);
    for row in 0..size {
        let mut spans = Vec::with_capacity(size * 2);
        for col in 0..size {
            let index = row * size + col;
            if col > 0 {
                spans.push(Span::styled("│", separator_style));
            }
            spans.push(cell_span(board, index, index == cursor, highlighted.contains(&index)));
        }
        lines.push(Line::from(spans));
        if row + 1 < size {
            lines.push(Line::from(Span::styled(separator.clone(), separator_style)));
        }
    }

    // Cells and separators, plus the border
    let width = (size * 4 + 1) as u16;
    let height = (size * 2 + 1) as u16;
    let board_area = center_rect(area, width, height);

    let grid = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{}x{}", size, size)),
    );
    frame.render_widget(grid, board_area);
}

fn cell_span(board: &Board, index: usize, is_cursor: bool, is_winning: bool) -> Span<'static> {
    let square = board.get(index).unwrap_or_default();

    let base_style = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Mark::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Mark::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let style = if is_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if is_winning {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    Span::styled(format!(" {} ", square.symbol()), style)
}

fn draw_side_panel(frame: &mut Frame, area: Rect, session: &MatchSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Scoreboard
            Constraint::Length(3), // Notice
            Constraint::Min(3),    // AI reasoning
        ])
        .split(area);

    let game = session.game();
    let scores = game.scores();
    let mut score_lines = vec![
        Line::from(format!("You ({}): {}", game.human_marker(), scores.human_wins())),
        Line::from(format!("AI ({}): {}", game.ai_marker(), scores.ai_wins())),
        Line::from(format!("Ties: {}", scores.ties())),
        Line::from(format!("Game: {}", game.game_count())),
    ];
    if let Some(marker) = session.pending_marker() {
        score_lines.push(Line::from(Span::styled(
            format!("Next game you play {}", marker),
            Style::default().fg(Color::Magenta),
        )));
    }
    let scoreboard =
        Paragraph::new(score_lines).block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(scoreboard, chunks[0]);

    let notice = Paragraph::new(session.notice().unwrap_or_default())
        .style(Style::default().fg(Color::Red))
        .block(Block::default().borders(Borders::ALL).title("Notice"));
    frame.render_widget(notice, chunks[1]);

    let reasoning: Vec<Line> = session
        .history()
        .iter()
        .rev()
        .map(|record| Line::from(record.to_string()))
        .collect();
    let log = Paragraph::new(reasoning)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("AI reasoning"));
    frame.render_widget(log, chunks[2]);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
