//! Stateless UI rendering for connect four.
//!
//! Row 0 of the board is drawn at the bottom so columns visibly fill from
//! the floor up.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_connect4::{GameView, Marker, Phase};

use crate::config::EMPTY_GLYPH;

/// Prompt shown once a game has ended.
pub const RESTART_PROMPT: &str = "Restart? Yes(1) No(0)";

/// Renders the whole game screen.
pub fn draw(frame: &mut Frame, view: &GameView<'_>) {
    let area = frame.area();
    let (board_width, board_height) = board_extent(view.board.rows(), view.board.cols());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                           // Title
            Constraint::Min(board_height.saturating_add(2)), // Board
            Constraint::Length(5),                           // Status
        ])
        .split(area);

    // Title
    let title = Paragraph::new("Connect 4")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    // Board
    let board_area = center_rect(chunks[1], board_width, board_height);
    frame.render_widget(Paragraph::new(board_lines(view)), board_area);

    // Status
    let status = Paragraph::new(status_lines(view))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

/// Width and height in cells of the grid plus its label line, saturating at
/// the largest size a terminal can address.
pub fn board_extent(rows: usize, cols: usize) -> (u16, u16) {
    let rows = u16::try_from(rows).unwrap_or(u16::MAX);
    let cols = u16::try_from(cols).unwrap_or(u16::MAX);
    (
        cols.saturating_mul(2).saturating_add(3),
        rows.saturating_add(1),
    )
}

/// The grid, top row first, followed by the column labels.
pub fn board_lines(view: &GameView<'_>) -> Vec<Line<'static>> {
    let board = view.board;
    let border = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::with_capacity(board.rows() + 1);

    for row in (0..board.rows()).rev() {
        let mut spans = vec![Span::styled("| ", border)];
        for col in 0..board.cols() {
            spans.push(cell_span(view, row, col));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled("|", border));
        lines.push(Line::from(spans));
    }

    let labels: String = (1..=board.cols()).map(|col| format!("{} ", col)).collect();
    lines.push(Line::from(Span::styled(format!("  {}", labels), border)));
    lines
}

/// Turn or result message, the prompt for the current phase, and the score.
pub fn status_lines(view: &GameView<'_>) -> Vec<Line<'static>> {
    let state = view.state;
    let mut lines = Vec::with_capacity(3);

    match (state.phase(), state.winner()) {
        (Phase::Playing, _) => {
            let active = state.active_player();
            lines.push(Line::from(format!(
                "Now Playing: {} ({})",
                active.name(),
                active.marker()
            )));
            lines.push(Line::from(format!(
                "Press 1-{} to drop, q to quit",
                view.board.cols()
            )));
        }
        (Phase::Ended, Some(winner)) => {
            lines.push(Line::from(format!(
                "It is a Connect 4. {} wins!",
                winner.name()
            )));
            lines.push(Line::from(RESTART_PROMPT));
        }
        (Phase::Ended, None) => {
            lines.push(Line::from("It is a draw, nobody won."));
            lines.push(Line::from(RESTART_PROMPT));
        }
    }

    let [first, second] = view.players;
    let score = view.scoreboard;
    lines.push(Line::from(format!(
        "{} {} - {} {} | draws {}",
        first.name(),
        score.first_wins(),
        score.second_wins(),
        second.name(),
        score.draws()
    )));
    lines
}

fn cell_span(view: &GameView<'_>, row: usize, col: usize) -> Span<'static> {
    let Some(marker) = view.board.cell_at(row as isize, col as isize) else {
        return Span::styled(
            EMPTY_GLYPH.to_string(),
            Style::default().fg(Color::DarkGray),
        );
    };

    let base = Style::default()
        .fg(marker_color(view, marker))
        .add_modifier(Modifier::BOLD);
    let style = match view.winning_line {
        Some(line) if line.contains(row, col) => base.bg(Color::White).fg(Color::Black),
        _ => base,
    };
    Span::styled(marker.to_string(), style)
}

fn marker_color(view: &GameView<'_>, marker: Marker) -> Color {
    if *view.players[0].marker() == marker {
        Color::Blue
    } else {
        Color::Red
    }
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
