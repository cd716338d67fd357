//! Layout components (header, status bar)

use crate::platform::{QUIT_SHORTCUT, REFRESH_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Application title shown in the header
const TITLE: &str = "Feedback Application";

/// Screen regions
pub struct ScreenLayout {
    pub header: Rect,
    pub form: Rect,
    pub list: Rect,
    pub status: Rect,
}

/// Split the screen into header, form, feedback list and status bar
pub fn create_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Form
            Constraint::Percentage(45), // Submitted feedback
        ])
        .split(rows[1]);

    ScreenLayout {
        header: rows[0],
        form: columns[0],
        list: columns[1],
        status: rows[2],
    }
}

/// Draw the title and, when present, the success notice
pub fn draw_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(
        TITLE,
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(notice) = state.notice.message() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            notice,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        );

    frame.render_widget(header, area);
}

/// Draw the status bar with key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(
        format!(" {} ", status_hints()),
        Style::default().fg(Color::White),
    )];

    if state.is_submitting() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Submitting...",
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("{} submitted", state.feedback.len()),
        Style::default().fg(Color::Blue),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

fn status_hints() -> String {
    format!(
        "Tab:next  {SUBMIT_SHORTCUT}:submit  {REFRESH_SHORTCUT}:refresh  PgUp/PgDn:scroll  {QUIT_SHORTCUT}:quit"
    )
}
