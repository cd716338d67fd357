//! Field rendering utilities for forms

use crate::state::{Field, ValidationError};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a text field: bordered input box showing the value, or the
/// placeholder when empty
pub fn draw_field(frame: &mut Frame, area: Rect, field: Field, value: &str, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };
    let cursor_style = Style::default().fg(Color::Cyan);

    let content = if value.is_empty() {
        Paragraph::new(Line::from(vec![
            Span::styled(cursor, cursor_style),
            Span::styled(
                field.placeholder(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]))
    } else if field.is_multiline() {
        let mut lines: Vec<Line> = value.split('\n').map(|l| Line::from(l.to_string())).collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(cursor, cursor_style));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::raw(value),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the inline error line under a field (blank when valid)
pub fn draw_field_error(frame: &mut Frame, area: Rect, error: Option<ValidationError>) {
    if let Some(error) = error {
        let line = Paragraph::new(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(line, area);
    }
}
