//! Submitted feedback list rendering

use crate::state::{AppState, FeedbackRecord};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Draw the list of submitted feedback, scrolled to `state.list_scroll`
pub fn draw_feedback_list(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Submitted Feedback ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if state.feedback.is_empty() {
        let empty = Paragraph::new("No feedback yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state.feedback.iter().map(feedback_item).collect();
    let list = List::new(items).block(block);

    let mut list_state = ListState::default().with_offset(state.list_scroll);
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn feedback_item(record: &FeedbackRecord) -> ListItem<'_> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            record.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ("),
        Span::styled(
            record.email.as_str(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        ),
        Span::raw(")"),
    ])];

    lines.extend(record.message.lines().map(Line::from));
    lines.push(Line::from(Span::styled(
        record.local_timestamp(),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    ListItem::new(lines)
}
