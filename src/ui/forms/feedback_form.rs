//! Feedback form rendering

use super::field_renderer::{draw_field, draw_field_error};
use crate::state::{AppState, Field};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the feedback form with inline errors and the Submit button
pub fn draw_feedback_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Send Feedback ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(1),             // Name error
            Constraint::Length(3),             // Email
            Constraint::Length(1),             // Email error
            Constraint::Min(5),                // Message
            Constraint::Length(1),             // Message error
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .margin(1)
        .split(area);

    let form = &state.form;
    for field in Field::ALL {
        let row = field.index() * 2;
        let is_active = form.focused_field() == Some(field);
        draw_field(frame, chunks[row], field, form.value(field), is_active);
        draw_field_error(frame, chunks[row + 1], form.errors.get(field));
    }

    let label = if state.is_submitting() {
        "Submitting..."
    } else {
        "Submit"
    };
    render_button(
        frame,
        chunks[6],
        label,
        form.is_submit_row_active(),
        !state.is_submitting(),
    );
}
