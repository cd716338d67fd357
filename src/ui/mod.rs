//! UI module for rendering the TUI

pub mod components;
mod feedback_list;
mod forms;
mod layout;

use crate::state::AppState;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState) {
    let screen = layout::create_layout(frame.area());

    layout::draw_header(frame, screen.header, state);
    forms::draw_feedback_form(frame, screen.form, state);
    feedback_list::draw_feedback_list(frame, screen.list, state);
    layout::draw_status_bar(frame, screen.status, state);

    // Alerts render last so they sit on top
    if let Some(alert) = state.current_alert() {
        components::render_alert_dialog(frame, alert);
    }
}
