//! Form rendering module
//!
//! - `field_renderer`: Field and inline error rendering
//! - `feedback_form`: The feedback form itself

mod feedback_form;
mod field_renderer;

pub use feedback_form::draw_feedback_form;
