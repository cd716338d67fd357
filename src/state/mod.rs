//! Application state module

mod app_state;
mod feedback;
mod forms;
mod notice;

pub use app_state::*;
pub use feedback::*;
pub use forms::*;
pub use notice::*;
