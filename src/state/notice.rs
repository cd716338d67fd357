//! Success notice with a cancellable scheduled clear

use std::time::{Duration, Instant};

/// Confirmation shown after feedback is accepted
pub const SUCCESS_MESSAGE: &str = "✅ Thank you! Your feedback has been submitted successfully.";

/// A transient notice that clears itself once its deadline passes.
///
/// The pending clear lives alongside the message, so replacing or cancelling
/// the notice also drops the old deadline.
#[derive(Debug, Clone, Default)]
pub struct SuccessNotice {
    message: Option<String>,
    clear_at: Option<Instant>,
}

impl SuccessNotice {
    /// How long the notice stays visible
    pub const DURATION: Duration = Duration::from_millis(3000);

    /// Show the confirmation and schedule its clear
    pub fn show(&mut self, now: Instant) {
        self.message = Some(SUCCESS_MESSAGE.to_string());
        self.clear_at = Some(now + Self::DURATION);
    }

    /// Clear immediately and drop any pending clear
    pub fn cancel(&mut self) {
        self.message = None;
        self.clear_at = None;
    }

    /// Fire the scheduled clear if due. Returns true if the notice was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.clear_at {
            Some(deadline) if now >= deadline => {
                self.cancel();
                true
            }
            _ => false,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
