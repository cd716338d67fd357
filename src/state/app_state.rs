//! Application state and its transitions
//!
//! `AppState` never performs I/O. Each event is applied with
//! [`AppState::apply`], which may hand back a [`Command`] for the caller to
//! execute against the feedback service. The outcome of that command is fed
//! back in as another event.

use super::feedback::{FeedbackDraft, FeedbackRecord};
use super::forms::{FeedbackForm, Field};
use super::SuccessNotice;
use std::collections::VecDeque;
use std::time::Instant;

/// Alert shown when a submission is rejected or cannot be sent
pub const SUBMIT_FAILED_ALERT: &str = "Error submitting feedback";

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing typed since start or since the last accepted submission
    #[default]
    Idle,
    Editing,
    /// A create request is in flight
    Submitting,
}

/// Inputs to the state machine
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    FieldChanged { field: Field, value: String },
    SubmitRequested,
    CreateSucceeded { at: Instant },
    CreateFailed,
    FeedbackLoaded(Vec<FeedbackRecord>),
    FeedbackLoadFailed,
    Tick { now: Instant },
}

/// Side effects requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateFeedback(FeedbackDraft),
    FetchFeedback,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: FeedbackForm,
    /// Last successfully fetched feedback, in service order
    pub feedback: Vec<FeedbackRecord>,
    pub notice: SuccessNotice,
    pub phase: Phase,
    /// First visible entry of the feedback list
    pub list_scroll: usize,
    /// Blocking alerts, oldest first
    alerts: VecDeque<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event and return the side effect it requires, if any
    pub fn apply(&mut self, event: FormEvent) -> Option<Command> {
        match event {
            FormEvent::FieldChanged { field, value } => {
                self.form.set_value(field, value);
                if self.phase != Phase::Submitting {
                    self.phase = Phase::Editing;
                }
                None
            }
            FormEvent::SubmitRequested => self.submit(),
            FormEvent::CreateSucceeded { at } => {
                self.notice.show(at);
                self.form.reset();
                self.phase = Phase::Idle;
                Some(Command::FetchFeedback)
            }
            FormEvent::CreateFailed => {
                self.push_alert(SUBMIT_FAILED_ALERT);
                self.phase = Phase::Editing;
                None
            }
            FormEvent::FeedbackLoaded(records) => {
                self.feedback = records;
                self.clamp_list_scroll();
                None
            }
            FormEvent::FeedbackLoadFailed => None,
            FormEvent::Tick { now } => {
                self.notice.tick(now);
                None
            }
        }
    }

    fn submit(&mut self) -> Option<Command> {
        if self.phase == Phase::Submitting {
            tracing::debug!("Ignoring submit while a submission is in flight");
            return None;
        }

        self.notice.cancel();

        if !self.form.validate_all() {
            self.phase = Phase::Editing;
            return None;
        }

        self.phase = Phase::Submitting;
        Some(Command::CreateFeedback(self.form.draft.clone()))
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Queue a blocking alert for display
    pub fn push_alert(&mut self, message: impl Into<String>) {
        self.alerts.push_back(message.into());
    }

    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }

    pub fn current_alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    pub fn scroll_list_down(&mut self) {
        if self.list_scroll + 1 < self.feedback.len() {
            self.list_scroll += 1;
        }
    }

    pub fn scroll_list_up(&mut self) {
        self.list_scroll = self.list_scroll.saturating_sub(1);
    }

    fn clamp_list_scroll(&mut self) {
        self.list_scroll = self.list_scroll.min(self.feedback.len().saturating_sub(1));
    }
}
