//! Application controller
//!
//! Translates key presses into state events and runs the commands the state
//! hands back against the feedback service.

use crate::config::FeedbackConfig;
use crate::platform::SHORTCUT_MODIFIER;
use crate::service::{FeedbackClient, FeedbackServiceTrait};
use crate::state::{AppState, Command, Field, Form, FormEvent};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Main application struct
pub struct App<S = FeedbackClient> {
    /// Current application state
    pub state: AppState,
    /// Feedback service the form submits to
    service: S,
    /// Command waiting for the next frame to be drawn
    pending: Option<Command>,
    /// Whether the app should quit
    quit: bool,
}

impl App<FeedbackClient> {
    /// Create an app talking to the configured feedback service
    pub fn from_config(config: &FeedbackConfig) -> Result<Self> {
        let service = FeedbackClient::new(config)?;
        tracing::info!(url = service.feedback_url(), "Using feedback service");
        Ok(Self::new(service))
    }
}

impl<S: FeedbackServiceTrait> App<S> {
    pub fn new(service: S) -> Self {
        Self {
            state: AppState::new(),
            service,
            pending: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance time-based state (the success notice clear)
    pub fn tick(&mut self, now: Instant) {
        self.state.apply(FormEvent::Tick { now });
    }

    /// Fetch the feedback list, keeping the current one on failure
    pub async fn load_feedback(&mut self) {
        self.execute(Command::FetchFeedback).await;
    }

    /// Validate the draft and, if valid, queue its submission.
    /// The request runs on the next [`App::run_pending`].
    pub fn submit(&mut self) {
        tracing::debug!(draft = ?self.state.form.draft, "Feedback form submitted");
        if let Some(command) = self.state.apply(FormEvent::SubmitRequested) {
            self.pending = Some(command);
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Run the queued command, if any
    pub async fn run_pending(&mut self) {
        if let Some(command) = self.pending.take() {
            self.execute(command).await;
        }
    }

    /// Run a command and every follow-up command its outcome produces
    async fn execute(&mut self, command: Command) {
        let mut next = Some(command);
        while let Some(command) = next.take() {
            let event = match command {
                Command::CreateFeedback(draft) => {
                    match self.service.create_feedback(&draft).await {
                        Ok(()) => {
                            tracing::info!("Feedback submitted");
                            FormEvent::CreateSucceeded { at: Instant::now() }
                        }
                        Err(err) => {
                            tracing::error!(error = %err, "Error submitting feedback");
                            FormEvent::CreateFailed
                        }
                    }
                }
                Command::FetchFeedback => match self.service.list_feedback().await {
                    Ok(records) => {
                        tracing::info!(count = records.len(), "Loaded feedback");
                        FormEvent::FeedbackLoaded(records)
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "Error fetching feedback");
                        FormEvent::FeedbackLoadFailed
                    }
                },
            };
            next = self.state.apply(event);
        }
    }

    /// Apply an edit to the focused field's value
    fn edit_active_field(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.state.form.focused_field() else {
            return;
        };
        let mut value = self.state.form.value(field).to_string();
        edit(&mut value);
        tracing::trace!(field = field.name(), "Field edited");
        self.state.apply(FormEvent::FieldChanged { field, value });
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Alerts are modal
        if self.state.has_alerts() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_alert();
            }
            return Ok(());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return Ok(());
        }

        if key.modifiers.contains(SHORTCUT_MODIFIER) {
            match key.code {
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('r') => self.load_feedback().await,
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::PageDown => self.state.scroll_list_down(),
            KeyCode::PageUp => self.state.scroll_list_up(),
            KeyCode::Enter => {
                if self.state.form.is_submit_row_active() {
                    self.submit();
                } else if self.state.form.focused_field() == Some(Field::Message) {
                    self.edit_active_field(|value| value.push('\n'));
                } else {
                    self.state.form.next_field();
                }
            }
            KeyCode::Backspace => self.edit_active_field(|value| {
                value.pop();
            }),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                self.edit_active_field(|value| value.push(c));
            }
            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{MockFeedbackServiceTrait, ServiceError};
    use crate::state::{
        FeedbackDraft, FeedbackRecord, Phase, SubmittedAt, ValidationError, SUBMIT_FAILED_ALERT,
        SUCCESS_MESSAGE,
    };
    use chrono::Utc;
    use mockall::Sequence;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn record(name: &str) -> FeedbackRecord {
        FeedbackRecord {
            name: name.to_string(),
            email: "someone@example.com".to_string(),
            message: "Some thoughtful feedback".to_string(),
            timestamp: SubmittedAt::At(Utc::now()),
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Handle a key the way the event loop does, then run any queued request
    async fn press(app: &mut App<MockFeedbackServiceTrait>, event: KeyEvent) {
        app.handle_key(event).await.unwrap();
        app.run_pending().await;
    }

    async fn type_text(app: &mut App<MockFeedbackServiceTrait>, text: &str) {
        for c in text.chars() {
            press(app, key(KeyCode::Char(c))).await;
        }
    }

    /// Fill all three fields through the keyboard, leaving focus on Submit
    async fn fill_form(
        app: &mut App<MockFeedbackServiceTrait>,
        name: &str,
        email: &str,
        message: &str,
    ) {
        type_text(app, name).await;
        press(app, key(KeyCode::Tab)).await;
        type_text(app, email).await;
        press(app, key(KeyCode::Tab)).await;
        type_text(app, message).await;
        press(app, key(KeyCode::Tab)).await;
    }

    fn valid_draft() -> FeedbackDraft {
        FeedbackDraft::new("John Doe", "john@example.com", "This is valid feedback")
    }

    mod startup {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_load_feedback_replaces_list() {
            let mut mock = MockFeedbackServiceTrait::new();
            mock.expect_list_feedback()
                .times(1)
                .returning(|| Ok(vec![record("Ada"), record("Zed")]));

            let mut app = App::new(mock);
            app.load_feedback().await;

            let names: Vec<&str> = app.state.feedback.iter().map(|r| r.name.as_str()).collect();
            assert_eq!(names, vec!["Ada", "Zed"]);
        }

        #[tokio::test]
        async fn test_load_failure_leaves_list_empty() {
            let mut mock = MockFeedbackServiceTrait::new();
            mock.expect_list_feedback()
                .times(1)
                .returning(|| Err(ServiceError::Transport("connection refused".to_string())));

            let mut app = App::new(mock);
            app.load_feedback().await;

            assert!(app.state.feedback.is_empty());
            assert!(!app.state.has_alerts());
        }

        #[tokio::test]
        async fn test_refresh_failure_keeps_stale_list() {
            let mut mock = MockFeedbackServiceTrait::new();
            let mut seq = Sequence::new();
            mock.expect_list_feedback()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|| Ok(vec![record("Ada")]));
            mock.expect_list_feedback()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|| {
                    Err(ServiceError::Rejected {
                        status: 500,
                        detail: "database unavailable".to_string(),
                    })
                });

            let mut app = App::new(mock);
            app.load_feedback().await;
            press(&mut app, ctrl('r')).await;

            assert_eq!(app.state.feedback.len(), 1);
            assert_eq!(app.state.feedback[0].name, "Ada");
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_valid_submit_creates_then_refreshes() {
            let mut mock = MockFeedbackServiceTrait::new();
            let mut seq = Sequence::new();
            let expected = valid_draft();
            mock.expect_create_feedback()
                .withf(move |draft| draft == &expected)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
            mock.expect_list_feedback()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|| Ok(vec![record("John Doe")]));

            let mut app = App::new(mock);
            fill_form(&mut app, "John Doe", "john@example.com", "This is valid feedback").await;
            assert!(app.state.form.is_submit_row_active());

            press(&mut app, key(KeyCode::Enter)).await;

            assert_eq!(app.state.form.draft, FeedbackDraft::default());
            assert!(app.state.form.errors.is_empty());
            assert_eq!(app.state.notice.message(), Some(SUCCESS_MESSAGE));
            assert_eq!(app.state.feedback.len(), 1);
            assert_eq!(app.state.phase, Phase::Idle);
        }

        #[tokio::test]
        async fn test_submit_is_in_flight_until_queued_request_runs() {
            let mut mock = MockFeedbackServiceTrait::new();
            mock.expect_create_feedback().times(1).returning(|_| Ok(()));
            mock.expect_list_feedback().times(1).returning(|| Ok(vec![]));

            let mut app = App::new(mock);
            fill_form(&mut app, "John Doe", "john@example.com", "This is valid feedback").await;
            app.handle_key(ctrl('s')).await.unwrap();

            // Nothing sent yet: the next frame can still show the in-flight state
            assert!(app.state.is_submitting());
            assert!(app.has_pending());

            // A second submit while in flight queues nothing new
            app.handle_key(ctrl('s')).await.unwrap();
            app.run_pending().await;

            assert!(!app.has_pending());
            assert!(!app.state.is_submitting());
            assert_eq!(app.state.notice.message(), Some(SUCCESS_MESSAGE));
        }

        #[tokio::test]
        async fn test_notice_clears_after_three_seconds() {
            let mut mock = MockFeedbackServiceTrait::new();
            mock.expect_create_feedback().returning(|_| Ok(()));
            mock.expect_list_feedback().returning(|| Ok(vec![]));

            let mut app = App::new(mock);
            fill_form(&mut app, "John Doe", "john@example.com", "This is valid feedback").await;
            press(&mut app, ctrl('s')).await;

            app.tick(Instant::now());
            assert_eq!(app.state.notice.message(), Some(SUCCESS_MESSAGE));

            app.tick(Instant::now() + Duration::from_millis(3000));
            assert!(app.state.notice.message().is_none());
        }

        #[tokio::test]
        async fn test_invalid_name_makes_no_request() {
            // No expectations: any service call panics
            let mock = MockFeedbackServiceTrait::new();

            let mut app = App::new(mock);
            fill_form(&mut app, "John3", "john@example.com", "This is valid feedback").await;
            press(&mut app, ctrl('s')).await;

            assert_eq!(
                app.state.form.errors.get(Field::Name),
                Some(ValidationError::NameInvalid)
            );
            assert_eq!(app.state.form.errors.get(Field::Email), None);
            assert_eq!(app.state.form.errors.get(Field::Message), None);
            assert_eq!(app.state.phase, Phase::Editing);
        }

        #[tokio::test]
        async fn test_rejected_submit_keeps_draft_and_alerts() {
            let mut mock = MockFeedbackServiceTrait::new();
            mock.expect_create_feedback().times(1).returning(|_| {
                Err(ServiceError::Rejected {
                    status: 400,
                    detail: "All fields are required".to_string(),
                })
            });
            mock.expect_list_feedback().times(0);

            let mut app = App::new(mock);
            fill_form(&mut app, "John Doe", "john@example.com", "This is valid feedback").await;
            app.submit();
            app.run_pending().await;

            assert_eq!(app.state.form.draft, valid_draft());
            assert!(app.state.form.errors.is_empty());
            assert_eq!(app.state.current_alert(), Some(SUBMIT_FAILED_ALERT));
            assert!(app.state.notice.message().is_none());
            assert_eq!(app.state.phase, Phase::Editing);
        }

        #[tokio::test]
        async fn test_transport_failure_keeps_draft_and_alerts() {
            let mut mock = MockFeedbackServiceTrait::new();
            mock.expect_create_feedback()
                .times(1)
                .returning(|_| Err(ServiceError::Transport("timed out".to_string())));

            let mut app = App::new(mock);
            fill_form(&mut app, "John Doe", "john@example.com", "This is valid feedback").await;
            app.submit();
            app.run_pending().await;

            assert_eq!(app.state.form.draft, valid_draft());
            assert_eq!(app.state.current_alert(), Some(SUBMIT_FAILED_ALERT));
        }

        #[tokio::test]
        async fn test_retry_after_failure_submits_same_draft() {
            let mut mock = MockFeedbackServiceTrait::new();
            let mut seq = Sequence::new();
            mock.expect_create_feedback()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Err(ServiceError::Transport("timed out".to_string())));
            let expected = valid_draft();
            mock.expect_create_feedback()
                .withf(move |draft| draft == &expected)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
            mock.expect_list_feedback()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|| Ok(vec![]));

            let mut app = App::new(mock);
            fill_form(&mut app, "John Doe", "john@example.com", "This is valid feedback").await;
            app.submit();
            app.run_pending().await;

            // Dismiss the alert, then retry
            press(&mut app, key(KeyCode::Enter)).await;
            press(&mut app, ctrl('s')).await;

            assert_eq!(app.state.notice.message(), Some(SUCCESS_MESSAGE));
        }
    }

    mod keys {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_typing_edits_focused_field_with_live_validation() {
            let mut app = App::new(MockFeedbackServiceTrait::new());
            type_text(&mut app, "Jo3").await;

            assert_eq!(app.state.form.draft.name, "Jo3");
            assert_eq!(
                app.state.form.errors.get(Field::Name),
                Some(ValidationError::NameInvalid)
            );

            press(&mut app, key(KeyCode::Backspace)).await;
            assert_eq!(app.state.form.draft.name, "Jo");
            assert_eq!(app.state.form.errors.get(Field::Name), None);
        }

        #[tokio::test]
        async fn test_enter_advances_single_line_fields() {
            let mut app = App::new(MockFeedbackServiceTrait::new());
            press(&mut app, key(KeyCode::Enter)).await;
            assert_eq!(app.state.form.focused_field(), Some(Field::Email));
        }

        #[tokio::test]
        async fn test_enter_in_message_inserts_newline() {
            let mut app = App::new(MockFeedbackServiceTrait::new());
            press(&mut app, key(KeyCode::Tab)).await;
            press(&mut app, key(KeyCode::Tab)).await;
            type_text(&mut app, "line one").await;
            press(&mut app, key(KeyCode::Enter)).await;
            type_text(&mut app, "two").await;

            assert_eq!(app.state.form.draft.message, "line one\ntwo");
        }

        #[tokio::test]
        async fn test_typing_on_submit_row_is_ignored() {
            let mut app = App::new(MockFeedbackServiceTrait::new());
            press(&mut app, key(KeyCode::BackTab)).await;
            assert!(app.state.form.is_submit_row_active());

            type_text(&mut app, "abc").await;
            assert_eq!(app.state.form.draft, FeedbackDraft::default());
        }

        #[tokio::test]
        async fn test_alert_is_modal_until_dismissed() {
            let mut app = App::new(MockFeedbackServiceTrait::new());
            app.state.push_alert(SUBMIT_FAILED_ALERT);

            type_text(&mut app, "ignored").await;
            assert_eq!(app.state.form.draft.name, "");

            press(&mut app, key(KeyCode::Esc)).await;
            assert!(!app.state.has_alerts());

            type_text(&mut app, "Ada").await;
            assert_eq!(app.state.form.draft.name, "Ada");
        }

        #[tokio::test]
        async fn test_ctrl_c_quits() {
            let mut app = App::new(MockFeedbackServiceTrait::new());
            assert!(!app.should_quit());
            press(&mut app, ctrl('c')).await;
            assert!(app.should_quit());
        }
    }
}
