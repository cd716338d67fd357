//! Feedback form state: draft values, field errors and focus

use super::{validate, Field, FieldErrors};
use crate::state::FeedbackDraft;

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// The feedback form: three text fields followed by the Submit button row
#[derive(Debug, Clone, Default)]
pub struct FeedbackForm {
    pub draft: FeedbackDraft,
    pub errors: FieldErrors,
    pub active_field_index: usize,
}

impl FeedbackForm {
    /// Focus index of the Submit button row
    pub const SUBMIT_ROW: usize = 3;

    /// Currently focused text field, `None` on the Submit row
    pub fn focused_field(&self) -> Option<Field> {
        Field::from_index(self.active_field_index)
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_ROW
    }

    pub fn value(&self, field: Field) -> &str {
        self.draft.get(field)
    }

    /// Replace a field's value and re-validate that field only
    pub fn set_value(&mut self, field: Field, value: String) {
        let error = validate(field, &value);
        self.draft.set(field, value);
        self.errors.set(field, error);
    }

    /// Re-validate every field, replacing the error map wholesale.
    /// Returns true when the draft is valid.
    pub fn validate_all(&mut self) -> bool {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            errors.set(field, validate(field, self.draft.get(field)));
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Clear values and errors; focus stays where it is
    pub fn reset(&mut self) {
        self.draft = FeedbackDraft::default();
        self.errors.clear();
    }
}

impl Form for FeedbackForm {
    fn field_count(&self) -> usize {
        4 // name, email, message, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_ROW);
    }
}
