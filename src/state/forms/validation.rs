//! Field validation rules
//!
//! Each field has exactly one rule. Rules are pure: the same input always
//! yields the same outcome.

use super::field::Field;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum length of a feedback message, counted in Unicode scalar values
/// (`char`s) rather than UTF-16 code units, so "😀😀😀😀😀" is 5 long.
pub const MIN_MESSAGE_LEN: usize = 10;

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern is valid")
});

// \w is spelled out so only ASCII word characters match
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,4}$")
        .expect("email pattern is valid")
});

/// A validation failure; the Display text is shown inline under the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must only contain letters and spaces")]
    NameInvalid,
    #[error("Email is required")]
    EmailRequired,
    #[error("Enter a valid email address")]
    EmailInvalid,
    #[error("Feedback message cannot be empty")]
    MessageEmpty,
    #[error("Feedback message should be at least 10 characters long")]
    MessageTooShort,
}

/// Validate a single field value
pub fn validate(field: Field, value: &str) -> Option<ValidationError> {
    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Message => validate_message(value),
    }
}

/// Validate a field addressed by its wire name. Unknown names never fail.
#[cfg(test)]
pub fn validate_named(name: &str, value: &str) -> Option<ValidationError> {
    Field::from_name(name).and_then(|field| validate(field, value))
}

fn validate_name(value: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        Some(ValidationError::NameRequired)
    } else if !NAME_REGEX.is_match(value) {
        Some(ValidationError::NameInvalid)
    } else {
        None
    }
}

fn validate_email(value: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        Some(ValidationError::EmailRequired)
    } else if !EMAIL_REGEX.is_match(value) {
        Some(ValidationError::EmailInvalid)
    } else {
        None
    }
}

fn validate_message(value: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        Some(ValidationError::MessageEmpty)
    } else if value.chars().count() < MIN_MESSAGE_LEN {
        Some(ValidationError::MessageTooShort)
    } else {
        None
    }
}
