//! Form domain layer
//!
//! Field identifiers, validation rules and the feedback form's state.

mod field;
mod form_state;
mod validation;

pub use field::{Field, FieldErrors};
pub use form_state::{FeedbackForm, Form};
pub use validation::{validate, ValidationError};
