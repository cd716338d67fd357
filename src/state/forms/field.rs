//! Form field identifiers and per-field error state

use super::validation::ValidationError;
use std::collections::BTreeMap;

/// The fields of the feedback form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Wire name used in the JSON payload
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Resolve a field from its wire name
    #[cfg(test)]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Feedback",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Enter your name",
            Field::Email => "Enter your email",
            Field::Message => "Enter your feedback",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Message)
    }

    /// Index of this field in the form's focus order
    pub fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Message => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Current validation error for each touched field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, ValidationError>,
}

impl FieldErrors {
    /// Record the validation outcome for a single field
    pub fn set(&mut self, field: Field, error: Option<ValidationError>) {
        match error {
            Some(error) => {
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}
