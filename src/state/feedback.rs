//! Feedback data exchanged with the feedback service

use super::forms::Field;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// The in-progress, not yet submitted form values.
/// Serialized as-is for the create request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FeedbackDraft {
    #[cfg(test)]
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

/// A submitted feedback entry as returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedbackRecord {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub timestamp: SubmittedAt,
}

impl FeedbackRecord {
    /// Submission time rendered in the user's local timezone
    pub fn local_timestamp(&self) -> String {
        self.timestamp.to_local_string()
    }
}

/// Formats accepted for timestamps that carry no UTC offset
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// When an entry was submitted.
///
/// Decoding never fails: one odd value must not cost the rest of the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmittedAt {
    At(DateTime<Utc>),
    /// Present but not a recognizable date; shown verbatim
    Unparsed(String),
    #[default]
    Missing,
}

impl SubmittedAt {
    /// Parse RFC 3339, then offset-less date-times (taken as UTC), then bare dates
    pub fn parse(raw: &str) -> Self {
        let value = raw.trim();

        if let Ok(at) = DateTime::parse_from_rfc3339(value) {
            return SubmittedAt::At(at.with_timezone(&Utc));
        }

        let naive = NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            });

        match naive {
            Some(naive) => SubmittedAt::At(naive.and_utc()),
            None => SubmittedAt::Unparsed(raw.to_string()),
        }
    }

    fn from_json(value: Option<serde_json::Value>) -> Self {
        use serde_json::Value;

        match value {
            None | Some(Value::Null) => SubmittedAt::Missing,
            Some(Value::String(raw)) => SubmittedAt::parse(&raw),
            // Epoch milliseconds
            Some(Value::Number(number)) => number
                .as_i64()
                .and_then(DateTime::from_timestamp_millis)
                .map(SubmittedAt::At)
                .unwrap_or_else(|| SubmittedAt::Unparsed(number.to_string())),
            Some(other) => SubmittedAt::Unparsed(other.to_string()),
        }
    }

    pub fn to_local_string(&self) -> String {
        match self {
            SubmittedAt::At(at) => at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            SubmittedAt::Unparsed(raw) => raw.clone(),
            SubmittedAt::Missing => "Unknown time".to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for SubmittedAt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        let submitted_at = SubmittedAt::from_json(value);
        if let SubmittedAt::Unparsed(raw) = &submitted_at {
            tracing::debug!(timestamp = %raw, "Unrecognized feedback timestamp");
        }
        Ok(submitted_at)
    }
}
