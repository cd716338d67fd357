//! Errors returned by the feedback service

use thiserror::Error;

/// Failure talking to the feedback service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The service answered with a non-success status
    #[error("feedback service rejected the request ({status}): {detail}")]
    Rejected { status: u16, detail: String },
    /// The request never produced a response
    #[error("failed to reach feedback service: {0}")]
    Transport(String),
    /// The response body could not be decoded
    #[error("invalid response from feedback service: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ServiceError::Decode(err.to_string())
        } else {
            ServiceError::Transport(err.to_string())
        }
    }
}
