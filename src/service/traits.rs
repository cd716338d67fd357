//! Trait abstraction for the feedback service to enable mocking in tests

use super::ServiceError;
use crate::state::{FeedbackDraft, FeedbackRecord};
use async_trait::async_trait;

/// Operations offered by the remote feedback service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackServiceTrait: Send + Sync {
    /// Fetch all submitted feedback, in the order the service returns it
    async fn list_feedback(&self) -> Result<Vec<FeedbackRecord>, ServiceError>;

    /// Submit a new feedback entry
    async fn create_feedback(&self, draft: &FeedbackDraft) -> Result<(), ServiceError>;
}
