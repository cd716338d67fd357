//! Feedback service module for HTTP communication

mod client;
mod error;
mod traits;

pub use client::FeedbackClient;
pub use error::ServiceError;
pub use traits::FeedbackServiceTrait;

#[cfg(test)]
pub use traits::MockFeedbackServiceTrait;
