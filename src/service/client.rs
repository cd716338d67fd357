//! HTTP client for the remote feedback service
//!
//! The service exposes a single `/feedback` resource: `GET` lists every
//! submitted entry and `POST` accepts a new one.

use super::ServiceError;
use super::traits::FeedbackServiceTrait;
use crate::config::FeedbackConfig;
use crate::state::{FeedbackDraft, FeedbackRecord};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Error body sent by the service alongside non-success statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the feedback service
pub struct FeedbackClient {
    http: reqwest::Client,
    feedback_url: String,
}

impl FeedbackClient {
    /// Create a client from user configuration
    pub fn new(config: &FeedbackConfig) -> Result<Self> {
        Self::with_endpoint(&config.endpoint(), config.request_timeout())
    }

    /// Create a client for an explicit service base URL
    pub fn with_endpoint(endpoint: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            feedback_url: format!("{}/feedback", endpoint.trim_end_matches('/')),
        })
    }

    pub fn feedback_url(&self) -> &str {
        &self.feedback_url
    }
}

/// Turn a non-success response into `ServiceError::Rejected`
async fn rejection(response: reqwest::Response) -> ServiceError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let detail = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.error,
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_string(),
        Err(_) => body,
    };

    ServiceError::Rejected {
        status: status.as_u16(),
        detail,
    }
}

#[async_trait]
impl FeedbackServiceTrait for FeedbackClient {
    async fn list_feedback(&self) -> Result<Vec<FeedbackRecord>, ServiceError> {
        let response = self.http.get(&self.feedback_url).send().await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        let records: Vec<FeedbackRecord> = response.json().await?;
        tracing::debug!(count = records.len(), "Fetched feedback");
        Ok(records)
    }

    async fn create_feedback(&self, draft: &FeedbackDraft) -> Result<(), ServiceError> {
        let response = self
            .http
            .post(&self.feedback_url)
            .json(draft)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        Ok(())
    }
}
