//! Remote reply endpoint.
//!
//! Posts `{"message": ...}` and expects `{"reply": ...}` back. Only compiled
//! with the `backend` feature; the widget never calls it on its own.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// Bot message shown when the endpoint cannot produce a reply.
pub const BACKEND_ERROR_REPLY: &str = "Error getting response from AI.";

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned status {0}")]
    Status(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
pub struct ReplyRequest<'a> {
    pub message: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ReplyResponse {
    pub reply: String,
}

/// Client for a reply endpoint.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    url: String,
}

impl BackendClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends `message` and returns the reply text.
    #[instrument(skip(self, message), fields(url = %self.url))]
    pub async fn query(&self, message: &str) -> Result<String, BackendError> {
        debug!("Sending message to backend");

        let response = self
            .http
            .post(&self.url)
            .json(&ReplyRequest { message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: ReplyResponse = serde_json::from_slice(&body)?;

        debug!("Received backend reply");
        Ok(parsed.reply)
    }

    /// Like [`query`](Self::query) but folds any failure into
    /// [`BACKEND_ERROR_REPLY`].
    pub async fn reply_or_error(&self, message: &str) -> String {
        match self.query(message).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "Backend request failed");
                BACKEND_ERROR_REPLY.to_string()
            }
        }
    }
}
