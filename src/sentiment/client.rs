use super::error::SentimentError;
use super::types::{parse_scores, InferenceRequest, SentimentScores};

use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

/// Hosted DistilBERT model fine-tuned on SST-2 (POSITIVE / NEGATIVE labels).
pub const DEFAULT_SENTIMENT_ENDPOINT: &str = "https://api-inference.huggingface.co/models/distilbert/distilbert-base-uncased-finetuned-sst-2-english";

/// Anything that can turn raw text into sentiment scores.
///
/// The orchestrator depends on this trait rather than on the HTTP client so that
/// the classifier can be swapped (or stubbed) at construction time.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<SentimentScores, SentimentError>;
}

/// HTTP client for a remote sentiment-inference endpoint.
///
/// Authenticates with a bearer credential. Without a configured timeout a call
/// waits as long as the upstream model needs to load.
#[derive(Clone)]
pub struct SentimentClient {
    api_key: String,
    endpoint: String,
    http_client: reqwest::Client,
    timeout: Option<Duration>,
}

impl SentimentClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, DEFAULT_SENTIMENT_ENDPOINT)
    }

    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            http_client: reqwest::Client::new(),
            timeout: None,
        }
    }

    /// Caps each classification call; an expired call fails as `Unavailable`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[async_trait]
impl SentimentClassifier for SentimentClient {
    /// Classifies the raw (not lower-cased, not tokenized) text.
    async fn classify(&self, text: &str) -> Result<SentimentScores, SentimentError> {
        let mut request = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&InferenceRequest::new(text));

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Sentiment request to {} failed: {}", self.endpoint, e);
            SentimentError::Unavailable {
                status: None,
                message: e.to_string(),
            }
        })?;

        let status = response.status();

        if status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Sentiment service rejected credentials: {}", body);
            return Err(SentimentError::Auth { message: body });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Sentiment service returned {}: {}", status, body);
            return Err(SentimentError::Unavailable {
                status: Some(status.as_u16()),
                message: format!("upstream returned {}: {}", status, body),
            });
        }

        let body = response.text().await.map_err(|e| SentimentError::Unavailable {
            status: Some(status.as_u16()),
            message: format!("failed to read response body: {}", e),
        })?;

        let scores = parse_scores(&body).inspect_err(|_| {
            tracing::warn!("Unexpected sentiment payload: {}", body);
        })?;

        tracing::debug!("Sentiment labels received: {}", scores.len());
        Ok(scores)
    }
}
