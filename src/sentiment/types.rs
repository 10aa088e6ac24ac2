//! Sentiment Wire Types
//!
//! Request payload sent to the inference endpoint and the normalization of its
//! `[[{"label": ..., "score": ...}, ...]]` response into `SentimentScores`.

use super::error::SentimentError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lowercase sentiment label mapped to the classifier's probability for it.
///
/// Labels are whatever the service returned; no fixed set is enforced.
pub type SentimentScores = HashMap<String, f64>;

/// Body of the inference request.
#[derive(Debug, Serialize)]
pub struct InferenceRequest<'a> {
    pub inputs: &'a str,
    pub options: InferenceOptions,
}

#[derive(Debug, Serialize)]
pub struct InferenceOptions {
    /// Asks the service to block while a cold model loads instead of returning 503.
    pub wait_for_model: bool,
}

impl<'a> InferenceRequest<'a> {
    pub fn new(inputs: &'a str) -> Self {
        Self {
            inputs,
            options: InferenceOptions {
                wait_for_model: true,
            },
        }
    }
}

/// One classifier output entry.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

/// Normalizes a raw response body.
///
/// Only the first inner list is read; later elements are ignored whatever their shape.
/// A duplicate label keeps the last score seen.
pub fn parse_scores(body: &str) -> Result<SentimentScores, SentimentError> {
    let malformed = || SentimentError::MalformedResponse {
        payload: body.to_string(),
    };

    let batches: Vec<serde_json::Value> = serde_json::from_str(body).map_err(|_| malformed())?;
    let first = batches.into_iter().next().ok_or_else(malformed)?;
    let first: Vec<LabelScore> = serde_json::from_value(first).map_err(|_| malformed())?;

    Ok(first
        .into_iter()
        .map(|item| (item.label.to_lowercase(), item.score))
        .collect())
}
