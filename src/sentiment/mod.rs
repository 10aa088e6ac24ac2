//! Sentiment Classification Module
//!
//! Sends raw text to a remote sentiment-classification model and normalizes the
//! returned label/score pairs into a lowercase-keyed map.
//!
//! ## Behavior
//! - Every call is an independent request: no caching and no retries.
//! - The request asks the service to wait for a cold model instead of failing fast.
//! - Failures are surfaced as a typed `SentimentError` (auth, unavailable, malformed).
//!
//! ## Submodules
//! - **`client`**: The `SentimentClassifier` seam and its HTTP implementation.
//! - **`error`**: Failure taxonomy for classification calls.
//! - **`types`**: Wire DTOs and response normalization.

pub mod client;
pub mod error;
pub mod types;
