//! Text Analyzer API Module
//!
//! Orchestrates the tokenizer, the sentiment classifier, and the single-record store,
//! and exposes the result over HTTP.
//!
//! ## Operations
//! - **Analyze**: Counts words, classifies sentiment, then stores the text. Any failure
//!   aborts the whole operation; no partial result is returned or stored.
//! - **Search**: Case-insensitive substring check of a term against the stored text.
//!
//! ## Submodules
//! - **`service`**: `TextAnalysisService`, the orchestrator shared by all handlers.
//! - **`handlers`**: Axum handlers and router construction.
//! - **`types`**: Request/response DTOs.
//! - **`error`**: Error taxonomy and its HTTP mapping.

pub mod error;
pub mod handlers;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;
