//! Text Analyzer Service Library
//!
//! This library crate defines the components behind the text analysis service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of three leaf components and one orchestrator:
//!
//! - **`analysis`**: Tokenization and word-frequency counting, with English stopword removal.
//! - **`sentiment`**: Client for a remote sentiment-classification endpoint, normalizing
//!   its label/score pairs into a lowercase-keyed map.
//! - **`storage`**: A durable single-record store holding the most recently analyzed text.
//! - **`api`**: The request orchestrator and its HTTP handlers (analyze and search).
//! - **`config`**: Startup configuration (API key, endpoint, database path, bind address).

pub mod analysis;
pub mod api;
pub mod config;
pub mod sentiment;
pub mod storage;
