//! Text Analysis Module
//!
//! Turns free-form text into word-frequency statistics.
//!
//! ## Pipeline
//! 1. **Normalize**: The input is lower-cased.
//! 2. **Tokenize**: Text is split on Unicode word boundaries; punctuation and whitespace never become tokens.
//! 3. **Filter**: Tokens that are not purely alphanumeric, and English stopwords, are dropped.
//! 4. **Count**: Remaining tokens are counted and the most frequent ones are ranked.
//!
//! ## Submodules
//! - **`stopwords`**: The fixed English stopword set, loaded once per analyzer.
//! - **`tokenizer`**: `TextAnalyzer`, which owns the stopword set and runs the pipeline.
//! - **`types`**: Result types returned to the orchestrator.

pub mod stopwords;
pub mod tokenizer;
pub mod types;
