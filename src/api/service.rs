use super::error::ApiError;
use super::types::{AnalysisReport, SearchTermResponse};
use crate::analysis::tokenizer::TextAnalyzer;
use crate::sentiment::client::SentimentClassifier;
use crate::storage::sqlite::LastTextStore;

use std::sync::Arc;

/// Request orchestrator.
///
/// Built once at startup from explicitly constructed components and shared by handle
/// between requests.
pub struct TextAnalysisService {
    analyzer: TextAnalyzer,
    sentiment: Arc<dyn SentimentClassifier>,
    store: LastTextStore,
}

impl TextAnalysisService {
    pub fn new(
        analyzer: TextAnalyzer,
        sentiment: Arc<dyn SentimentClassifier>,
        store: LastTextStore,
    ) -> Self {
        Self {
            analyzer,
            sentiment,
            store,
        }
    }

    pub fn store(&self) -> &LastTextStore {
        &self.store
    }

    /// Word statistics and sentiment for `text`, which then becomes the stored text.
    ///
    /// The text is saved only after both the tokenizer and the classifier succeed.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisReport, ApiError> {
        if text.is_empty() {
            return Err(ApiError::Validation("Text must not be empty".to_string()));
        }

        let stats = self.analyzer.analyze(text);
        let sentiment = self.sentiment.classify(text).await?;
        self.store.save(text).await?;

        tracing::info!(
            "Analyzed text: {} words, {} distinct in top list, {} sentiment labels",
            stats.word_count,
            stats.top_words.len(),
            sentiment.len()
        );

        Ok(AnalysisReport {
            word_count: stats.word_count,
            frequent_words: stats.top_words,
            sentiment,
        })
    }

    /// Whether `term` occurs in the stored text, ignoring case.
    pub async fn search(&self, term: &str) -> Result<SearchTermResponse, ApiError> {
        if term.is_empty() {
            return Err(ApiError::MissingTerm);
        }

        let last_text = self
            .store
            .get_last()
            .await?
            .ok_or(ApiError::NoTextAnalyzedYet)?;

        let found = last_text.to_lowercase().contains(&term.to_lowercase());
        tracing::debug!("Search for '{}': found={}", term, found);

        Ok(SearchTermResponse {
            term: term.to_string(),
            found,
        })
    }
}
