use serde::{Deserialize, Serialize};

/// Maximum number of entries returned in `TextStats::top_words`.
pub const TOP_WORDS_LIMIT: usize = 5;

/// A distinct word and how many times it survived filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

impl WordFrequency {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Frequency statistics for a single piece of text.
///
/// Produced fresh for every analysis and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextStats {
    /// Number of tokens left after filtering, duplicates included.
    pub word_count: usize,
    /// Most frequent words, descending by count, ties in order of first appearance.
    pub top_words: Vec<WordFrequency>,
}
