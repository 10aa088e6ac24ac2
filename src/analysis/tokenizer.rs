use super::stopwords::StopwordFilter;
use super::types::{TextStats, WordFrequency, TOP_WORDS_LIMIT};
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Apostrophe clitics split off the end of a word, e.g. `john's` -> `john`.
const CLITICS: &[&str] = &["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Tokenizer and frequency counter.
///
/// Holds its stopword set for its whole lifetime; construct it once at startup and
/// share it between requests.
#[derive(Debug, Clone, Default)]
pub struct TextAnalyzer {
    stopwords: StopwordFilter,
}

impl TextAnalyzer {
    /// Analyzer using the English stopword set.
    pub fn new() -> Self {
        Self::with_stopwords(StopwordFilter::english())
    }

    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Splits `text` into the lower-cased, filtered tokens that take part in counting.
    ///
    /// Word boundaries follow Unicode text segmentation (UAX #29), so punctuation and
    /// whitespace never appear as tokens. A trailing clitic is dropped and its stem kept
    /// (`company's` -> `company`, `don't` -> `do`). A token is kept only if every
    /// character is alphanumeric and it is not a stopword. Order of appearance is preserved.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase().replace('\u{2019}', "'");
        lowered
            .unicode_words()
            .map(strip_clitic)
            .filter(|word| word.chars().all(char::is_alphanumeric))
            .filter(|word| !self.stopwords.is_stopword(word))
            .map(str::to_string)
            .collect()
    }

    /// Counts filtered tokens and ranks the most frequent ones.
    ///
    /// Empty or all-stopword input yields a zero count and no top words.
    pub fn analyze(&self, text: &str) -> TextStats {
        let tokens = self.tokenize(text);
        let word_count = tokens.len();

        // Distinct words in first-occurrence order, with their positions in `counts`.
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for token in &tokens {
            match positions.get(token.as_str()) {
                Some(&idx) => counts[idx].1 += 1,
                None => {
                    positions.insert(token.as_str(), counts.len());
                    counts.push((token.as_str(), 1));
                }
            }
        }

        // Stable sort keeps first-occurrence order between equal counts.
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let top_words = counts
            .into_iter()
            .take(TOP_WORDS_LIMIT)
            .map(|(word, count)| WordFrequency::new(word, count))
            .collect();

        tracing::debug!(
            "Analyzed text: {} bytes, {} counted words",
            text.len(),
            word_count
        );

        TextStats {
            word_count,
            top_words,
        }
    }
}

fn strip_clitic(word: &str) -> &str {
    CLITICS
        .iter()
        .find_map(|clitic| word.strip_suffix(*clitic).filter(|stem| !stem.is_empty()))
        .unwrap_or(word)
}
