use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The text stored by the last successful analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedText {
    pub text: String,
    /// Write time, assigned by the database.
    pub timestamp: DateTime<Utc>,
}
