use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    /// The service rejected the credential (HTTP 403).
    #[error("Access forbidden: verify the sentiment service API key permissions ({message})")]
    Auth { message: String },

    /// Transport failure, timeout, or a non-success status other than 403.
    #[error("Sentiment service unavailable: {message}")]
    Unavailable {
        status: Option<u16>,
        message: String,
    },

    /// The body was not a list of label/score lists.
    #[error("Invalid response format from sentiment service: {payload}")]
    MalformedResponse { payload: String },
}

impl SentimentError {
    /// Upstream HTTP status, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            SentimentError::Auth { .. } => Some(403),
            SentimentError::Unavailable { status, .. } => *status,
            SentimentError::MalformedResponse { .. } => None,
        }
    }
}
