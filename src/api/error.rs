use super::types::ErrorResponse;
use crate::sentiment::error::SentimentError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected input, before any component runs.
    #[error("{0}")]
    Validation(String),

    /// Search called without a term.
    #[error("Term parameter is required")]
    MissingTerm,

    #[error(transparent)]
    Sentiment(#[from] SentimentError),

    /// Search attempted before any text was stored.
    #[error("No text has been analyzed yet")]
    NoTextAnalyzedYet,

    #[error("Storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MissingTerm => StatusCode::BAD_REQUEST,
            ApiError::Sentiment(_) => StatusCode::BAD_GATEWAY,
            ApiError::NoTextAnalyzedYet => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }

        (
            status,
            Json(ErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
