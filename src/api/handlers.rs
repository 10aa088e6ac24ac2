use super::error::ApiError;
use super::service::TextAnalysisService;
use super::types::{AnalysisReport, AnalyzeRequest, HealthResponse, SearchParams, SearchTermResponse};

use axum::extract::{Extension, Query};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;

pub const ENDPOINT_ANALYZE: &str = "/analyze-text";
pub const ENDPOINT_SEARCH: &str = "/search-term";
pub const ENDPOINT_HEALTH: &str = "/health";

/// Builds the HTTP router around a shared service handle.
pub fn router(service: Arc<TextAnalysisService>) -> Router {
    Router::new()
        .route(ENDPOINT_ANALYZE, post(handle_analyze))
        .route(ENDPOINT_SEARCH, get(handle_search))
        .route(ENDPOINT_HEALTH, get(handle_health))
        .layer(Extension(service))
}

pub async fn handle_analyze(
    Extension(service): Extension<Arc<TextAnalysisService>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let report = service.analyze(&req.text).await?;
    Ok(Json(report))
}

pub async fn handle_search(
    Extension(service): Extension<Arc<TextAnalysisService>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchTermResponse>, ApiError> {
    let response = service.search(&params.term).await?;
    Ok(Json(response))
}

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
