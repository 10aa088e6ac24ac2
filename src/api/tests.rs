//! API Module Tests
//!
//! Validates the orchestrator and the HTTP surface using a stub sentiment classifier
//! and a temporary SQLite store.
//!
//! ## Test Scopes
//! - **Service**: Analyze/search semantics, validation, and the all-or-nothing rule.
//! - **Router**: Status codes and JSON bodies for each endpoint.

#[cfg(test)]
mod tests {
    use crate::analysis::tokenizer::TextAnalyzer;
    use crate::analysis::types::WordFrequency;
    use crate::api::error::ApiError;
    use crate::api::handlers::router;
    use crate::api::service::TextAnalysisService;
    use crate::api::types::{AnalysisReport, ErrorResponse, SearchTermResponse};
    use crate::sentiment::client::SentimentClassifier;
    use crate::sentiment::error::SentimentError;
    use crate::sentiment::types::SentimentScores;
    use crate::storage::sqlite::LastTextStore;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::ServiceExt;

    enum Outcome {
        Scores,
        Forbidden,
        Down,
    }

    struct StubClassifier {
        outcome: Outcome,
        calls: AtomicUsize,
    }

    impl StubClassifier {
        fn new(outcome: Outcome) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SentimentClassifier for StubClassifier {
        async fn classify(&self, _text: &str) -> Result<SentimentScores, SentimentError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.outcome {
                Outcome::Scores => Ok(SentimentScores::from([
                    ("positive".to_string(), 0.9),
                    ("negative".to_string(), 0.1),
                ])),
                Outcome::Forbidden => Err(SentimentError::Auth {
                    message: "Forbidden".to_string(),
                }),
                Outcome::Down => Err(SentimentError::Unavailable {
                    status: Some(503),
                    message: "upstream returned 503".to_string(),
                }),
            }
        }
    }

    async fn build_service(classifier: Arc<StubClassifier>) -> (Arc<TextAnalysisService>, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = LastTextStore::open(dir.path().join("api.db")).await.unwrap();
        let service = TextAnalysisService::new(TextAnalyzer::new(), classifier, store);
        (Arc::new(service), dir)
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn analyze_request(text: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/analyze-text")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::json!({ "text": text }).to_string()))
            .unwrap()
    }

    fn search_request(term: &str) -> Request<Body> {
        Request::builder()
            .uri(format!("/search-term?term={}", term))
            .body(Body::empty())
            .unwrap()
    }

    // ============================================================
    // SERVICE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_analyze_returns_full_report() {
        let (service, _dir) = build_service(StubClassifier::new(Outcome::Scores)).await;

        let report = service
            .analyze("This is a sample text with sample words")
            .await
            .unwrap();

        assert_eq!(report.word_count, 4);
        assert_eq!(
            report.frequent_words,
            vec![
                WordFrequency::new("sample", 2),
                WordFrequency::new("text", 1),
                WordFrequency::new("words", 1),
            ]
        );
        assert_eq!(report.sentiment["positive"], 0.9);
        assert_eq!(report.sentiment["negative"], 0.1);
    }

    #[tokio::test]
    async fn test_analyze_stores_text() {
        let (service, _dir) = build_service(StubClassifier::new(Outcome::Scores)).await;

        service.analyze("first text").await.unwrap();
        service.analyze("second text").await.unwrap();

        assert_eq!(
            service.store().get_last().await.unwrap().as_deref(),
            Some("second text")
        );
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_text() {
        let classifier = StubClassifier::new(Outcome::Scores);
        let (service, _dir) = build_service(classifier.clone()).await;

        let err = service.analyze("").await.unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(classifier.calls(), 0, "Classifier must not be called");
        assert_eq!(service.store().get_last().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_analyze_all_stopwords_still_succeeds() {
        let (service, _dir) = build_service(StubClassifier::new(Outcome::Scores)).await;

        let report = service.analyze("it is what it is").await.unwrap();

        assert_eq!(report.word_count, 0);
        assert!(report.frequent_words.is_empty());
        assert_eq!(
            service.store().get_last().await.unwrap().as_deref(),
            Some("it is what it is")
        );
    }

    #[tokio::test]
    async fn test_sentiment_failure_stores_nothing() {
        let (service, _dir) = build_service(StubClassifier::new(Outcome::Down)).await;

        let err = service.analyze("some text").await.unwrap_err();

        assert!(matches!(
            err,
            ApiError::Sentiment(SentimentError::Unavailable { .. })
        ));
        assert_eq!(service.store().get_last().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_sentiment_failure_keeps_previous_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shared.db");

        let store = LastTextStore::open(&path).await.unwrap();
        let ok = TextAnalysisService::new(
            TextAnalyzer::new(),
            StubClassifier::new(Outcome::Scores),
            store.clone(),
        );
        ok.analyze("kept text").await.unwrap();

        let failing = TextAnalysisService::new(
            TextAnalyzer::new(),
            StubClassifier::new(Outcome::Forbidden),
            store,
        );
        assert!(failing.analyze("lost text").await.is_err());

        assert_eq!(
            failing.store().get_last().await.unwrap().as_deref(),
            Some("kept text")
        );
    }

    #[tokio::test]
    async fn test_search_found_case_insensitive() {
        let (service, _dir) = build_service(StubClassifier::new(Outcome::Scores)).await;
        service.analyze("This is a Sample text").await.unwrap();

        for term in ["sample", "SAMPLE", "is a s", "Text"] {
            let result = service.search(term).await.unwrap();
            assert_eq!(
                result,
                SearchTermResponse {
                    term: term.to_string(),
                    found: true
                }
            );
        }
    }

    #[tokio::test]
    async fn test_search_not_found() {
        let (service, _dir) = build_service(StubClassifier::new(Outcome::Scores)).await;
        service.analyze("This is a sample text").await.unwrap();

        let result = service.search("hello").await.unwrap();

        assert!(!result.found);
        assert_eq!(result.term, "hello");
    }

    #[tokio::test]
    async fn test_search_matches_stopwords_in_raw_text() {
        let (service, _dir) = build_service(StubClassifier::new(Outcome::Scores)).await;
        service.analyze("This is a sample text").await.unwrap();

        // Search runs against the stored text, not the filtered tokens
        assert!(service.search("this").await.unwrap().found);
    }

    #[tokio::test]
    async fn test_search_without_text() {
        let (service, _dir) = build_service(StubClassifier::new(Outcome::Scores)).await;

        let err = service.search("sample").await.unwrap_err();

        assert!(matches!(err, ApiError::NoTextAnalyzedYet));
    }

    #[tokio::test]
    async fn test_search_rejects_empty_term() {
        let (service, _dir) = build_service(StubClassifier::new(Outcome::Scores)).await;

        let err = service.search("").await.unwrap_err();

        assert!(matches!(err, ApiError::MissingTerm));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    // ============================================================
    // ROUTER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_analyze_endpoint() {
        let (service, _dir) = build_service(StubClassifier::new(Outcome::Scores)).await;

        let response = router(service)
            .oneshot(analyze_request("This is a sample text with sample words"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let report: AnalysisReport = body_json(response).await;
        assert_eq!(report.word_count, 4);
        assert!(report.frequent_words.len() >= 3);
        assert!(report.sentiment.contains_key("positive"));
        assert!(report.sentiment.contains_key("negative"));
    }

    #[tokio::test]
    async fn test_analyze_endpoint_empty_input() {
        let (service, _dir) = build_service(StubClassifier::new(Outcome::Scores)).await;

        let response = router(service).oneshot(analyze_request("")).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_analyze_endpoint_sentiment_forbidden() {
        let (service, _dir) = build_service(StubClassifier::new(Outcome::Forbidden)).await;

        let response = router(service)
            .oneshot(analyze_request("some text"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let error: ErrorResponse = body_json(response).await;
        assert!(error.detail.contains("Access forbidden"));
    }

    #[tokio::test]
    async fn test_search_endpoint_found_and_not_found() {
        let (service, _dir) = build_service(StubClassifier::new(Outcome::Scores)).await;
        let app = router(service);

        let response = app
            .clone()
            .oneshot(analyze_request("This is a sample text"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.clone().oneshot(search_request("sample")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = body_json(response).await;
        assert_eq!(body, serde_json::json!({"term": "sample", "found": true}));

        let response = app.oneshot(search_request("hello")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = body_json(response).await;
        assert_eq!(body, serde_json::json!({"term": "hello", "found": false}));
    }

    #[tokio::test]
    async fn test_search_endpoint_no_text() {
        let (service, _dir) = build_service(StubClassifier::new(Outcome::Scores)).await;

        let response = router(service)
            .oneshot(search_request("sample"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ErrorResponse = body_json(response).await;
        assert!(error.detail.contains("No text has been analyzed"));
    }

    #[tokio::test]
    async fn test_search_endpoint_missing_param() {
        let (service, _dir) = build_service(StubClassifier::new(Outcome::Scores)).await;
        let app = router(service);

        for uri in ["/search-term", "/search-term?term="] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri={}", uri);
            let error: ErrorResponse = body_json(response).await;
            assert_eq!(error.detail, "Term parameter is required");
        }
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (service, _dir) = build_service(StubClassifier::new(Outcome::Scores)).await;

        let response = router(service)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
