use std::sync::Arc;

use text_analyzer::analysis::tokenizer::TextAnalyzer;
use text_analyzer::api::handlers::router;
use text_analyzer::api::service::TextAnalysisService;
use text_analyzer::config::Settings;
use text_analyzer::sentiment::client::SentimentClient;
use text_analyzer::storage::sqlite::LastTextStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    // A missing API key stops the process here, before anything is served.
    let settings = Settings::from_env()?.apply_args(&args)?;

    // 1. Tokenizer (stopword set loaded once):
    let analyzer = TextAnalyzer::new();
    tracing::info!(
        "Loaded {} English stopwords",
        analyzer.stopwords().len()
    );

    // 2. Sentiment client:
    let mut sentiment = match &settings.sentiment_url {
        Some(url) => SentimentClient::with_endpoint(settings.api_key.clone(), url.clone()),
        None => SentimentClient::new(settings.api_key.clone()),
    };
    if let Some(timeout) = settings.sentiment_timeout {
        sentiment = sentiment.with_timeout(timeout);
    }
    tracing::info!("Sentiment endpoint: {}", sentiment.endpoint());

    // 3. Storage:
    let store = LastTextStore::open(&settings.database_path).await?;

    // 4. HTTP Router:
    let service = Arc::new(TextAnalysisService::new(
        analyzer,
        Arc::new(sentiment),
        store,
    ));
    let app = router(service);

    // 5. Start HTTP server:
    tracing::info!("HTTP server listening on {}", settings.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(settings.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
