//! hanpick — keyword extraction server for Korean movie/media reviews.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use hanpick_core::HanpickConfig;
use hanpick_pipeline::{ExtractorConfig, KeywordExtractor};
use hanpick_server::routes;
use hanpick_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = HanpickConfig::from_env();
    info!("Model directory: {}", config.model_dir.display());

    // Both pretrained backends are loaded once and reused across requests.
    let embedder = hanpick_infer::create_embedder(&config.model_dir);
    let tagger = hanpick_nlp::create_tagger();

    let extractor = KeywordExtractor::new(
        embedder,
        tagger,
        ExtractorConfig::with_top_n(config.top_n),
    );

    let state = Arc::new(AppState::new(config, extractor));
    let port = state.config.port;

    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("hanpick server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
