mod config;
mod errors;
mod extract;
mod llm_client;
mod routes;
mod state;
mod summarize;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, SummarizerBackend};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::summarize::{ExtractiveSummarizer, LlmSummarizer, Summarizer};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("summarizer_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting summarizer API v{}", env!("CARGO_PKG_VERSION"));

    let summarizer = build_summarizer(&config)?;
    info!(
        "Summarizer backend: {} (chunks of {} words)",
        summarizer.backend(),
        config.max_chunk_words
    );

    let state = AppState {
        summarizer,
        config: config.clone(),
    };

    // The upload page is served from another origin.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("HOST and PORT must form a valid socket address")?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_summarizer(config: &Config) -> Result<Arc<dyn Summarizer>> {
    match (config.backend, &config.anthropic_api_key) {
        (SummarizerBackend::Llm, Some(key)) => {
            let llm = LlmClient::new(key.clone()).context("Failed to build LLM client")?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Ok(Arc::new(LlmSummarizer::new(llm)))
        }
        (SummarizerBackend::Llm, None) => {
            anyhow::bail!("SUMMARIZER_BACKEND=llm requires ANTHROPIC_API_KEY to be set")
        }
        (SummarizerBackend::Extractive, _) => Ok(Arc::new(ExtractiveSummarizer::default())),
    }
}
