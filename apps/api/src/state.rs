use std::sync::Arc;

use crate::config::Config;
use crate::summarize::Summarizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable summarizer. Picked at startup via SUMMARIZER_BACKEND.
    pub summarizer: Arc<dyn Summarizer>,
    pub config: Config,
}
