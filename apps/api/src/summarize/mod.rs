//! Summarization — pluggable, trait-based summarizer applied chunk by chunk.
//!
//! Backends: `ExtractiveSummarizer` (pure-Rust, deterministic, no network)
//! and `LlmSummarizer` (via `llm_client`).
//!
//! `AppState` holds an `Arc<dyn Summarizer>`, picked at startup via config.

pub mod chunking;
pub mod extractive;
pub mod llm;
pub mod prompts;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::llm_client::LlmError;

pub use chunking::chunk_words;
pub use extractive::ExtractiveSummarizer;
pub use llm::LlmSummarizer;

/// Target length of each partial summary, in words.
pub const MIN_SUMMARY_WORDS: usize = 30;
pub const MAX_SUMMARY_WORDS: usize = 130;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Summarizer returned an empty summary")]
    Empty,
}

/// Implement this to swap backends without touching the route handler.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize_chunk(&self, chunk: &str) -> Result<String, SummarizeError>;

    /// Short backend label, for logs.
    fn backend(&self) -> &'static str;
}

/// Splits `text` into chunks of at most `max_words` words, summarizes each in
/// order, and joins the partial summaries with a single space.
pub async fn summarize_document(
    summarizer: &dyn Summarizer,
    text: &str,
    max_words: usize,
) -> Result<String, SummarizeError> {
    let chunks = chunk_words(text, max_words);
    debug!(
        "Summarizing {} chunk(s) with the {} backend",
        chunks.len(),
        summarizer.backend()
    );

    let mut partials = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        let summary = summarizer.summarize_chunk(chunk).await?;
        let summary = summary.trim();
        if summary.is_empty() {
            return Err(SummarizeError::Empty);
        }
        partials.push(summary.to_string());
    }
    Ok(partials.join(" "))
}
