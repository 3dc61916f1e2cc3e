use anyhow::{bail, Context, Result};

/// Which summarizer backs `POST /summarize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarizerBackend {
    Extractive,
    Llm,
}

/// Application configuration loaded from environment variables.
/// Fails at startup if a value is malformed or the LLM backend lacks a key.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub backend: SummarizerBackend,
    pub anthropic_api_key: Option<String>,
    pub max_chunk_words: usize,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let anthropic_api_key = std::env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        let backend = parse_backend(
            std::env::var("SUMMARIZER_BACKEND").ok().as_deref(),
            anthropic_api_key.is_some(),
        )?;

        Ok(Config {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            backend,
            anthropic_api_key,
            max_chunk_words: parse_positive("MAX_CHUNK_WORDS", 1000)?,
            max_upload_bytes: parse_positive("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset picks the LLM backend when a key is available, extractive otherwise.
fn parse_backend(value: Option<&str>, has_api_key: bool) -> Result<SummarizerBackend> {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") if has_api_key => Ok(SummarizerBackend::Llm),
        None | Some("") | Some("extractive") => Ok(SummarizerBackend::Extractive),
        Some("llm") if has_api_key => Ok(SummarizerBackend::Llm),
        Some("llm") => bail!("SUMMARIZER_BACKEND=llm requires ANTHROPIC_API_KEY to be set"),
        Some(other) => bail!("Unknown SUMMARIZER_BACKEND '{other}' (expected 'llm' or 'extractive')"),
    }
}

fn parse_positive(key: &str, default: usize) -> Result<usize> {
    let value = match std::env::var(key) {
        Ok(v) => v
            .parse::<usize>()
            .with_context(|| format!("{key} must be a positive integer"))?,
        Err(_) => default,
    };
    if value == 0 {
        bail!("{key} must be greater than zero");
    }
    Ok(value)
}
