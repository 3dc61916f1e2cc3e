use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_SUMMARIZER_URL: &str = "http://127.0.0.1:5000";

/// Upload a resume to the summarization service and render the result.
///
/// Flags win over environment variables; environment variables (and a
/// `.env` file, loaded before parsing) win over defaults. An environment
/// value is only parsed when its flag is absent.
#[derive(Debug, Clone, Parser)]
#[command(name = "resume-uploader", version)]
pub struct UploaderConfig {
    /// Resume file to upload (.pdf, .doc, .docx).
    pub file: Option<PathBuf>,

    /// Base URL of the summarization service.
    #[arg(long, env = "SUMMARIZER_URL", default_value = DEFAULT_SUMMARIZER_URL)]
    pub endpoint: String,

    /// Request timeout in seconds; 0 waits forever.
    #[arg(long, env = "UPLOAD_TIMEOUT_SECS", default_value_t = 120)]
    pub timeout_secs: u64,

    /// Write the rendered HTML here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl UploaderConfig {
    pub fn timeout(&self) -> Option<Duration> {
        timeout_from_secs(self.timeout_secs)
    }
}

pub fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
