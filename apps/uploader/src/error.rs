use thiserror::Error;

/// Errors raised by the uploader's adapters.
///
/// None of these ever reach the output container directly: the handler turns
/// every failure of a submission into a rendered `Outcome::Failure`.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Failed to read selected file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Failed to write output to {target}: {source}")]
    Output {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
#[error("Failed to render output: {0}")]
pub struct RenderError(#[from] pub askama::Error);
