//! Submission core — decides what a form submission should do, without
//! touching the network or the page.

use std::path::Path;

use bytes::Bytes;

use crate::error::UploadError;
use crate::request::UploadRequest;

/// Notice shown when the form is submitted with an empty file input.
pub const NO_FILE_NOTICE: &str = "Please select a file first.";

/// A file picked by the user: an opaque blob plus its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

impl SelectedFile {
    /// Reads a file from disk the way a file picker hands it over: the
    /// whole content plus the last path component as its name.
    pub async fn read(path: &Path) -> Result<Self, UploadError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| UploadError::ReadFile {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self::new(file_name_for(path), bytes))
    }
}

/// Name sent with the upload. Falls back to `resume` when the path has no
/// UTF-8 final component (e.g. `..` or `/`).
pub fn file_name_for(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("resume")
        .to_string()
}

/// Current state of the file input. `None` means nothing was chosen.
pub type FileSelection = Option<SelectedFile>;

/// What a submission asks the adapters to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a blocking notice and stop. No request is issued.
    Notify(String),
    /// Send this request and render whatever comes back.
    Request(UploadRequest),
}

/// Entry point of the submission core.
pub fn on_submit(selection: FileSelection) -> Effect {
    match selection {
        None => Effect::Notify(NO_FILE_NOTICE.to_string()),
        Some(file) => Effect::Request(UploadRequest::new(file)),
    }
}
