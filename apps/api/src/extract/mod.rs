// Text extraction for uploaded resumes.
// Everything works on in-memory bytes; uploads are never written to disk.
// Parsers are CPU-bound and run inside tokio::task::spawn_blocking.

pub mod docx;
pub mod pdf;

use std::path::Path;

use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX container error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("DOCX read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Extraction task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Document formats accepted by `/summarize`, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    /// `.doc` is routed here too; legacy binary files fail to open as a zip
    /// container and surface as an extraction error.
    Docx,
}

impl DocumentKind {
    /// Case-insensitive extension match. `None` means unsupported.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())?
            .to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "doc" | "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }
}

/// Extracts plain text from an uploaded document.
pub async fn extract_text(kind: DocumentKind, bytes: Bytes) -> Result<String, ExtractError> {
    tokio::task::spawn_blocking(move || match kind {
        DocumentKind::Pdf => pdf::extract_pdf_text(&bytes),
        DocumentKind::Docx => docx::extract_docx_text(&bytes),
    })
    .await?
}
