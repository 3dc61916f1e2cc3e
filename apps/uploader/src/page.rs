//! Page adapters: where rendered markup goes and how the user is notified.
//!
//! An `OutputContainer` is always replaced in full, never appended to.

use std::io::Write;
use std::path::PathBuf;

use parking_lot::Mutex;
use tracing::info;

use crate::error::UploadError;

pub trait OutputContainer: Send + Sync {
    fn replace(&self, markup: String) -> Result<(), UploadError>;
}

/// Blocking, user-facing notice (the form's "alert").
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

// ────────────────────────────────────────────────────────────────────────────
// Containers
// ────────────────────────────────────────────────────────────────────────────

/// In-process container. Keeps the current markup and how often it was written.
#[derive(Default)]
pub struct MemoryContainer {
    inner: Mutex<MemoryContents>,
}

#[derive(Default)]
struct MemoryContents {
    markup: String,
    writes: usize,
}

impl MemoryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.inner.lock().markup.clone()
    }

    pub fn writes(&self) -> usize {
        self.inner.lock().writes
    }
}

impl OutputContainer for MemoryContainer {
    fn replace(&self, markup: String) -> Result<(), UploadError> {
        let mut inner = self.inner.lock();
        inner.markup = markup;
        inner.writes += 1;
        Ok(())
    }
}

/// Rewrites a whole HTML file on every replacement.
pub struct HtmlFileContainer {
    path: PathBuf,
}

impl HtmlFileContainer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OutputContainer for HtmlFileContainer {
    fn replace(&self, markup: String) -> Result<(), UploadError> {
        std::fs::write(&self.path, markup).map_err(|source| UploadError::Output {
            target: self.path.display().to_string(),
            source,
        })?;
        info!("Wrote output to {}", self.path.display());
        Ok(())
    }
}

pub struct StdoutContainer;

impl OutputContainer for StdoutContainer {
    fn replace(&self, markup: String) -> Result<(), UploadError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{markup}").map_err(|source| UploadError::Output {
            target: "stdout".to_string(),
            source,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Notifiers
// ────────────────────────────────────────────────────────────────────────────

pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Keeps every notice it receives. Useful when embedding the handler.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}
