//! The Upload Handler: one submission in, one rendering write out.
//!
//! Each submission takes a generation token before it suspends on the
//! network. When the reply arrives, it is only rendered if no newer
//! submission has started in the meantime, so overlapping submissions can
//! no longer overwrite a newer result with an older one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::form::{on_submit, Effect, FileSelection};
use crate::page::{Notifier, OutputContainer};
use crate::render::render;
use crate::response::{interpret, Outcome, GENERIC_FAILURE};
use crate::transport::SummarizeTransport;

/// How a single submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReport {
    /// No file was selected; the user was notified and nothing was sent.
    Notified,
    /// The outcome was written to the output container.
    Rendered(Outcome),
    /// A newer submission started while this one was in flight; its outcome
    /// was dropped without touching the container.
    Superseded(Outcome),
    /// The outcome was rendered but the container could not be written.
    WriteFailed { outcome: Outcome, error: String },
}

impl SubmitReport {
    /// Process exit status for a command-line submission:
    /// 2 when no file was selected, 1 when nothing useful reached the
    /// output (a failure outcome or a failed write), 0 otherwise.
    pub fn exit_status(&self) -> u8 {
        match self {
            SubmitReport::Notified => 2,
            SubmitReport::Rendered(Outcome::Failure(_)) | SubmitReport::WriteFailed { .. } => 1,
            SubmitReport::Rendered(Outcome::Summary(_)) | SubmitReport::Superseded(_) => 0,
        }
    }
}

#[derive(Clone)]
pub struct UploadHandler {
    transport: Arc<dyn SummarizeTransport>,
    container: Arc<dyn OutputContainer>,
    notifier: Arc<dyn Notifier>,
    generation: Arc<AtomicU64>,
}

impl UploadHandler {
    pub fn new(
        transport: Arc<dyn SummarizeTransport>,
        container: Arc<dyn OutputContainer>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            transport,
            container,
            notifier,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn submit(&self, selection: FileSelection) -> SubmitReport {
        let request = match on_submit(selection) {
            Effect::Notify(message) => {
                warn!("Submission without a file");
                self.notifier.notify(&message);
                return SubmitReport::Notified;
            }
            Effect::Request(request) => request,
        };

        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!(token, file = request.file_name(), "Submitting resume");

        let outcome = interpret(self.transport.send(request).await);

        let latest = self.generation.load(Ordering::SeqCst);
        if token != latest {
            debug!(token, latest, "Dropping reply of a superseded submission");
            return SubmitReport::Superseded(outcome);
        }

        if let Err(e) = self.container.replace(markup_for(&outcome)) {
            error!(token, "{e}");
            return SubmitReport::WriteFailed {
                outcome,
                error: e.to_string(),
            };
        }
        if outcome.is_failure() {
            info!(token, "Submission ended in failure");
        } else {
            info!(token, "Submission rendered a summary");
        }
        SubmitReport::Rendered(outcome)
    }
}

/// Markup for an outcome. If rendering itself fails, the generic failure is
/// written instead so the container still receives exactly one write.
fn markup_for(outcome: &Outcome) -> String {
    match render(outcome) {
        Ok(markup) => markup,
        Err(e) => {
            error!("{e}");
            format!(r#"<p style="color: red;">Error: {GENERIC_FAILURE}</p>"#)
        }
    }
}
