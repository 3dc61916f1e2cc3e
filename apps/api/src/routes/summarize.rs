//! POST /summarize — resume upload in, summary out.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{extract_text, DocumentKind};
use crate::state::AppState;
use crate::summarize::summarize_document;

/// Name of the multipart field holding the resume.
pub const RESUME_FIELD: &str = "resume";

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

struct UploadedFile {
    file_name: String,
    bytes: Bytes,
}

/// POST /summarize
pub async fn handle_summarize(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SummaryResponse>, AppError> {
    let upload_id = Uuid::new_v4();
    let upload = read_resume(&mut multipart).await?.ok_or(AppError::NoFile)?;
    info!(
        %upload_id,
        file = %upload.file_name,
        bytes = upload.bytes.len(),
        "Resume received"
    );

    let kind =
        DocumentKind::from_file_name(&upload.file_name).ok_or(AppError::UnsupportedFormat)?;
    let text = extract_text(kind, upload.bytes).await?;
    if text.trim().is_empty() {
        return Err(AppError::NoText);
    }

    let summary = summarize_document(
        state.summarizer.as_ref(),
        &text,
        state.config.max_chunk_words,
    )
    .await?;

    info!(
        %upload_id,
        backend = state.summarizer.backend(),
        words = summary.split_whitespace().count(),
        "Resume summarized"
    );
    Ok(Json(SummaryResponse { summary }))
}

/// First `resume` field that carries a file name. A `resume` field sent as
/// plain form text does not count as an uploaded file.
async fn read_resume(multipart: &mut Multipart) -> Result<Option<UploadedFile>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let Some(file_name) = field.file_name().map(str::to_owned) else {
            continue;
        };
        let bytes = field.bytes().await?;
        return Ok(Some(UploadedFile { file_name, bytes }));
    }
    Ok(None)
}
