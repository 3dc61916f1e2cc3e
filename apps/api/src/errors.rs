use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractError;
use crate::summarize::SummarizeError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every response body has the flat shape `{ "error": "<message>" }`, which is
/// what upload clients read. Internal causes are logged, never sent.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No file uploaded")]
    NoFile,

    #[error("Unsupported file format")]
    UnsupportedFormat,

    #[error("Could not extract text from file.")]
    NoText,

    #[error("Invalid upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Summarization error: {0}")]
    Summarize(#[from] SummarizeError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NoFile | AppError::UnsupportedFormat | AppError::NoText => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Multipart(e) => {
                tracing::warn!("Rejected multipart body: {e}");
                (e.status(), e.body_text())
            }
            AppError::Extract(e) => {
                tracing::warn!("Extraction error: {e}");
                (
                    StatusCode::BAD_REQUEST,
                    AppError::NoText.to_string(),
                )
            }
            AppError::Summarize(e) => {
                tracing::error!("Summarization error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Summarization failed".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_no_file_body() {
        let (status, body) = body_of(AppError::NoFile).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "No file uploaded" }));
    }

    #[tokio::test]
    async fn test_extract_error_hides_cause() {
        let (status, body) = body_of(AppError::Extract(ExtractError::Pdf(
            "xref table broken".to_string(),
        )))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Could not extract text from file.");
    }

    #[tokio::test]
    async fn test_summarize_error_hides_cause() {
        let (status, body) = body_of(AppError::Summarize(SummarizeError::Llm(
            crate::llm_client::LlmError::Api {
                status: 401,
                message: "invalid x-api-key".to_string(),
            },
        )))
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Summarization failed");
    }
}
