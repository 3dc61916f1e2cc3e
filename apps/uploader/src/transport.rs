use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::UploadError;
use crate::request::{summarize_url, UploadRequest};
use crate::response::{ServerReply, TransportFailure};

/// Carries one upload to the summarization service and hands back the raw
/// reply. Implementations never retry.
#[async_trait]
pub trait SummarizeTransport: Send + Sync {
    async fn send(&self, request: UploadRequest) -> Result<ServerReply, TransportFailure>;
}

/// reqwest-backed transport: `POST {base_url}/summarize` with a multipart body.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    /// `timeout = None` leaves the request unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, UploadError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            url: summarize_url(base_url),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SummarizeTransport for HttpTransport {
    async fn send(&self, request: UploadRequest) -> Result<ServerReply, TransportFailure> {
        debug!(
            "Uploading {} ({} bytes) to {}",
            request.file_name(),
            request.bytes().len(),
            self.url
        );

        let response = self
            .client
            .post(&self.url)
            .multipart(request.into_form())
            .send()
            .await
            .map_err(into_failure)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(into_failure)?;

        debug!("Summarization service answered {status} ({} bytes)", body.len());
        Ok(ServerReply { status, body })
    }
}

fn into_failure(e: reqwest::Error) -> TransportFailure {
    if e.is_timeout() {
        TransportFailure::timed_out(e.to_string())
    } else {
        TransportFailure::unreachable(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::SelectedFile;
    use crate::response::TransportFailureKind;

    fn sample_request() -> UploadRequest {
        UploadRequest::new(SelectedFile::new("cv.pdf", &b"%PDF-1.4"[..]))
    }

    #[test]
    fn test_url_is_joined() {
        let t = HttpTransport::new("http://127.0.0.1:5000/", None).unwrap();
        assert_eq!(t.url(), "http://127.0.0.1:5000/summarize");
    }

    #[tokio::test]
    async fn test_refused_connection_is_unreachable() {
        // Grab a free port, then close it so nothing is listening.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let t = HttpTransport::new(&format!("http://{addr}"), None).unwrap();
        let failure = t.send(sample_request()).await.unwrap_err();
        assert_eq!(failure.kind, TransportFailureKind::Unreachable);
        assert!(!failure.message.is_empty());
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept and hold connections without ever answering.
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let t = HttpTransport::new(
            &format!("http://{addr}"),
            Some(Duration::from_millis(200)),
        )
        .unwrap();
        let failure = t.send(sample_request()).await.unwrap_err();
        assert_eq!(failure.kind, TransportFailureKind::TimedOut);
    }
}
