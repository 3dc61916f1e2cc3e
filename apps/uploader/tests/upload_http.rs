//! End-to-end submissions against a stub summarization service.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::Multipart, extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::sync::Mutex;

use resume_uploader::page::{HtmlFileContainer, MemoryContainer, RecordingNotifier};
use resume_uploader::transport::HttpTransport;
use resume_uploader::{Outcome, SelectedFile, SubmitReport, UploadHandler};

#[derive(Debug, Clone)]
struct CapturedPart {
    name: Option<String>,
    file_name: Option<String>,
    bytes: Vec<u8>,
}

type Captured = Arc<Mutex<Vec<CapturedPart>>>;

async fn capture(
    State(captured): State<Captured>,
    mut multipart: Multipart,
) -> (StatusCode, Json<Value>) {
    let mut parts = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().map(str::to_owned);
        let file_name = field.file_name().map(str::to_owned);
        let bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        parts.push(CapturedPart {
            name,
            file_name,
            bytes,
        });
    }

    let reply = match parts.first().and_then(|p| p.file_name.clone()) {
        Some(name) if name.ends_with(".txt") => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Unsupported file format" })),
        ),
        _ => (
            StatusCode::OK,
            Json(json!({ "summary": "Experienced engineer." })),
        ),
    };
    captured.lock().await.extend(parts);
    reply
}

async fn spawn_stub() -> (SocketAddr, Captured) {
    let captured: Captured = Arc::default();
    let app = Router::new()
        .route("/summarize", post(capture))
        .with_state(captured.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, captured)
}

fn handler_for(addr: SocketAddr) -> (UploadHandler, Arc<MemoryContainer>, Arc<RecordingNotifier>) {
    let transport = Arc::new(HttpTransport::new(&format!("http://{addr}"), None).unwrap());
    let container = Arc::new(MemoryContainer::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let handler = UploadHandler::new(transport, container.clone(), notifier.clone());
    (handler, container, notifier)
}

#[tokio::test]
async fn test_request_has_exactly_one_resume_part() {
    let (addr, captured) = spawn_stub().await;
    let (handler, container, _) = handler_for(addr);
    let bytes: Vec<u8> = (0..=255u8).cycle().take(4096).collect();

    let report = handler
        .submit(Some(SelectedFile::new("resume.pdf", bytes.clone())))
        .await;

    assert_eq!(
        report,
        SubmitReport::Rendered(Outcome::Summary("Experienced engineer.".to_string()))
    );
    let parts = captured.lock().await;
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].name.as_deref(), Some("resume"));
    assert_eq!(parts[0].file_name.as_deref(), Some("resume.pdf"));
    assert_eq!(parts[0].bytes, bytes);
    assert_eq!(
        container.contents(),
        "<h2>Summary:</h2>\n<p>Experienced engineer.</p>"
    );
}

#[tokio::test]
async fn test_server_error_is_rendered() {
    let (addr, _) = spawn_stub().await;
    let (handler, container, _) = handler_for(addr);

    handler
        .submit(Some(SelectedFile::new("notes.txt", b"hello".to_vec())))
        .await;

    assert_eq!(
        container.contents(),
        r#"<p style="color: red;">Error: Unsupported file format</p>"#
    );
}

#[tokio::test]
async fn test_no_file_sends_nothing() {
    let (addr, captured) = spawn_stub().await;
    let (handler, container, notifier) = handler_for(addr);

    assert_eq!(handler.submit(None).await, SubmitReport::Notified);

    assert_eq!(notifier.messages().len(), 1);
    assert!(captured.lock().await.is_empty());
    assert_eq!(container.writes(), 0);
}

#[tokio::test]
async fn test_file_container_holds_latest_rendering() {
    let (addr, _) = spawn_stub().await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summary.html");
    let transport = Arc::new(HttpTransport::new(&format!("http://{addr}"), None).unwrap());
    let handler = UploadHandler::new(
        transport,
        Arc::new(HtmlFileContainer::new(&path)),
        Arc::new(RecordingNotifier::new()),
    );

    handler
        .submit(Some(SelectedFile::new("bad.txt", b"x".to_vec())))
        .await;
    handler
        .submit(Some(SelectedFile::new("good.pdf", b"%PDF".to_vec())))
        .await;

    let html = std::fs::read_to_string(&path).unwrap();
    assert_eq!(html, "<h2>Summary:</h2>\n<p>Experienced engineer.</p>");
}
