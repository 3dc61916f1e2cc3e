use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_uploader::config::UploaderConfig;
use resume_uploader::page::{
    HtmlFileContainer, OutputContainer, StderrNotifier, StdoutContainer,
};
use resume_uploader::transport::HttpTransport;
use resume_uploader::{SelectedFile, UploadHandler};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok(); // load .env if present; ignore if missing
    let config = UploaderConfig::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("resume_uploader=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let timeout = config.timeout();
    info!(
        "Summarization service: {} (timeout: {timeout:?})",
        config.endpoint
    );

    let transport = Arc::new(HttpTransport::new(&config.endpoint, timeout)?);
    let container: Arc<dyn OutputContainer> = match &config.output {
        Some(path) => Arc::new(HtmlFileContainer::new(path)),
        None => Arc::new(StdoutContainer),
    };
    let handler = UploadHandler::new(transport, container, Arc::new(StderrNotifier));

    let selection = match &config.file {
        Some(path) => Some(SelectedFile::read(path).await?),
        None => None,
    };

    let report = handler.submit(selection).await;
    Ok(ExitCode::from(report.exit_status()))
}
