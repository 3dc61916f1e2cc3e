use async_trait::async_trait;

use super::prompts::{summary_prompt, summary_system};
use super::{SummarizeError, Summarizer};
use crate::llm_client::LlmClient;

/// Abstractive summarizer backed by the LLM client.
pub struct LlmSummarizer {
    llm: LlmClient,
    system: String,
}

impl LlmSummarizer {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            system: summary_system(),
        }
    }
}

#[async_trait]
impl Summarizer for LlmSummarizer {
    async fn summarize_chunk(&self, chunk: &str) -> Result<String, SummarizeError> {
        let prompt = summary_prompt(chunk);
        Ok(self.llm.call_text(&prompt, &self.system).await?)
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::post, Json, Router};
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_chunk_is_sent_in_user_message() {
        let router = Router::new().route(
            "/v1/messages",
            post(|Json(body): Json<Value>| async move {
                let content = body["messages"][0]["content"].as_str().unwrap_or_default();
                let echoed = if content.contains("Kubernetes") {
                    "Platform engineer with Kubernetes experience."
                } else {
                    "Unknown."
                };
                Json(json!({
                    "content": [{ "type": "text", "text": echoed }],
                    "usage": { "input_tokens": 1, "output_tokens": 1 }
                }))
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let llm =
            LlmClient::with_url("test-key".to_string(), format!("http://{addr}/v1/messages"))
                .unwrap();
        let summarizer = LlmSummarizer::new(llm);

        let summary = summarizer
            .summarize_chunk("Ran Kubernetes clusters for 4 years")
            .await
            .unwrap();
        assert_eq!(summary, "Platform engineer with Kubernetes experience.");
        assert_eq!(summarizer.backend(), "llm");
    }
}
