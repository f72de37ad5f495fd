use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::CompletionService;
use crate::domain::{DomainError, PromptMessage};

/// Default target: Ollama running locally on its standard port.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
const CHAT_PATH: &str = "/api/chat";
const VERSION_PATH: &str = "/api/version";
const DEFAULT_MODEL: &str = "llama3:latest";
const TEMPERATURE: f32 = 0.7;
const NUM_PREDICT: u32 = 1200;

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: &'a [PromptMessage],
    stream: bool,
    options: ApiOptions,
}

#[derive(serde::Serialize)]
struct ApiOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    message: Option<ApiMessage>,
}

#[derive(Deserialize)]
struct ApiMessage {
    #[serde(default)]
    content: String,
}

/// [`CompletionService`] backed by a local Ollama server's chat endpoint.
///
/// Availability is checked with `GET /api/version` on a 3-second timeout so a
/// stopped Ollama is skipped quickly; the chat call itself allows 25 seconds.
///
/// ```text
/// OLLAMA_BASE_URL=http://localhost:11434
/// OLLAMA_MODEL=llama3:latest
/// ```
pub struct OllamaClient {
    client: reqwest::Client,
    /// Short-timeout client for the availability probe.
    probe_client: reqwest::Client,
    model: String,
    chat_url: String,
    version_url: String,
}

impl OllamaClient {
    pub fn new(model: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let trimmed = base.trim_end_matches('/');
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(25))
                .build()
                .unwrap_or_default(),
            probe_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(3))
                .build()
                .unwrap_or_default(),
            model: model.into(),
            chat_url: format!("{trimmed}{CHAT_PATH}"),
            version_url: format!("{trimmed}{VERSION_PATH}"),
        }
    }

    /// | Variable          | Default                  |
    /// |-------------------|--------------------------|
    /// | `OLLAMA_BASE_URL` | `http://localhost:11434` |
    /// | `OLLAMA_MODEL`    | `llama3:latest`          |
    pub fn from_env() -> Self {
        let base = std::env::var("OLLAMA_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string());
        let model =
            std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(model, base)
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionService for OllamaClient {
    fn source_name(&self) -> &str {
        "ollama"
    }

    async fn is_available(&self) -> bool {
        match self.probe_client.get(&self.version_url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Ollama probe failed: {e}");
                false
            }
        }
    }

    async fn complete(&self, messages: &[PromptMessage]) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            messages,
            stream: false,
            options: ApiOptions {
                temperature: TEMPERATURE,
                num_predict: NUM_PREDICT,
            },
        };

        let response = self
            .client
            .post(&self.chat_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::upstream("Ollama timeout after 25 seconds")
                } else {
                    DomainError::upstream(format!("Ollama connection error: {e}"))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Ollama returned {status}: {body}");
            return Err(DomainError::upstream(format!("Ollama returned {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::upstream(format!("Ollama: failed to parse response: {e}")))?;

        let text = api_response
            .message
            .map(|m| m.content.trim().to_string())
            .unwrap_or_default();
        if text.is_empty() {
            return Err(DomainError::upstream("Empty response from Ollama"));
        }

        Ok(text)
    }
}
