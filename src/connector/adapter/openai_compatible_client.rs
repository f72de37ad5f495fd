use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::application::CompletionService;
use crate::domain::{DomainError, PromptMessage};

const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";
const COMPLETIONS_PATH: &str = "/chat/completions";
const DEFAULT_MODEL: &str = "deepseek-chat";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 1500;

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: &'a [PromptMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: PromptMessage,
}

/// [`CompletionService`] for OpenAI-compatible chat completion APIs
/// (DeepSeek by default).
///
/// **API key**: read from `DEEPSEEK_API_KEY`. Without a key the provider is
/// not constructed at all, see [`OpenAiCompatibleClient::from_env`].
pub struct OpenAiCompatibleClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    url: String,
    source_name: String,
}

impl OpenAiCompatibleClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            url,
            source_name: "deepseek_api".to_string(),
        }
    }

    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }

    /// - `DEEPSEEK_API_KEY`  — required; returns `None` when absent or empty
    /// - `DEEPSEEK_BASE_URL` — optional; defaults to `https://api.deepseek.com/v1`
    /// - `DEEPSEEK_MODEL`    — optional; defaults to `deepseek-chat`
    pub fn from_env() -> Option<Self> {
        let key = std::env::var("DEEPSEEK_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())?;
        let base = std::env::var("DEEPSEEK_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model =
            std::env::var("DEEPSEEK_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Some(Self::new(key, model, base))
    }
}

#[async_trait]
impl CompletionService for OpenAiCompatibleClient {
    fn source_name(&self) -> &str {
        &self.source_name
    }

    async fn complete(&self, messages: &[PromptMessage]) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::upstream(format!("{}: request failed: {e}", self.source_name)))?;

        let status = response.status();
        if status == reqwest::StatusCode::PAYMENT_REQUIRED {
            return Err(DomainError::upstream("API_INSUFFICIENT_BALANCE"));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{} returned {status}: {body}", self.source_name);
            return Err(DomainError::upstream(format!(
                "{} returned {status}",
                self.source_name
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::upstream(format!("{}: failed to parse response: {e}", self.source_name))
        })?;

        api_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| DomainError::upstream(format!("{}: no choices returned", self.source_name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_url() {
        let client = OpenAiCompatibleClient::new("key", "deepseek-chat", "https://api.deepseek.com/v1/");
        assert_eq!(client.url, "https://api.deepseek.com/v1/chat/completions");
        assert_eq!(client.source_name(), "deepseek_api");
    }

    #[test]
    fn test_parse_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Formula: =SUM(A1:A10)"}}]}"#;
        let parsed: ApiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Formula: =SUM(A1:A10)");
    }

    #[test]
    fn test_custom_source_name() {
        let client = OpenAiCompatibleClient::new("key", "gpt", "http://localhost:1234/v1")
            .with_source_name("local_openai");
        assert_eq!(client.source_name(), "local_openai");
    }
}
