use async_trait::async_trait;
use tracing::{debug, warn};

use crate::application::ChatTransport;
use crate::domain::{ChatRequest, ChatResponse, DomainError};

/// Where the client looks for the backend when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
const CHAT_PATH: &str = "/chat";

/// [`ChatTransport`] that posts JSON to `{base}/chat` with reqwest.
///
/// No timeout and no retries are configured: a request settles when the
/// server answers or the connection fails.
///
/// **Base URL**: defaults to `http://localhost:8000`. Override with
/// `BARANGAI_API_URL` or pass one to [`HttpChatTransport::new`].
pub struct HttpChatTransport {
    client: reqwest::Client,
    /// Full endpoint URL (base + CHAT_PATH).
    url: String,
}

impl HttpChatTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), CHAT_PATH);
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub fn from_env() -> Self {
        Self::new(Self::configured_base_url())
    }

    /// Return the configured base URL (for logging purposes).
    pub fn configured_base_url() -> String {
        std::env::var("BARANGAI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn send(&self, request: &ChatRequest) -> Result<String, DomainError> {
        debug!(
            "POST {} (context={}, files={})",
            self.url,
            request.context,
            request.file_count()
        );

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("request to {} failed: {e}", self.url)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Chat endpoint returned {status}: {body}");
            return Err(DomainError::response(format!("HTTP error! status: {status}")));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DomainError::response(format!("failed to parse response: {e}")))?;

        if let Some(source) = chat_response.ai_source.as_deref() {
            debug!("Reply produced by {source}");
        }

        Ok(chat_response.response)
    }
}
