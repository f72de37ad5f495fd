use std::sync::Arc;

use tracing::debug;

use crate::application::{AnswerChatUseCase, ChatClient, ChatTransport, FallbackResponder, ReplySelector};
use crate::connector::server::AppState;
use crate::connector::{
    HttpChatTransport, InMemoryConversationRepository, KeywordReplyWriter, OllamaClient,
    OpenAiCompatibleClient, RandomReplySelector, SeededReplySelector,
};

pub struct ContainerConfig {
    /// Chat endpoint base URL. Falls back to `BARANGAI_API_URL`, then
    /// `http://localhost:8000`.
    pub api_url: Option<String>,
    /// Seed for fallback reply selection. Random when absent.
    pub seed: Option<u64>,
}

pub struct Container {
    transport: Arc<dyn ChatTransport>,
    api_url: String,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let api_url = config
            .api_url
            .clone()
            .unwrap_or_else(HttpChatTransport::configured_base_url);
        debug!("Using chat endpoint at {}", api_url);

        Self {
            transport: Arc::new(HttpChatTransport::new(api_url.clone())),
            api_url,
            config,
        }
    }

    pub fn chat_client(&self) -> ChatClient {
        ChatClient::new(
            self.transport.clone(),
            self.reply_selector(),
            FallbackResponder::builtin(),
        )
    }

    fn reply_selector(&self) -> Box<dyn ReplySelector> {
        match self.config.seed {
            Some(seed) => {
                debug!("Using seeded reply selector ({})", seed);
                Box::new(SeededReplySelector::new(seed))
            }
            None => Box::new(RandomReplySelector::new()),
        }
    }

    /// Backend state with providers configured from the environment: Ollama
    /// first, then the OpenAI-compatible API when a key is present.
    pub fn backend_state(&self) -> AppState {
        let mut use_case = AnswerChatUseCase::new(
            Arc::new(InMemoryConversationRepository::new()),
            Arc::new(KeywordReplyWriter::new()),
        )
        .with_provider(Arc::new(OllamaClient::from_env()));

        if let Some(client) = OpenAiCompatibleClient::from_env() {
            use_case = use_case.with_provider(Arc::new(client));
        } else {
            debug!("DEEPSEEK_API_KEY not set; skipping OpenAI-compatible provider");
        }

        debug!("Completion providers: {:?}", use_case.provider_names());
        AppState::new(use_case)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}
