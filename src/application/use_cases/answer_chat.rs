use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};
use uuid::Uuid;

use crate::application::{CompletionService, ConversationRepository, ReplyWriter};
use crate::domain::{ChatRequest, ChatResponse, DomainError, PromptMessage};

/// How many history messages (including the new user message) go to the model.
const HISTORY_WINDOW: usize = 3;

pub const FALLBACK_SOURCE: &str = "fallback";
pub const ERROR_SOURCE: &str = "error";

const GENERAL_PROMPT: &str = "\
You are BarangAI, a helpful AI assistant for barangay officials.

When users ask you to DO something, actually do it: create the content they \
requested instead of giving advice about how to do it. Be specific and \
actionable. If you cannot do something technical (like sending files), explain \
what you CAN do and provide the content anyway.

Examples:
- \"make me a presentation about X\": create the presentation outline and content
- \"write a letter about Y\": write the actual letter
- \"create a formula for Z\": provide the exact formula
- \"compile to PDF and send\": explain you cannot send files, then provide the content ready for PDF

Be direct, use clear formatting, and offer alternatives when something is not possible.";

const EXCEL_PROMPT: &str = "\
You are an Excel expert. When asked for formulas or spreadsheets:
- Provide the actual formulas
- Give specific examples with cell references
- Create sample data if needed
- Explain how to implement";

const WORD_PROMPT: &str = "\
You help with documents. When asked to create documents:
- Write the actual document content
- Use proper formatting
- Include all necessary sections
- Make it ready to use";

const PRESENTATION_PROMPT: &str = "\
You create presentations. When asked for slides:
- Create the actual slide content
- Use bullet points and structure
- Include speaker notes if helpful
- Make it presentation-ready";

/// System prompt for a context; unknown contexts get the general prompt.
pub fn system_prompt(context: &str) -> &'static str {
    match context {
        "excel" => EXCEL_PROMPT,
        "word" => WORD_PROMPT,
        "presentation" => PRESENTATION_PROMPT,
        _ => GENERAL_PROMPT,
    }
}

/// Backend flow behind `POST /chat`.
///
/// Records the user message in the session history, asks each configured
/// provider in turn, and writes a local keyword-driven reply when none of them
/// answers. The endpoint always produces a reply for a well-formed request.
pub struct AnswerChatUseCase {
    conversations: Arc<dyn ConversationRepository>,
    providers: Vec<Arc<dyn CompletionService>>,
    fallback_writer: Arc<dyn ReplyWriter>,
}

impl AnswerChatUseCase {
    pub fn new(
        conversations: Arc<dyn ConversationRepository>,
        fallback_writer: Arc<dyn ReplyWriter>,
    ) -> Self {
        Self {
            conversations,
            providers: Vec::new(),
            fallback_writer,
        }
    }

    /// Append a provider to the chain. Providers are tried in insertion order.
    pub fn with_provider(mut self, provider: Arc<dyn CompletionService>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.source_name()).collect()
    }

    pub async fn execute(&self, request: ChatRequest) -> ChatResponse {
        let start_time = Instant::now();
        let session_id = request
            .session_id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let outcome = self.answer(&session_id, &request).await;
        match outcome {
            Ok((response, ai_source)) => ChatResponse {
                response,
                session_id: Some(session_id),
                context_used: Some(request.context),
                ai_source: Some(ai_source),
                processing_time: start_time.elapsed().as_secs_f64(),
            },
            Err(e) => {
                warn!(
                    "Error after {:.1}s: {e}",
                    start_time.elapsed().as_secs_f64()
                );
                ChatResponse {
                    response: self
                        .fallback_writer
                        .write(&request.context, &request.message),
                    session_id: Some(session_id),
                    context_used: Some(request.context),
                    ai_source: Some(ERROR_SOURCE.to_string()),
                    processing_time: start_time.elapsed().as_secs_f64(),
                }
            }
        }
    }

    async fn answer(
        &self,
        session_id: &str,
        request: &ChatRequest,
    ) -> Result<(String, String), DomainError> {
        if request.file_count() > 0 {
            info!(
                "Message in session {} carries {} attachment(s)",
                session_id,
                request.file_count()
            );
        }

        self.conversations
            .append(session_id, PromptMessage::user(&request.message))
            .await?;

        let mut messages = vec![PromptMessage::system(system_prompt(&request.context))];
        messages.extend(self.conversations.recent(session_id, HISTORY_WINDOW).await?);

        let (response, source) = match self.ask_providers(&messages).await {
            Some(answer) => answer,
            None => {
                info!("Using keyword fallback reply");
                (
                    self.fallback_writer
                        .write(&request.context, &request.message),
                    FALLBACK_SOURCE.to_string(),
                )
            }
        };

        self.conversations
            .append(session_id, PromptMessage::assistant(&response))
            .await?;

        Ok((response, source))
    }

    async fn ask_providers(&self, messages: &[PromptMessage]) -> Option<(String, String)> {
        for provider in &self.providers {
            let name = provider.source_name();
            if !provider.is_available().await {
                warn!("{name} is not available");
                continue;
            }

            let start_time = Instant::now();
            match provider.complete(messages).await {
                Ok(text) => {
                    info!(
                        "{name} responded in {:.1}s",
                        start_time.elapsed().as_secs_f64()
                    );
                    return Some((text, name.to_string()));
                }
                Err(e) => warn!("{name} failed: {e}"),
            }
        }
        None
    }
}
