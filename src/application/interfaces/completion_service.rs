use async_trait::async_trait;

use crate::domain::{DomainError, PromptMessage};

/// An upstream language model the backend can ask for a reply.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details so [`crate::application::AnswerChatUseCase`] can walk a list of
/// providers without knowing which HTTP API each one speaks.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Short identifier reported back to clients as `ai_source`.
    fn source_name(&self) -> &str;

    /// Cheap reachability check run before [`Self::complete`].
    async fn is_available(&self) -> bool {
        true
    }

    /// Send the system prompt and conversation and return the reply text.
    async fn complete(&self, messages: &[PromptMessage]) -> Result<String, DomainError>;
}
