use async_trait::async_trait;

use crate::domain::{DomainError, PromptMessage};

/// Per-session message history kept by the backend.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    async fn append(&self, session_id: &str, message: PromptMessage) -> Result<(), DomainError>;

    /// The last `limit` messages of a session, oldest first.
    async fn recent(&self, session_id: &str, limit: usize)
        -> Result<Vec<PromptMessage>, DomainError>;

    async fn count(&self, session_id: &str) -> Result<usize, DomainError>;
}
