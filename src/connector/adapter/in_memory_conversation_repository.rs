use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::application::ConversationRepository;
use crate::domain::{DomainError, PromptMessage};

/// Session histories held in process memory. Lost on restart.
pub struct InMemoryConversationRepository {
    sessions: Arc<RwLock<HashMap<String, Vec<PromptMessage>>>>,
}

impl InMemoryConversationRepository {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for InMemoryConversationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn append(&self, session_id: &str, message: PromptMessage) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        let history = sessions.entry(session_id.to_string()).or_default();
        history.push(message);
        debug!("Session {} now has {} messages", session_id, history.len());
        Ok(())
    }

    async fn recent(
        &self,
        session_id: &str,
        limit: usize,
    ) -> Result<Vec<PromptMessage>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .get(session_id)
            .map(|history| {
                let start = history.len().saturating_sub(limit);
                history[start..].to_vec()
            })
            .unwrap_or_default())
    }

    async fn count(&self, session_id: &str) -> Result<usize, DomainError> {
        Ok(self
            .sessions
            .read()
            .await
            .get(session_id)
            .map_or(0, Vec::len))
    }
}
