//! State shared across all handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::application::AnswerChatUseCase;

#[derive(Clone)]
pub struct AppState {
    pub answer_chat: Arc<AnswerChatUseCase>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(answer_chat: AnswerChatUseCase) -> Self {
        Self {
            answer_chat: Arc::new(answer_chat),
            start_time: Instant::now(),
        }
    }
}
