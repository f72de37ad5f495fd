pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    AnswerChatUseCase, ChatClient, ChatTransport, CompletionService, ConversationRepository,
    FallbackResponder, Reply, ReplySelector, ReplySource, ReplyWriter, GREETING, OFFLINE_NOTICE,
};

pub use cli::Commands;

pub use connector::{
    FixedReplySelector, HttpChatTransport, InMemoryConversationRepository, KeywordReplyWriter,
    OllamaClient, OpenAiCompatibleClient, RandomReplySelector, SeededReplySelector,
};

pub use domain::{
    ChatRequest, ChatResponse, ChatTurn, DomainError, PendingAttachment, PromptMessage, Sender,
    SessionId,
};
