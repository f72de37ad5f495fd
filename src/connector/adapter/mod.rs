mod http_chat_transport;
mod in_memory_conversation_repository;
mod keyword_reply_writer;
mod ollama_client;
mod openai_compatible_client;
mod reply_selectors;

pub use http_chat_transport::*;
pub use in_memory_conversation_repository::*;
pub use keyword_reply_writer::*;
pub use ollama_client::*;
pub use openai_compatible_client::*;
pub use reply_selectors::*;
