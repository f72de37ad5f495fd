mod chat_transport;
mod completion_service;
mod conversation_repository;
mod reply_selector;
mod reply_writer;

pub use chat_transport::*;
pub use completion_service::*;
pub use conversation_repository::*;
pub use reply_selector::*;
pub use reply_writer::*;
