mod answer_chat;
mod chat_client;
mod fallback_responder;

pub use answer_chat::*;
pub use chat_client::*;
pub use fallback_responder::*;
