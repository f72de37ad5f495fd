mod attachment;
mod chat_payload;
mod chat_turn;
mod prompt;
mod session;

pub use attachment::*;
pub use chat_payload::*;
pub use chat_turn::*;
pub use prompt::*;
pub use session::*;
