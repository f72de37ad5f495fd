use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::{ChatTransport, FallbackResponder, ReplySelector};
use crate::domain::{ChatRequest, ChatTurn, DomainError, PendingAttachment, SessionId};

pub const GREETING: &str = "Hello! I'm here to help you with digital tasks. You can ask questions, \
upload documents, or even take photos to get assistance. Choose a category and let me know how I can help!";

pub const OFFLINE_NOTICE: &str =
    "Note: Currently using offline mode. Backend server appears to be unavailable.";

/// Where the assistant's reply for a message came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    /// The chat endpoint answered.
    Server,
    /// The endpoint answered with an error status or unreadable body.
    Fallback,
    /// The endpoint could not be reached; an offline notice was appended too.
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub source: ReplySource,
}

/// Conversation state plus the request/fallback contract.
///
/// The client owns the turn log and the pending attachment buffer. A message
/// goes through [`ChatClient::submit`], which records the user turn and builds
/// the payload, then [`ChatClient::request`], which performs the single
/// outbound call and settles: it appends the assistant reply (server or
/// fallback), clears the attachments and releases the in-flight flag on every
/// path.
pub struct ChatClient {
    transport: Arc<dyn ChatTransport>,
    selector: Box<dyn ReplySelector>,
    fallback: FallbackResponder,
    session_id: SessionId,
    turns: Vec<ChatTurn>,
    attachments: Vec<PendingAttachment>,
    context: String,
    sending: bool,
}

impl ChatClient {
    pub fn new(
        transport: Arc<dyn ChatTransport>,
        selector: Box<dyn ReplySelector>,
        fallback: FallbackResponder,
    ) -> Self {
        Self::with_session(transport, selector, fallback, SessionId::generate())
    }

    pub fn with_session(
        transport: Arc<dyn ChatTransport>,
        selector: Box<dyn ReplySelector>,
        fallback: FallbackResponder,
        session_id: SessionId,
    ) -> Self {
        let context = fallback.default_category().to_string();
        info!("Chat session {} started", session_id);
        Self {
            transport,
            selector,
            fallback,
            session_id,
            turns: vec![ChatTurn::assistant(GREETING)],
            attachments: Vec::new(),
            context,
            sending: false,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn pending_attachments(&self) -> &[PendingAttachment] {
        &self.attachments
    }

    /// Context used when the caller does not pass one explicitly.
    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn set_context(&mut self, context: impl Into<String>) {
        self.context = context.into();
    }

    /// True between a successful `submit` and the settlement of its request.
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn attach(&mut self, attachment: PendingAttachment) {
        debug!("Attached {}", attachment.summary());
        self.attachments.push(attachment);
    }

    /// Drops every pending attachment with the given name. Returns how many
    /// were removed.
    pub fn remove_attachment(&mut self, name: &str) -> usize {
        let before = self.attachments.len();
        self.attachments.retain(|a| a.name() != name);
        before - self.attachments.len()
    }

    /// Resets the conversation to the greeting and drops pending attachments.
    pub fn clear(&mut self) {
        self.turns.clear();
        self.turns.push(ChatTurn::assistant(GREETING));
        self.attachments.clear();
        info!("Chat history cleared");
    }

    /// Records the user turn and returns the payload for [`Self::request`].
    ///
    /// Returns `None` without touching any state when the trimmed text is
    /// empty or a previous request has not settled yet.
    pub fn submit(&mut self, text: &str, context: &str) -> Option<ChatRequest> {
        let message = text.trim();
        if message.is_empty() {
            debug!("Ignoring empty message");
            return None;
        }
        if self.sending {
            warn!("A message is already being sent; ignoring new submission");
            return None;
        }

        self.turns
            .push(ChatTurn::user(message, self.attachments.clone()));
        self.sending = true;

        Some(ChatRequest::new(
            message,
            context,
            self.session_id.as_str(),
            &self.attachments,
        ))
    }

    /// Performs the one outbound call for a submitted payload and settles it.
    ///
    /// Failures never escape: a transport failure yields a fallback reply plus
    /// the offline notice, any other failure yields just the fallback reply.
    ///
    /// The attachment buffer and the in-flight flag are released even if the
    /// returned future is dropped before it completes.
    pub async fn request(&mut self, payload: ChatRequest) -> Reply {
        let _in_flight = InFlight {
            sending: &mut self.sending,
            attachments: &mut self.attachments,
        };
        let outcome = self.transport.send(&payload).await;

        match outcome {
            Ok(text) => {
                debug!("Received reply ({} chars)", text.len());
                self.turns.push(ChatTurn::assistant(text.clone()));
                Reply {
                    text,
                    source: ReplySource::Server,
                }
            }
            Err(e) => {
                warn!("Error sending message: {e}");
                let text = self
                    .fallback
                    .reply(&payload.context, self.selector.as_mut())
                    .to_string();
                self.turns.push(ChatTurn::assistant(text.clone()));

                let source = if is_connectivity_failure(&e) {
                    self.turns.push(ChatTurn::assistant(OFFLINE_NOTICE));
                    ReplySource::Offline
                } else {
                    ReplySource::Fallback
                };
                Reply { text, source }
            }
        }
    }

    /// `submit` followed by `request`. `None` means the message was rejected.
    pub async fn send(&mut self, text: &str, context: &str) -> Option<Reply> {
        let payload = self.submit(text, context)?;
        Some(self.request(payload).await)
    }

    /// Like [`Self::send`] using the client's current context.
    pub async fn send_in_context(&mut self, text: &str) -> Option<Reply> {
        let context = self.context.clone();
        self.send(text, &context).await
    }
}

fn is_connectivity_failure(error: &DomainError) -> bool {
    error.is_transport()
}

/// Settlement of one request: clears the attachments and releases the flag
/// when dropped.
struct InFlight<'a> {
    sending: &'a mut bool,
    attachments: &'a mut Vec<PendingAttachment>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.attachments.clear();
        *self.sending = false;
    }
}
