use std::fmt;

use serde::{Deserialize, Serialize};

use super::PendingAttachment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn display_name(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Assistant => "BarangAI",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message in the conversation. Turns are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    sender: Sender,
    content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<PendingAttachment>,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>, attachments: Vec<PendingAttachment>) -> Self {
        Self {
            sender: Sender::User,
            content: content.into(),
            attachments,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            content: content.into(),
            attachments: Vec::new(),
        }
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn attachments(&self) -> &[PendingAttachment] {
        &self.attachments
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn is_assistant(&self) -> bool {
        self.sender == Sender::Assistant
    }
}

impl fmt::Display for ChatTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.sender.display_name(), self.content)?;
        for attachment in &self.attachments {
            write!(f, "\n  [attachment] {}", attachment.summary())?;
        }
        Ok(())
    }
}
