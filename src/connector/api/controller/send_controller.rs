use std::path::PathBuf;

use anyhow::Result;

use crate::application::ReplySource;
use crate::domain::{ChatTurn, PendingAttachment};

use super::super::Container;
use super::{format_turns, typing_indicator};

pub struct SendController<'a> {
    container: &'a Container,
}

impl<'a> SendController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn send(
        &self,
        message: String,
        context: String,
        attach: Vec<PathBuf>,
    ) -> Result<String> {
        let mut client = self.container.chat_client();
        client.set_context(context.clone());

        for path in &attach {
            client.attach(PendingAttachment::from_path(path)?);
        }

        let before = client.turns().len();
        let Some(payload) = client.submit(&message, &context) else {
            return Ok("Nothing to send: message is empty.".to_string());
        };

        let spinner = typing_indicator();
        let reply = client.request(payload).await;
        spinner.finish_and_clear();

        Ok(self.format_exchange(&client.turns()[before..], reply.source))
    }

    fn format_exchange(&self, turns: &[ChatTurn], source: ReplySource) -> String {
        let mut output = format_turns(turns);
        if source == ReplySource::Fallback {
            output.push_str("\n\n(canned reply: the chat endpoint returned an error)");
        }
        output
    }
}
