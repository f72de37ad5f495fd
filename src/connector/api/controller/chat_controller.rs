use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::PendingAttachment;

use super::super::Container;
use super::{format_turns, typing_indicator};

const HELP: &str = "\
Commands:
  /attach <path>     queue a file's metadata for the next message
  /detach <name>     remove a queued file by name
  /files             list queued files
  /context <name>    switch topic (general, documents, spreadsheets, presentations, communication, internet)
  /clear             start over from the greeting
  /help              show this help
  /quit              leave the chat";

/// One line of REPL input.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplInput {
    Message(String),
    Attach(String),
    Detach(String),
    Files,
    Context(String),
    Clear,
    Help,
    Quit,
    Unknown(String),
}

impl ReplInput {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix('/') else {
            return ReplInput::Message(line.to_string());
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        match (name, arg.is_empty()) {
            ("attach", false) => ReplInput::Attach(arg.to_string()),
            ("detach", false) => ReplInput::Detach(arg.to_string()),
            ("context", false) => ReplInput::Context(arg.to_string()),
            ("files", _) => ReplInput::Files,
            ("clear", _) => ReplInput::Clear,
            ("help", _) => ReplInput::Help,
            ("quit" | "exit", _) => ReplInput::Quit,
            _ => ReplInput::Unknown(trimmed.to_string()),
        }
    }
}

pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn run(&self, context: String) -> Result<String> {
        let mut client = self.container.chat_client();
        client.set_context(context);

        println!("Session {} (endpoint {})", client.session_id(), self.container.api_url());
        println!("{}", format_turns(client.turns()));
        println!("\nType /help for commands.\n");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut sent = 0usize;

        while let Some(line) = lines.next_line().await? {
            match ReplInput::parse(&line) {
                ReplInput::Message(text) => {
                    if self.exchange(&mut client, &text).await {
                        sent += 1;
                    }
                }
                ReplInput::Attach(path) => match PendingAttachment::from_path(&path) {
                    Ok(attachment) => {
                        println!("Attached {}", attachment.summary());
                        client.attach(attachment);
                    }
                    Err(e) => println!("Could not attach {path}: {e}"),
                },
                ReplInput::Detach(name) => {
                    let removed = client.remove_attachment(&name);
                    println!("Removed {removed} file(s) named {name}");
                }
                ReplInput::Files => println!("{}", self.format_pending(&client)),
                ReplInput::Context(context) => {
                    println!("Context set to {context}");
                    client.set_context(context);
                }
                ReplInput::Clear => {
                    client.clear();
                    println!("{}", format_turns(client.turns()));
                }
                ReplInput::Help => println!("{HELP}"),
                ReplInput::Quit => break,
                ReplInput::Unknown(input) => println!("Unknown command: {input}. Type /help."),
            }
        }

        Ok(format!(
            "Session {} ended after {} message(s).",
            client.session_id(),
            sent
        ))
    }

    /// Sends one message and prints the turns it produced. Returns false when
    /// the message was rejected as empty.
    async fn exchange(&self, client: &mut ChatClient, text: &str) -> bool {
        let before = client.turns().len();
        let context = client.context().to_string();
        let Some(payload) = client.submit(text, &context) else {
            debug!("Skipped empty input");
            return false;
        };

        let spinner = typing_indicator();
        client.request(payload).await;
        spinner.finish_and_clear();

        println!("{}\n", format_turns(&client.turns()[before..]));
        true
    }

    fn format_pending(&self, client: &ChatClient) -> String {
        let pending = client.pending_attachments();
        if pending.is_empty() {
            return "No files attached.".to_string();
        }

        let mut output = "Attached files:\n".to_string();
        for attachment in pending {
            output.push_str(&format!("  {}\n", attachment.summary()));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_message() {
        assert_eq!(
            ReplInput::parse("How do I make a chart?"),
            ReplInput::Message("How do I make a chart?".to_string())
        );
    }

    #[test]
    fn test_commands_with_arguments() {
        assert_eq!(
            ReplInput::parse("/attach ./minutes.docx"),
            ReplInput::Attach("./minutes.docx".to_string())
        );
        assert_eq!(
            ReplInput::parse("/context   spreadsheets "),
            ReplInput::Context("spreadsheets".to_string())
        );
        assert_eq!(
            ReplInput::parse("/detach photo.jpg"),
            ReplInput::Detach("photo.jpg".to_string())
        );
    }

    #[test]
    fn test_bare_commands() {
        assert_eq!(ReplInput::parse("/files"), ReplInput::Files);
        assert_eq!(ReplInput::parse("/clear"), ReplInput::Clear);
        assert_eq!(ReplInput::parse("/help"), ReplInput::Help);
        assert_eq!(ReplInput::parse("/quit"), ReplInput::Quit);
        assert_eq!(ReplInput::parse("/exit"), ReplInput::Quit);
    }

    #[test]
    fn test_missing_argument_is_unknown() {
        assert_eq!(
            ReplInput::parse("/attach"),
            ReplInput::Unknown("/attach".to_string())
        );
        assert_eq!(
            ReplInput::parse("/dance now"),
            ReplInput::Unknown("/dance now".to_string())
        );
    }
}
