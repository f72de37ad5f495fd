pub mod chat_controller;
pub mod send_controller;

pub use chat_controller::ChatController;
pub use send_controller::SendController;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::ChatTurn;

/// Spinner shown while a request is in flight.
pub(crate) fn typing_indicator() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid spinner template"),
    );
    spinner.set_message("BarangAI is typing...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

pub(crate) fn format_turns(turns: &[ChatTurn]) -> String {
    turns
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}
