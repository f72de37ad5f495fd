use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Topic steering offline replies (general, documents, spreadsheets, ...)
        #[arg(short, long, default_value = "general")]
        context: String,
    },

    /// Send a single message and print the reply
    Send {
        message: String,

        #[arg(short, long, default_value = "general")]
        context: String,

        /// Attach a file's metadata (repeatable)
        #[arg(short, long)]
        attach: Vec<PathBuf>,
    },

    /// Run the chat backend
    Serve {
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },
}
