use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use barangai::cli::Commands;
use barangai::connector::api::{Container, ContainerConfig, Router};
use barangai::connector::server;

#[derive(Parser)]
#[command(name = "barangai")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Chat endpoint base URL (default: $BARANGAI_API_URL or http://localhost:8000)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Seed for offline reply selection, for reproducible sessions
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        api_url: cli.api_url,
        seed: cli.seed,
    });

    if let Commands::Serve { port, public } = cli.command {
        let host = if public {
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        } else {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        };
        info!("Starting backend on port {}", port);
        return server::serve(container.backend_state(), SocketAddr::new(host, port)).await;
    }

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn send_accepts_repeated_attachments() {
        let cli = Cli::try_parse_from([
            "barangai", "send", "hello", "--attach", "a.pdf", "--attach", "b.png",
        ])
        .unwrap();

        match cli.command {
            Commands::Send {
                message,
                context,
                attach,
            } => {
                assert_eq!(message, "hello");
                assert_eq!(context, "general");
                assert_eq!(attach.len(), 2);
            }
            _ => panic!("expected send"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["barangai", "chat", "--seed", "7", "--api-url", "http://x"])
            .unwrap();
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.api_url.as_deref(), Some("http://x"));
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["barangai", "serve"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve { port: 8000, public: false }));
    }
}
