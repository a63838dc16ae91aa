mod config;
mod error;
mod logging;

#[cfg(feature = "chat")]
mod chat;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_config, resolve_log_file, resolve_settings, Overrides};

#[derive(Parser)]
#[command(name = "bh")]
#[command(about = "Borane chat widget with canned replies", long_about = None)]
struct Cli {
    /// Log file (defaults to the local data directory)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[cfg(feature = "chat")]
    /// Start an interactive chat session
    Chat {
        /// Delay before a canned reply appears, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for reply selection, for reproducible sessions
        #[arg(long)]
        seed: Option<u64>,

        /// Reply endpoint; only used when built with the backend feature
        #[arg(long)]
        backend_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        #[cfg(feature = "chat")]
        Command::Chat {
            delay_ms,
            seed,
            backend_url,
        } => {
            let config = load_config();
            logging::init(&resolve_log_file(&config, cli.log_file))?;

            let overrides = Overrides {
                delay_ms,
                seed,
                backend_url,
            };
            let settings = resolve_settings(config, overrides)?;

            chat::run(settings).await?;
        }
    }

    Ok(())
}
