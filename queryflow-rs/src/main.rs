//! CLI driver for the QueryFlow mock services
//!
//! # Usage
//!
//! ```bash
//! queryflow search budget
//! queryflow chat "what is our budget"
//! queryflow files upload report.pdf --size 204800
//! queryflow --config queryflow.toml history list --mode chat
//! ```

use clap::{Parser, Subcommand};
use queryflow_rs::chat::Conversation;
use queryflow_rs::config::LoggingConfig;
use queryflow_rs::files::UploadRequest;
use queryflow_rs::history::HistoryEntry;
use queryflow_rs::search::QueryMode;
use queryflow_rs::{QueryFlow, QueryFlowConfig};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "queryflow")]
#[command(about = "Drive the QueryFlow mock services", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip simulated latency
    #[arg(long)]
    instant: bool,

    /// Fixed random seed
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search fixture documents
    Search {
        /// Free-text query
        query: String,
    },
    /// Ask the mock assistant; several messages form one conversation
    Chat {
        /// Messages, sent in order
        #[arg(required = true)]
        messages: Vec<String>,
    },
    /// Manage uploaded files
    Files {
        #[command(subcommand)]
        command: FileCommands,
    },
    /// Show or clear history
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Show current settings
    Settings,
}

#[derive(Subcommand)]
enum FileCommands {
    /// List files
    List,
    /// Upload a file description
    Upload {
        /// File name, extension decides the type
        name: String,
        /// Size in bytes
        #[arg(long, default_value_t = 1024)]
        size: u64,
        /// MIME type
        #[arg(long, default_value = "application/octet-stream")]
        mime_type: String,
    },
    /// Delete a file by id
    Delete { id: u64 },
}

#[derive(Subcommand)]
enum HistoryCommands {
    /// List history entries
    List {
        /// Only "search" or "chat"
        #[arg(long)]
        mode: Option<QueryMode>,
    },
    /// Remove every history entry
    Clear,
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.level.clone().into());
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = QueryFlowConfig::load(cli.config.as_deref())?;
    if cli.instant {
        config.latency.enabled = false;
    }
    if cli.seed.is_some() {
        config.random.seed = cli.seed;
    }

    init_logging(&config.logging);
    info!("Starting queryflow v{}", env!("CARGO_PKG_VERSION"));

    let session = QueryFlow::new(config)?;

    match cli.command {
        Commands::Search { query } => {
            let submission = session.submit(&query, QueryMode::Search, &[]).await?;
            print_json(&submission)?;
        }
        Commands::Chat { messages } => {
            let engine = session.chat_engine();
            let mut conversation = Conversation::new();
            for message in &messages {
                if conversation.ask(engine.as_ref(), message).await?.is_none() {
                    warn!("Skipping blank message");
                }
            }
            print_json(&conversation)?;
        }
        Commands::Files { command } => match command {
            FileCommands::List => print_json(&session.files.list().await)?,
            FileCommands::Upload {
                name,
                size,
                mime_type,
            } => {
                let record = session
                    .files
                    .upload(UploadRequest::new(name, size, mime_type))
                    .await?;
                print_json(&record)?;
            }
            FileCommands::Delete { id } => {
                session.files.delete(id).await?;
                println!("Deleted file {}", id);
            }
        },
        Commands::History { command } => match command {
            HistoryCommands::List { mode } => {
                let entries: Vec<HistoryEntry> = match mode {
                    Some(mode) => session.history.list_by_mode(mode).await,
                    None => session.history.list().await,
                };
                print_json(&entries)?;
            }
            HistoryCommands::Clear => {
                session.history.clear_all().await;
                println!("History cleared");
            }
        },
        Commands::Settings => print_json(&session.settings.get().await)?,
    }

    Ok(())
}
