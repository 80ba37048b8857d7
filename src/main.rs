//! work-manager - kanban ticket board server
//!
//! This is the main entry point for the work-manager server binary.
//! It parses command-line arguments, layers them over the configuration,
//! and serves the board API (plus the static board UI, when present).

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use work_manager::api::build_router;
use work_manager::config::ServerConfig;
use work_manager::service::TicketService;
use work_manager::storage::JsonFileStore;

/// Command-line arguments for the board server
#[derive(Parser)]
#[command(
    name = "work-manager",
    version,
    about = "Kanban-style ticket board with a JSON-backed REST API"
)]
struct Cli {
    /// Path to a configuration file (defaults to ./work-manager.toml when present)
    #[arg(short, long, env = "WORK_MANAGER_CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on (overrides configuration)
    #[arg(short, long)]
    port: Option<u16>,

    /// Path of the JSON board file (overrides configuration)
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut config = ServerConfig::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(data_file) = cli.data_file {
        config.data_file = data_file;
    }

    let service = TicketService::new(JsonFileStore::new(&config.data_file));
    let app = build_router(service, config.public_dir.as_deref());

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    tracing::info!(
        addr = %listener.local_addr()?,
        data_file = %config.data_file.display(),
        "work-manager listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
