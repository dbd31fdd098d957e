//! `receipts` binary
//!
//! Runs the HTTP server by default; `explain` and `score` work offline.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use receipt_api::cli;
use receipt_api::config::ServiceConfig;
use receipt_api::tracing_setup::{TracingConfig, init_tracing};
use receipt_core::RuleEngine;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "receipts", version, about = "Receipt points service")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the listen host
    #[arg(long, global = true)]
    host: Option<String>,

    /// Override the listen port
    #[arg(long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Describe the points rules
    Explain,
    /// Score a receipt JSON file without starting the server
    Score { file: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let (config, source) = ServiceConfig::load(args.config.as_deref())?;
    let mut config = config.apply_env_overrides()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            init_tracing(&TracingConfig::from_logging(&config.logging))?;
            source.log();
            config.log_summary();
            start_server(&config).await
        }
        Command::Explain => {
            print!("{}", cli::explain(&RuleEngine::standard()));
            Ok(())
        }
        Command::Score { file } => {
            print!("{}", cli::score_file(&file)?);
            Ok(())
        }
    }
}

async fn start_server(config: &ServiceConfig) -> anyhow::Result<()> {
    let app = receipt_api::create_app(config)?;
    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(%addr, docs = config.docs.enabled, "Receipt points server started");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
}
