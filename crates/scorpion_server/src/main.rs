//! Scorpion content bridge binary.
//!
//! Serves lesson blocks from disk to the editor and runs the media generator
//! on request.

use anyhow::{Context, Result};
use clap::Parser;
use scorpion_server::{AppState, BridgeConfig, ConfigOverrides, create_router, init_tracing};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Scorpion content bridge", long_about = None)]
struct Args {
    /// Config file (default: ./scorpion.toml if present)
    #[arg(short, long, env = "SCORPION_CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Directory of hour folders containing block_<id> directories
    #[arg(long)]
    primary_root: Option<PathBuf>,

    /// Directory of generated block_<id> output
    #[arg(long)]
    secondary_root: Option<PathBuf>,

    /// Generator command line, e.g. "python tools/generate.py"
    #[arg(long, value_delimiter = ' ', num_args = 1..)]
    generator: Option<Vec<String>>,

    /// Kill the generator after this many seconds
    #[arg(long)]
    generator_timeout: Option<u64>,

    /// Address to listen on
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            primary_root: self.primary_root.clone(),
            secondary_root: self.secondary_root.clone(),
            generator_command: self.generator.clone(),
            generator_timeout_secs: self.generator_timeout,
            host: self.host.clone(),
            port: self.port,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    init_tracing(&args.log_level, args.json_logs)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let config = BridgeConfig::load(args.config.as_deref(), args.overrides())?;
    config.validate()?;

    let state = AppState::from_config(&config)?;
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        addr = %addr,
        primary_root = %config.primary_root().display(),
        secondary_root = ?config.secondary_root(),
        generator = %config.generator_command().join(" "),
        "Scorpion bridge listening"
    );

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Scorpion bridge stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
