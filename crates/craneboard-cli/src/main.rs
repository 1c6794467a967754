#![deny(unsafe_code)]

//! Craneboard CLI — command-line control plane.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::sync::broadcast;
use tracing::info;
use tracing_subscriber::EnvFilter;

use craneboard_api::ShutdownSignal;
use craneboard_config::AppConfig;
use craneboard_core::ApiClient;
use craneboard_store::Store;

/// Craneboard — a job-board API server.
#[derive(Parser)]
#[command(name = "craneboard", version, about, long_about = None)]
struct Cli {
    /// Path to configuration file.
    #[arg(short, long, default_value = "craneboard.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Craneboard API server.
    Serve,

    /// Apply pending database migrations and exit.
    Migrate,

    /// Query a running server's health endpoint.
    Status,

    /// Validate and display configuration.
    Config {
        /// Show the resolved configuration.
        #[arg(long)]
        show: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up tracing subscriber with verbosity level
    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    match cli.command {
        Commands::Serve => cmd_serve(&cli.config).await?,
        Commands::Migrate => cmd_migrate(&cli.config).await?,
        Commands::Status => cmd_status(&cli.config).await?,
        Commands::Config { show } => cmd_config(&cli.config, show).await?,
    }

    Ok(())
}

async fn cmd_serve(config_path: &Path) -> Result<()> {
    let config = load_config(config_path).await?;
    info!("Starting Craneboard API server");

    let store = open_store(&config).await?;
    store.migrate().await?;

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl-C, shutting down");
            let _ = shutdown_tx.send(ShutdownSignal);
        }
    });

    craneboard_api::serve(&config, store, shutdown_rx).await?;
    Ok(())
}

async fn cmd_migrate(config_path: &Path) -> Result<()> {
    let config = load_config(config_path).await?;
    let store = open_store(&config).await?;
    store.migrate().await?;
    println!("Migrations applied to '{}'.", config.database.url);
    Ok(())
}

async fn cmd_status(config_path: &Path) -> Result<()> {
    let config = load_config(config_path).await?;
    let base_url = format!(
        "http://{}:{}",
        config.server.listen_addr, config.server.listen_port
    );

    let client = ApiClient::new(&base_url);
    let health = client.health().await?;
    println!("Server at {base_url} is up.");
    println!(
        "  version: {} ({}, {})",
        health.version, health.git_hash, health.build_profile
    );
    Ok(())
}

async fn cmd_config(config_path: &Path, show: bool) -> Result<()> {
    let config = load_config(config_path).await?;
    if show {
        let toml_str =
            toml::to_string_pretty(&config).map_err(|e| anyhow::anyhow!("TOML error: {e}"))?;
        println!("{toml_str}");
    } else {
        println!("Configuration at '{}' is valid.", config_path.display());
    }
    Ok(())
}

async fn open_store(config: &AppConfig) -> Result<Store> {
    let store = Store::connect(&config.database.url, config.database.max_connections).await?;
    Ok(store)
}

async fn load_config(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        AppConfig::load(path).await.map_err(|e| anyhow::anyhow!(e))
    } else {
        info!(path = %path.display(), "Config file not found, using defaults");
        Ok(AppConfig::default())
    }
}
