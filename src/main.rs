//! SocialHub Server
//!
//! Main entry point that wires all crates together and starts the server.

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use socialhub_core::config::{AppConfig, LogFormat};
use socialhub_database::connection::DatabasePool;
use socialhub_database::migration::run_migrations;

#[tokio::main]
async fn main() {
    let env = std::env::var("SOCIALHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {:#}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        LogFormat::Pretty => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> anyhow::Result<()> {
    tracing::info!("Starting SocialHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database)
        .await
        .context("Database connection failed")?;

    if config.database.run_migrations {
        tracing::info!("Running database migrations...");
        run_migrations(db.pool())
            .await
            .context("Migration failed")?;
        tracing::info!("Database migrations complete");
    }

    // ── Step 2: Build and start HTTP server ──────────────────────
    tracing::info!(
        "Starting HTTP server on {}:{}...",
        config.server.host,
        config.server.port
    );
    socialhub_api::run_server(config, db)
        .await
        .context("HTTP server failed")?;

    Ok(())
}
