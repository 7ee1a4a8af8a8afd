//! Contact Manager - Main entry point
//!
//! Loads configuration, prepares the database and serves the web UI.

use anyhow::Result;
use contact_manager::{build_app, server, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over LOG_LEVEL
    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let app = build_app(&config)?;
    info!(
        "Database initialized: {}",
        config.database_path.display()
    );

    server::run_server(app, config.bind_addr).await?;

    info!("Contact manager shutdown complete");
    Ok(())
}
