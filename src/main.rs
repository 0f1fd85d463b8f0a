//! Dashboard server binary.
//!
//! Usage: wardview-server [CONFIG_PATH]
//! A missing config file runs with development defaults.

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use wardview::api;
use wardview::config::{self, AppConfig};
use wardview::db::sqlite::open_database;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("wardview.json"));
    let config = AppConfig::load(&config_path)?;

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    if config.require_auth && config.using_dev_secret() {
        tracing::warn!("token_secret is the built-in dev value; set a real secret for deployment");
    }

    // Create the schema up front so the first request doesn't pay for it.
    open_database(&config.database_path)?;

    let addr: SocketAddr = config.bind_addr.parse()?;
    let app = api::app_router(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
