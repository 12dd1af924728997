//! # Receipt API
//!
//! Binary entry point.
//!
//! ## Startup Sequence
//! 1. Load configuration from the environment
//! 2. Initialize tracing (`RUST_LOG`, else `LOG_LEVEL`)
//! 3. Build state with an in-memory store
//! 4. Serve HTTP until Ctrl+C / SIGTERM

use receipt_api::ApiConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!(port = config.port, log_level = %config.log_level, "Configuration loaded");

    receipt_api::start_server(config).await
}
