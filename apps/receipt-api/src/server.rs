//! Server startup and graceful shutdown.

use tokio::net::TcpListener;
use tracing::info;

use crate::config::ApiConfig;
use crate::{build_router, AppState};

/// Binds the configured address and serves until Ctrl+C or SIGTERM.
pub async fn start_server(config: ApiConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;

    info!(
        %addr,
        max_body_bytes = config.max_body_bytes,
        timeout_secs = config.request_timeout_secs,
        "Starting receipt API server"
    );

    let app = build_router(AppState::new(config));

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(?e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(?e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
