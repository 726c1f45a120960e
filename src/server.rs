//! HTTP server initialization and runtime setup.

use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// Starts with an empty in-memory store; all mappings are lost when the
/// process exits. Shuts down gracefully on Ctrl+C.
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails, or the
/// server hits a runtime error.
pub async fn run(config: Config) -> Result<()> {
    let state = AppState::in_memory(config.base_url.clone());
    tracing::info!("Mapping store initialized (in-memory)");

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");
    tracing::info!("Short URLs use base {}", config.base_url);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
