//! Shutdown signal shared by the server loop and the binary.

use tracing::{info, warn};

/// Resolves on Ctrl+C. If the handler cannot be installed the future never
/// resolves, leaving the server to run until killed.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(event = "shutdown_signal", "received Ctrl+C, shutting down"),
        Err(e) => {
            warn!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await
        }
    }
}
