//! OS signal handling.

use crate::lifecycle::shutdown::Shutdown;

/// Waits for Ctrl+C, then triggers `shutdown`.
pub async fn wait_for_signal(shutdown: Shutdown) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Ctrl+C received, shutting down"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for Ctrl+C, shutting down"),
    }
    shutdown.trigger();
}
