//! OS signal handling.
//!
//! # Responsibilities
//! - Register signal handlers (SIGINT, SIGTERM)
//! - Translate the first signal into a graceful shutdown
//! - Force termination on a repeated signal
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - No reload signal; config changes require a restart

use tokio::signal;

/// Resolve when an interrupt is requested (Ctrl+C or SIGTERM).
pub async fn wait_for_interrupt() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
