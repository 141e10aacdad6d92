//! Shutdown coordination for the gateway.

use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

/// Coordinator for graceful shutdown.
///
/// Provides a broadcast channel for long-running tasks and a root
/// cancellation scope for in-flight batches. Triggering shutdown cancels
/// the scope first so outstanding fetches stop fanning out while the
/// listener drains.
pub struct Shutdown {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
    /// Root scope; request scopes are children of it.
    scope: CancellationToken,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self {
            tx,
            scope: CancellationToken::new(),
        }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Get the root scope that in-flight work inherits from.
    pub fn scope(&self) -> CancellationToken {
        self.scope.clone()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        self.scope.cancel();
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn trigger_cancels_scope_and_notifies() {
        let shutdown = Shutdown::new();
        let mut rx = shutdown.subscribe();
        let child = shutdown.scope().child_token();

        shutdown.trigger();

        assert!(child.is_cancelled());
        rx.recv().await.unwrap();
    }
}
