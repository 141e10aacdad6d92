//! Batch admission control.
//!
//! # Responsibilities
//! - Cap the number of batches being processed concurrently, process-wide
//! - Queue excess requests until a slot frees up (no timeout, no priority)
//! - Guarantee slot release on every exit path via RAII tickets
//!
//! # Design Decisions
//! - The gate bounds batches, not URLs: a saturated gate delays whole
//!   requests instead of trickling partial fan-outs
//! - Capacity is injected, never global, so tests can build small gates

use std::sync::Arc;
use tokio::sync::Semaphore;

/// A fixed-capacity gate bounding concurrent batch processing.
///
/// Uses a semaphore to enforce the configured capacity. When the limit is
/// reached, `acquire` waits until a ticket is returned. Permit queueing is
/// FIFO per the underlying semaphore.
pub struct AdmissionGate {
    /// Ticket pool.
    permits: Arc<Semaphore>,
    /// Configured capacity.
    capacity: usize,
}

impl AdmissionGate {
    /// Create a gate with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    /// Acquire a ticket, waiting if the gate is saturated.
    ///
    /// Acquisition cannot fail; it can only delay. The returned ticket
    /// must be held for the batch's entire processing.
    pub async fn acquire(&self) -> AdmissionTicket {
        let permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .expect("Semaphore closed unexpectedly");

        tracing::debug!(
            available_tickets = self.permits.available_permits(),
            "Batch admitted"
        );

        AdmissionTicket { _permit: permit }
    }

    /// Get current available tickets.
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Get configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// A ticket representing one admitted batch.
///
/// When dropped, the slot is returned to the pool. This holds even if the
/// batch handler panics or returns early.
#[derive(Debug)]
pub struct AdmissionTicket {
    _permit: tokio::sync::OwnedSemaphorePermit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn acquire_up_to_capacity() {
        let gate = AdmissionGate::new(2);
        assert_eq!(gate.available(), 2);

        let t1 = gate.acquire().await;
        let _t2 = gate.acquire().await;
        assert_eq!(gate.available(), 0);

        drop(t1);
        assert_eq!(gate.available(), 1);
    }

    #[tokio::test]
    async fn saturated_gate_blocks_next_acquire() {
        let gate = Arc::new(AdmissionGate::new(1));
        let held = gate.acquire().await;

        let waiter = {
            let gate = gate.clone();
            tokio::spawn(async move {
                let _t = gate.acquire().await;
            })
        };

        // The waiter cannot get past the gate while the ticket is held.
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!waiter.is_finished());

        drop(held);
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should be admitted after release")
            .unwrap();
    }

    #[tokio::test]
    async fn ticket_released_on_panic() {
        let gate = Arc::new(AdmissionGate::new(1));

        let panicking = {
            let gate = gate.clone();
            tokio::spawn(async move {
                let _t = gate.acquire().await;
                panic!("handler died");
            })
        };
        let _ = panicking.await;

        assert_eq!(gate.available(), 1);
    }
}
