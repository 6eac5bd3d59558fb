//! Admission gate bounding concurrently executing requests.
//!
//! # Responsibilities
//! - Hold `concurrency_limit` execution slots
//! - Make tasks wait for a free slot before executing
//! - Release the slot when the holder finishes, panics or is dropped

use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// A counting gate that limits concurrent executions.
///
/// Uses a semaphore to enforce the limit. When every slot is taken, `admit`
/// waits until a slot becomes available. Tokio's semaphore is fair, so waiting
/// tasks are admitted in arrival order.
#[derive(Debug, Clone)]
pub struct AdmissionGate {
    slots: Arc<Semaphore>,
    limit: usize,
}

impl AdmissionGate {
    pub fn new(limit: usize) -> Self {
        Self {
            slots: Arc::new(Semaphore::new(limit)),
            limit,
        }
    }

    /// Wait for a free slot.
    ///
    /// The returned permit must be held for as long as the request executes.
    pub async fn admit(&self) -> AdmissionPermit {
        // The gate never closes its semaphore.
        let permit = self
            .slots
            .clone()
            .acquire_owned()
            .await
            .expect("admission gate closed unexpectedly");

        tracing::trace!(available = self.slots.available_permits(), "Slot acquired");

        AdmissionPermit { _permit: permit }
    }

    /// Number of slots currently taken.
    pub fn in_flight(&self) -> usize {
        self.limit - self.slots.available_permits()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

/// A held execution slot.
///
/// When dropped, the slot is released back to the gate.
#[derive(Debug)]
pub struct AdmissionPermit {
    _permit: OwnedSemaphorePermit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn permits_track_in_flight() {
        let gate = AdmissionGate::new(2);
        assert_eq!(gate.in_flight(), 0);

        let p1 = gate.admit().await;
        let p2 = gate.admit().await;
        assert_eq!(gate.in_flight(), 2);

        drop(p1);
        assert_eq!(gate.in_flight(), 1);
        drop(p2);
        assert_eq!(gate.in_flight(), 0);
    }

    #[tokio::test]
    async fn waits_when_full() {
        let gate = AdmissionGate::new(1);
        let held = gate.admit().await;

        let blocked = tokio::time::timeout(Duration::from_millis(50), gate.admit()).await;
        assert!(blocked.is_err(), "second admit should wait while the slot is held");

        drop(held);
        let admitted = tokio::time::timeout(Duration::from_millis(500), gate.admit()).await;
        assert!(admitted.is_ok());
    }

    #[tokio::test]
    async fn slot_released_when_holder_panics() {
        let gate = AdmissionGate::new(1);
        let permit = gate.admit().await;

        let handle = tokio::spawn(async move {
            let _permit = permit;
            panic!("executor blew up");
        });
        assert!(handle.await.is_err());

        assert_eq!(gate.in_flight(), 0);
    }
}
