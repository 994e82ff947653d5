//! Run-wide cancellation signal
//!
//! A `Cancellation` is created once per run and cloned into every task.
//! Cancelling any clone is observed by all of them, including tasks that are
//! already parked in `cancelled().await`.

use std::sync::Arc;
use tokio::sync::watch;

#[derive(Clone, Debug)]
pub struct Cancellation {
    tx: Arc<watch::Sender<bool>>,
}

impl Cancellation {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Flag the run as cancelled. Idempotent.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once `cancel` has been called on any clone.
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives as long as `self`, so this only returns once flagged
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for Cancellation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_new_is_not_cancelled() {
        let cancel = Cancellation::new();
        assert!(!cancel.is_cancelled());
    }

    #[test]
    fn test_cancel_is_visible_to_clones() {
        let cancel = Cancellation::new();
        let clone = cancel.clone();

        clone.cancel();
        clone.cancel();

        assert!(cancel.is_cancelled());
        assert!(clone.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_wakes_waiting_task() {
        let cancel = Cancellation::new();
        let waiter = {
            let cancel = cancel.clone();
            tokio::spawn(async move { cancel.cancelled().await })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!waiter.is_finished());

        cancel.cancel();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should wake after cancel")
            .unwrap();
    }

    #[tokio::test]
    async fn test_cancelled_returns_immediately_when_already_cancelled() {
        let cancel = Cancellation::new();
        cancel.cancel();

        tokio::time::timeout(Duration::from_millis(100), cancel.cancelled())
            .await
            .expect("already-cancelled signal should resolve at once");
    }
}
