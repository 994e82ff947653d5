//! Bounded handoff of added set indices from producers to deleters
//!
//! Many tasks publish and many tasks take. Any taker may receive any
//! published index, and every published index is received exactly once.

use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

use crate::error::{ChurnError, ChurnResult};

#[derive(Clone, Debug)]
pub struct HandoffQueue {
    capacity: usize,
    /// `None` once closed; in-flight publishes keep their own sender clone
    sender: Arc<Mutex<Option<mpsc::Sender<usize>>>>,
    receiver: Arc<Mutex<mpsc::Receiver<usize>>>,
}

impl HandoffQueue {
    /// Queue holding at most `capacity` indices (at least one)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, receiver) = mpsc::channel(capacity);
        Self {
            capacity,
            sender: Arc::new(Mutex::new(Some(sender))),
            receiver: Arc::new(Mutex::new(receiver)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Waits while the queue is full
    pub async fn publish(&self, index: usize) -> ChurnResult<()> {
        let sender = self.sender.lock().await.clone().ok_or(ChurnError::QueueClosed)?;
        sender.send(index).await.map_err(|_| ChurnError::QueueClosed)
    }

    /// Waits while the queue is empty. Fails once the queue is closed and
    /// everything published before that has been taken.
    pub async fn take(&self) -> ChurnResult<usize> {
        let mut receiver = self.receiver.lock().await;
        receiver.recv().await.ok_or(ChurnError::QueueClosed)
    }

    /// Refuse further publishes. Indices already queued can still be taken.
    pub async fn close(&self) {
        self.sender.lock().await.take();
    }
}
