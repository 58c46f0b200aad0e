//! Cross-context fan-out (best-effort, asynchronous).
//!
//! Models the browser's native storage-change notification: a write in one
//! context is delivered to every *other* context of the same origin, never
//! back to the writer, and is observed only when the receiving context next
//! drains its subscription. Same-context listeners exist precisely to cover
//! the writer's own gap (see `registry`).
//!
//! Delivery guarantees are deliberately weak:
//! - no ordering across writers
//! - no transactional coupling with the storage write itself
//! - a context that never drains simply never observes
//!
//! Consumers must therefore re-read the store on notification instead of
//! folding event payloads into local state.

use std::sync::{Mutex, mpsc};
use std::time::Duration;

use thiserror::Error;

use vetrina_core::ContextId;

#[derive(Debug, Error)]
pub enum PublishError {
    /// Publish failed due to internal lock poisoning.
    #[error("cross-context bus lock poisoned")]
    Poisoned,
}

/// A subscription held by one browsing context.
#[derive(Debug)]
pub struct Subscription<E> {
    receiver: mpsc::Receiver<E>,
}

impl<E> Subscription<E> {
    pub fn new(receiver: mpsc::Receiver<E>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<E, mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<E, mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Drain everything currently queued.
    pub fn drain(&self) -> Vec<E> {
        let mut out = Vec::new();
        while let Ok(event) = self.receiver.try_recv() {
            out.push(event);
        }
        out
    }
}

/// Fan-out bus keyed by browsing context.
#[derive(Debug)]
pub struct CrossContextBus<E> {
    subscribers: Mutex<Vec<(ContextId, mpsc::Sender<E>)>>,
}

impl<E> CrossContextBus<E> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E> Default for CrossContextBus<E> {
    fn default() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }
}

impl<E> CrossContextBus<E>
where
    E: Clone + Send + 'static,
{
    /// Publish to every context other than `origin`.
    ///
    /// The writer's own context is skipped: it was already notified
    /// synchronously. Dead subscribers are dropped while publishing.
    pub fn publish(&self, origin: ContextId, event: E) -> Result<(), PublishError> {
        let mut subs = self
            .subscribers
            .lock()
            .map_err(|_| PublishError::Poisoned)?;

        subs.retain(|(context, tx)| {
            if *context == origin {
                return true;
            }
            tx.send(event.clone()).is_ok()
        });

        Ok(())
    }

    /// Register `context` and return its subscription.
    pub fn subscribe(&self, context: ContextId) -> Subscription<E> {
        let (tx, rx) = mpsc::channel();

        // If the lock is poisoned, we still return a subscription;
        // it just won't receive messages until the process restarts.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push((context, tx));
        }

        Subscription::new(rx)
    }
}
