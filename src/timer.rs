//! One-shot timers owned by a mounted page.
//!
//! Each timer is a spawned task that sleeps and then posts a `TimerEvent` back
//! to the main loop. The scheduler keeps the `JoinHandle` of every pending
//! timer; scheduling a kind again replaces (aborts) the previous timer of that
//! kind, and dropping the scheduler aborts everything still pending.

use crate::state::TransientKind;
use std::collections::HashMap;
use std::time::Duration;
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::debug;

/// Identity of one mounted page instance
pub type PageId = u64;

/// Posted to the main loop when a timer expires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    pub page: PageId,
    pub kind: TransientKind,
    pub generation: u64,
}

/// Cancellable one-shot timers for a single page
pub struct TimerScheduler {
    page: PageId,
    tx: mpsc::UnboundedSender<TimerEvent>,
    pending: HashMap<TransientKind, JoinHandle<()>>,
}

impl TimerScheduler {
    pub fn new(page: PageId, tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            page,
            tx,
            pending: HashMap::new(),
        }
    }

    /// Schedule `kind` to expire after `delay`, replacing any pending timer of that kind
    pub fn schedule(&mut self, kind: TransientKind, generation: u64, delay: Duration) {
        self.cancel(kind);
        debug!(
            "Scheduling {kind:?} timer for page {} (generation {generation}, {}ms)",
            self.page,
            delay.as_millis()
        );

        let tx = self.tx.clone();
        let event = TimerEvent {
            page: self.page,
            kind,
            generation,
        };
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver is gone only when the app is shutting down
            let _ = tx.send(event);
        });
        self.pending.insert(kind, handle);
    }

    /// Abort the pending timer of `kind`, if any
    pub fn cancel(&mut self, kind: TransientKind) {
        if let Some(handle) = self.pending.remove(&kind) {
            if !handle.is_finished() {
                debug!("Cancelling {kind:?} timer for page {}", self.page);
            }
            handle.abort();
        }
    }

    /// Abort every pending timer
    pub fn cancel_all(&mut self) {
        for (kind, handle) in self.pending.drain() {
            if !handle.is_finished() {
                debug!("Cancelling {kind:?} timer for page {}", self.page);
            }
            handle.abort();
        }
    }

    /// Number of timers that have not fired yet
    pub fn pending_count(&self) -> usize {
        self.pending.values().filter(|h| !h.is_finished()).count()
    }
}

impl Drop for TimerScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
