//! Keystroke debouncing
//!
//! A [`Debouncer`] owns at most one pending timer. Each pushed value cancels
//! the pending timer and schedules a new one; a timer that runs to completion
//! sends the settled form of its value on the channel returned by
//! [`Debouncer::new`]. Closing (or dropping) the debouncer cancels the pending
//! timer, so nothing is sent after the owner is torn down.
//!
//! Timers run as tokio tasks, so [`Debouncer::push`] must be called from
//! within a tokio runtime.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::search::ranker::settle;

#[derive(Debug)]
struct PendingTimer {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl PendingTimer {
    fn cancel(self) {
        self.token.cancel();
        self.handle.abort();
    }
}

/// Cancellable, restartable delay between raw input and a settled query
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    settled_tx: mpsc::UnboundedSender<String>,
    shutdown: CancellationToken,
    pending: Option<PendingTimer>,
}

impl Debouncer {
    /// Create a debouncer and the receiver its settled queries arrive on
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        let debouncer = Self {
            delay,
            settled_tx,
            shutdown: CancellationToken::new(),
            pending: None,
        };
        (debouncer, settled_rx)
    }

    /// Restart the timer with a new raw value
    pub fn push(&mut self, raw: impl Into<String>) {
        if self.shutdown.is_cancelled() {
            tracing::debug!("Ignoring input on a closed debouncer");
            return;
        }

        if self.cancel_pending() {
            tracing::trace!("Superseded pending debounce timer");
        }

        let raw = raw.into();
        let token = self.shutdown.child_token();
        let task_token = token.clone();
        let tx = self.settled_tx.clone();
        // deadline is fixed now, not when the task is first polled
        let timer = tokio::time::sleep(self.delay);

        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = task_token.cancelled() => {}
                _ = timer => {
                    let query = settle(&raw);
                    tracing::debug!("Debounce settled on {:?}", query);
                    // receiver gone means the owner is shutting down
                    let _ = tx.send(query);
                }
            }
        });

        self.pending = Some(PendingTimer { token, handle });
    }

    /// Cancel the pending timer, returning whether one was still running
    pub fn cancel_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(timer) => {
                let was_running = !timer.handle.is_finished();
                timer.cancel();
                was_running
            }
            None => false,
        }
    }

    /// Whether a timer is scheduled and has not fired yet
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|timer| !timer.handle.is_finished())
    }

    /// Cancel any pending timer and refuse further input
    pub fn close(&mut self) {
        if self.shutdown.is_cancelled() {
            return;
        }
        self.shutdown.cancel();
        if let Some(timer) = self.pending.take() {
            timer.cancel();
        }
        tracing::debug!("Debouncer closed");
    }

    pub fn is_closed(&self) -> bool {
        self.shutdown.is_cancelled()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.close();
    }
}
