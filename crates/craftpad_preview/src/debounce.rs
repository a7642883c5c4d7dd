//! Edit debouncing: coalesce bursts of edits into one regeneration.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

/// Holds the pending regeneration timer. Each [`schedule`] call replaces any
/// pending timer, so only the last edit of a burst fires; cancellation is
/// implicit replacement, never an explicit abort of a running regeneration.
///
/// [`schedule`]: RegenerateDebouncer::schedule
pub struct RegenerateDebouncer {
    window: Duration,
    trigger_tx: mpsc::Sender<()>,
    pending: Option<JoinHandle<()>>,
}

impl RegenerateDebouncer {
    /// Returns the debouncer and the receiver the session driver listens on;
    /// one message arrives per settled burst.
    pub fn new(window: Duration) -> (Self, mpsc::Receiver<()>) {
        let (trigger_tx, trigger_rx) = mpsc::channel(1);
        (
            Self {
                window,
                trigger_tx,
                pending: None,
            },
            trigger_rx,
        )
    }

    /// Debouncer using the session's configured window.
    pub fn from_config(config: &crate::config::PreviewConfig) -> (Self, mpsc::Receiver<()>) {
        Self::new(config.debounce_window)
    }

    /// Note an edit: restart the quiet window.
    pub fn schedule(&mut self) {
        if let Some(pending) = self.pending.take() {
            trace!("replacing pending regeneration timer");
            pending.abort();
        }
        let tx = self.trigger_tx.clone();
        let window = self.window;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            // Receiver gone means the session is shutting down.
            let _ = tx.send(()).await;
        }));
    }

    /// Drop any pending trigger without firing it.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Drop for RegenerateDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::error::TryRecvError;

    #[tokio::test(start_paused = true)]
    async fn burst_of_edits_triggers_once() {
        let (mut debouncer, mut rx) = RegenerateDebouncer::new(Duration::from_secs(1));
        for _ in 0..5 {
            debouncer.schedule();
            tokio::task::yield_now().await;
            tokio::time::advance(Duration::from_millis(200)).await;
        }

        assert_eq!(rx.recv().await, Some(()));
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test(start_paused = true)]
    async fn separate_bursts_trigger_separately() {
        let (mut debouncer, mut rx) = RegenerateDebouncer::new(Duration::from_secs(1));

        debouncer.schedule();
        assert_eq!(rx.recv().await, Some(()));

        debouncer.schedule();
        assert_eq!(rx.recv().await, Some(()));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_the_pending_trigger() {
        let (mut debouncer, mut rx) = RegenerateDebouncer::new(Duration::from_secs(1));
        debouncer.schedule();
        tokio::task::yield_now().await;
        debouncer.cancel();

        tokio::time::advance(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }
}
