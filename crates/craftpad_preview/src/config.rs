//! Preview session configuration.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Quiet window the debouncer waits for before triggering a
    /// regeneration. Edits inside the window replace the pending trigger.
    pub debounce_window: Duration,
    /// How many times a failed materialize is retried before the session
    /// reports the preview unavailable.
    pub materialize_retries: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            debounce_window: Duration::from_secs(1),
            materialize_retries: 1,
        }
    }
}

impl PreviewConfig {
    pub fn with_debounce_window(mut self, window: Duration) -> Self {
        self.debounce_window = window;
        self
    }
}
