//! Preview session: locator lifecycle over a resource host.

use craftpad_bundle::PreviewDocument;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::PreviewConfig;
use crate::error::{PreviewError, Result};
use crate::host::{LocatorId, ResourceHost};

/// Opaque handle to the in-memory resource backing a preview document.
/// Exclusively owned by one session; at most one live locator per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLocator {
    id: LocatorId,
    url: String,
}

impl PreviewLocator {
    fn new(id: LocatorId) -> Self {
        Self {
            id,
            url: format!("preview://{id}"),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The URL the sandboxed render host loads as its document source.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Whether the session is serving a current document or a stale one after a
/// persistent materialize failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Ready,
    /// Materialization kept failing; the previous good locator (if any) is
    /// still being served and the UI shows a non-fatal banner.
    Unavailable,
}

/// Governs the lifetime of one preview's backing resource.
pub struct PreviewSession<H: ResourceHost> {
    host: H,
    config: PreviewConfig,
    current: Option<PreviewLocator>,
    state: SessionState,
}

impl<H: ResourceHost> PreviewSession<H> {
    pub fn new(host: H) -> Self {
        Self::with_config(host, PreviewConfig::default())
    }

    pub fn with_config(host: H, config: PreviewConfig) -> Self {
        Self {
            host,
            config,
            current: None,
            state: SessionState::default(),
        }
    }

    pub fn locator(&self) -> Option<&PreviewLocator> {
        self.current.as_ref()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Create a locator backing `doc` and make it current.
    ///
    /// A previously held locator is only released after the new resource
    /// exists, so a failing host never costs the last good preview. Failed
    /// creates are retried per [`PreviewConfig::materialize_retries`];
    /// persistent failure flags the session [`SessionState::Unavailable`].
    pub fn materialize(&mut self, doc: &PreviewDocument) -> Result<&PreviewLocator> {
        let id = self.create_with_retry(doc)?;
        if let Some(previous) = self.current.take() {
            self.host.revoke(previous.id);
        }
        Ok(self.install(id))
    }

    /// Release the current locator, then create a fresh one for `doc`.
    ///
    /// Release-then-create, never the reverse: the session never holds two
    /// backing resources, which bounds memory across rapid edit bursts. The
    /// call is not preemptible (single-threaded host), so the ordering alone
    /// upholds the one-live-locator invariant. A create failure after the
    /// release leaves the session without a locator; keeping the last good
    /// preview across host failures is [`materialize`]'s contract.
    ///
    /// [`materialize`]: PreviewSession::materialize
    pub fn regenerate(&mut self, doc: &PreviewDocument) -> Result<&PreviewLocator> {
        if let Some(previous) = self.current.take() {
            self.host.revoke(previous.id);
        }
        let id = self.create_with_retry(doc)?;
        Ok(self.install(id))
    }

    /// Release the current locator, if any. Idempotent.
    pub fn dispose(&mut self) {
        if let Some(previous) = self.current.take() {
            debug!(locator = %previous.url, "disposing preview locator");
            self.host.revoke(previous.id);
        }
        self.state = SessionState::Ready;
    }

    fn install(&mut self, id: LocatorId) -> &PreviewLocator {
        let locator = PreviewLocator::new(id);
        debug!(locator = %locator.url, "materialized preview document");
        self.state = SessionState::Ready;
        self.current.insert(locator)
    }

    fn create_with_retry(&mut self, doc: &PreviewDocument) -> Result<LocatorId> {
        let attempts = 1 + self.config.materialize_retries;
        let mut last_err = None;
        for attempt in 1..=attempts {
            match self.host.create(doc) {
                Ok(id) => return Ok(id),
                Err(PreviewError::HostFailed(message)) => {
                    warn!(attempt, attempts, %message, "materialize attempt failed");
                    last_err = Some(message);
                }
            }
        }
        self.state = SessionState::Unavailable;
        Err(PreviewError::HostFailed(
            last_err.unwrap_or_else(|| "unknown host failure".to_string()),
        ))
    }
}
