//! craftpad-preview: resource lifecycle for assembled preview documents.
//!
//! A [`PreviewSession`] wraps an assembled document in a revocable
//! [`PreviewLocator`] that the sandboxed render host loads as its document
//! source, and guarantees at most one live locator per session. The
//! [`RegenerateDebouncer`] coalesces bursts of editor changes into a single
//! regeneration roughly one second after the last keystroke.

pub mod config;
pub mod debounce;
pub mod error;
pub mod host;
pub mod session;

pub use config::PreviewConfig;
pub use debounce::RegenerateDebouncer;
pub use error::{PreviewError, Result};
pub use host::{InMemoryHost, LocatorId, ResourceHost};
pub use session::{PreviewLocator, PreviewSession, SessionState};
