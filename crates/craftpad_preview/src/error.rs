//! Preview session error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("resource host failed to materialize document: {0}")]
    HostFailed(String),
}

pub type Result<T> = std::result::Result<T, PreviewError>;
