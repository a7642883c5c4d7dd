//! Extraction error types

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no valid code structure found in model response")]
    NoValidStructureFound,

    #[error("response matched partially, missing required fields: {}", missing.join(", "))]
    PartialFieldsMissing { missing: Vec<String> },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
