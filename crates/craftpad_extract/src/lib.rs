//! craftpad-extract: recover structured code from raw model output.
//!
//! Models asked to emit `{html, css, js, description}` rarely return clean
//! JSON: fenced blocks, backtick-delimited values, raw control characters.
//! [`extract`] runs an ordered chain of parsing strategies over the raw text
//! and returns the first full success. The chain is pure, synchronous and
//! never panics; on total failure callers substitute
//! [`ExtractedCodeArtifact::placeholder`] and move on.

pub mod artifact;
pub mod error;
pub mod locate;
pub mod strategies;

pub use artifact::{ExtractedCodeArtifact, DEFAULT_DESCRIPTION};
pub use error::{ExtractError, Result};

use tracing::{debug, info};

/// Run the strategy chain over a raw model response.
///
/// First full success wins. Which strategy succeeded (and the recovered
/// field lengths) is logged for observability; it never affects the result.
pub fn extract(raw: &str) -> Result<ExtractedCodeArtifact> {
    for (name, strategy) in strategies::STRATEGIES.iter().copied() {
        match strategy(raw) {
            Some(artifact) => {
                info!(
                    strategy = name,
                    html_len = artifact.html.len(),
                    css_len = artifact.css.len(),
                    js_len = artifact.js.len(),
                    "extracted code artifact"
                );
                return Ok(artifact);
            }
            None => debug!(strategy = name, "strategy did not match"),
        }
    }

    let missing = strategies::field_regex::missing_required_fields(raw);
    if missing.len() < 3 && !missing.is_empty() {
        debug!(?missing, "partial extraction only");
        return Err(ExtractError::PartialFieldsMissing { missing });
    }
    Err(ExtractError::NoValidStructureFound)
}
