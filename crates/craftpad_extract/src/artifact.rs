//! The structured code artifact recovered from a model response.

use serde::Deserialize;

/// Description used when the model omits one.
pub const DEFAULT_DESCRIPTION: &str = "AI generated page";

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}

/// One generated multi-file UI: markup, stylesheet, script, and a short
/// human-readable description. Produced once per model response; owned by
/// the caller and never mutated by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtractedCodeArtifact {
    pub html: String,
    pub css: String,
    pub js: String,
    #[serde(default = "default_description")]
    pub description: String,
}

impl ExtractedCodeArtifact {
    pub fn new(html: String, css: String, js: String, description: Option<String>) -> Self {
        let description = match description {
            Some(d) if !d.trim().is_empty() => d,
            _ => default_description(),
        };
        Self {
            html,
            css,
            js,
            description,
        }
    }

    /// Extraction only succeeds when all three code fields are present and
    /// non-empty; strategies use this as their final gate.
    pub fn has_required_fields(&self) -> bool {
        !self.html.trim().is_empty() && !self.css.trim().is_empty() && !self.js.trim().is_empty()
    }

    /// Deterministic substitute the caller renders when extraction fails.
    /// Never surfaced as a crash (the preview must not go blank).
    pub fn placeholder() -> Self {
        Self {
            html: r#"<div class="craftpad-placeholder"><h2>Generation incomplete</h2><p>The model response could not be turned into code. Try again.</p></div>"#.to_string(),
            css: ".craftpad-placeholder{font-family:sans-serif;padding:32px;text-align:center;color:#666}".to_string(),
            js: String::new(),
            description: default_description(),
        }
    }
}
