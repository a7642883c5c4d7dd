//! Strategy 2: backtick-to-JSON normalization.
//!
//! Rewrites every backtick-delimited value into a properly escaped JSON
//! string, then locates and parses a JSON object from the normalized text.
//!
//! Known limitation: a backtick nested inside a backtick-delimited value
//! (e.g. JS template literals) terminates the value early and corrupts the
//! payload. The source behavior there is undefined, so this is left as-is;
//! the escape-aware patterns of the field-regex fallback are the only
//! recovery path for such responses.

use regex::{Captures, Regex};

use crate::artifact::ExtractedCodeArtifact;
use crate::locate::locate_json_object;

lazy_static::lazy_static! {
    // A backtick value in field position: `: `...``
    static ref BACKTICK_VALUE: Regex = Regex::new(r"(?s):\s*`([^`]*)`").unwrap();
}

/// Escape a raw value so it is valid inside a double-quoted JSON string.
fn escape_json_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0c' => out.push_str("\\f"),
            '\x08' => out.push_str("\\b"),
            other => out.push(other),
        }
    }
    out
}

pub fn run(text: &str) -> Option<ExtractedCodeArtifact> {
    if !text.contains('`') {
        return None;
    }
    let normalized = BACKTICK_VALUE.replace_all(text, |caps: &Captures| {
        format!(": \"{}\"", escape_json_string(caps.get(1).unwrap().as_str()))
    });
    let candidate = locate_json_object(&normalized)?;
    let artifact: ExtractedCodeArtifact = serde_json::from_str(candidate).ok()?;
    artifact.has_required_fields().then_some(artifact)
}
