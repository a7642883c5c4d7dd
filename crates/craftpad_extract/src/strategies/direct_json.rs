//! Strategy 3: direct JSON parse with light repair.
//!
//! Converts stray backticks to double quotes, escapes raw control bytes
//! (0x00-0x1F, 0x7F) that appear inside string literals as `\uXXXX`, then
//! locates and parses a JSON object from the result. Models frequently emit
//! literal newlines inside string values; that is the repair that makes
//! otherwise-valid payloads parse.

use crate::artifact::ExtractedCodeArtifact;
use crate::locate::locate_json_object;

/// Escape raw control bytes inside string literals. Structural whitespace
/// between tokens is left untouched.
fn escape_control_bytes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;
    for ch in text.chars() {
        if escaped {
            out.push(ch);
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => {
                out.push(ch);
                escaped = true;
            }
            '"' => {
                out.push(ch);
                in_string = !in_string;
            }
            c if in_string && (c < '\x20' || c == '\x7f') => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

pub fn run(text: &str) -> Option<ExtractedCodeArtifact> {
    let repaired = escape_control_bytes(&text.replace('`', "\""));
    let candidate = locate_json_object(&repaired)?;
    let artifact: ExtractedCodeArtifact = serde_json::from_str(candidate).ok()?;
    artifact.has_required_fields().then_some(artifact)
}
