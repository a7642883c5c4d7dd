//! Locate a JSON object inside free-form model text.
//!
//! Models wrap payloads inconsistently: a ```json fence, a bare ``` fence,
//! or no fence at all. Location order is fixed and shared by the JSON
//! strategies: fenced json block, bare fenced block, first-`{`-to-last-`}`.

use regex::Regex;

lazy_static::lazy_static! {
    static ref FENCED_JSON: Regex =
        Regex::new(r"(?s)```json\s*(\{.*?\})\s*```").unwrap();
    static ref FENCED_BARE: Regex =
        Regex::new(r"(?s)```\s*(\{.*?\})\s*```").unwrap();
}

/// Return the best JSON object candidate span, or `None` when the text has
/// no brace pair at all.
pub fn locate_json_object(text: &str) -> Option<&str> {
    if let Some(caps) = FENCED_JSON.captures(text) {
        return Some(caps.get(1).unwrap().as_str());
    }
    if let Some(caps) = FENCED_BARE.captures(text) {
        return Some(caps.get(1).unwrap().as_str());
    }
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
