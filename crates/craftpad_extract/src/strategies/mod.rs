//! Ordered extraction strategies.
//!
//! Each strategy is an independent pure function from raw model text to an
//! optional artifact. The chain tries them in order and the first full
//! success wins; a table of functions (rather than nested fallbacks) keeps
//! every strategy unit-testable on its own.

pub mod backtick_fields;
pub mod backtick_json;
pub mod direct_json;
pub mod field_regex;

use crate::artifact::ExtractedCodeArtifact;

pub type Strategy = fn(&str) -> Option<ExtractedCodeArtifact>;

/// Strategy chain, most strict first. Names show up in logs only.
pub const STRATEGIES: &[(&str, Strategy)] = &[
    ("backtick_fields", backtick_fields::run),
    ("backtick_json", backtick_json::run),
    ("direct_json", direct_json::run),
    ("field_regex", field_regex::run),
];
