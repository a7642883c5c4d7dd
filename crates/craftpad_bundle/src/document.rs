//! The assembled preview document.

use std::fmt;

/// A complete HTML5 document ready for the sandboxed render host. Recreated
/// on every assembly call; carries exactly one Content-Security-Policy meta
/// tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewDocument(String);

impl PreviewDocument {
    pub(crate) fn new(html: String) -> Self {
        Self(html)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Number of CSP meta tags in the document. Invariant: 1. Mentions of
    /// the policy name in body text do not count.
    pub fn csp_tag_count(&self) -> usize {
        self.0.matches(crate::csp::CSP_TAG_OPEN).count()
    }
}

impl fmt::Display for PreviewDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Minimal HTML escaping for text interpolated into synthesized markup.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Neutralize `</style` sequences in user CSS before it is embedded in a
/// `<style>` block. The slash becomes a CSS hex escape, so the parser never
/// sees a closing tag and markup after it stays inert.
pub(crate) fn sanitize_css(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut rest = css;
    while let Some(at) = find_style_close(rest) {
        out.push_str(&rest[..at]);
        out.push_str(r"<\2f style");
        rest = &rest[at + "</style".len()..];
    }
    out.push_str(rest);
    out
}

fn find_style_close(css: &str) -> Option<usize> {
    css.as_bytes()
        .windows(7)
        .position(|window| window.eq_ignore_ascii_case(b"</style"))
}
