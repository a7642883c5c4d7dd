//! Content-Security-Policy handling.
//!
//! The directive is fixed product-wide. The two explicit script-src origins
//! are the pinned CDNs the react branch loads its runtime from.

/// Fixed CSP directive applied to every preview document.
pub const CSP_DIRECTIVE: &str = "default-src 'self' 'unsafe-inline' 'unsafe-eval' data: blob: https:; script-src 'self' 'unsafe-inline' 'unsafe-eval' https://unpkg.com https://cdn.jsdelivr.net; style-src 'self' 'unsafe-inline' https:";

/// Opening of a CSP meta tag. Detection matches this, not the bare policy
/// name, so body text merely mentioning the header cannot pass for a tag.
pub(crate) const CSP_TAG_OPEN: &str = r#"<meta http-equiv="Content-Security-Policy""#;

/// The meta tag carrying [`CSP_DIRECTIVE`].
pub fn csp_meta_tag() -> String {
    format!(r#"{} content="{}">"#, CSP_TAG_OPEN, CSP_DIRECTIVE)
}

/// Insert the CSP meta tag if the document does not already carry one.
///
/// Insertion point is immediately after the opening `<head>` tag; documents
/// without a head get the tag prepended so the invariant holds even for
/// fragment-like user HTML.
pub fn ensure_csp(html: &mut String) {
    if html.contains(CSP_TAG_OPEN) {
        return;
    }
    let tag = csp_meta_tag();
    match head_open_end(html) {
        Some(idx) => html.insert_str(idx, &format!("\n{tag}")),
        None => html.insert_str(0, &format!("{tag}\n")),
    }
}

/// Byte offset just past the `>` of the opening `<head ...>` tag.
pub(crate) fn head_open_end(html: &str) -> Option<usize> {
    let start = html.find("<head")?;
    let close = html[start..].find('>')?;
    Some(start + close + 1)
}
