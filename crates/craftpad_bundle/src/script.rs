//! Plain-script branch: synthesize a minimal document around `.js` sources.

use crate::csp::csp_meta_tag;
use crate::document::{escape_html, sanitize_css};
use crate::snippets::BASE_STYLESHEET;

/// Synthesize the document for branch (c): a target container, user CSS,
/// then the concatenated JS inside a try/catch that renders a formatted
/// error block into the container on exception.
pub(crate) fn synthesize(title: &str, description: &str, user_css: &str, user_js: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
{csp}
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<style>
{base_css}
{user_css}
</style>
</head>
<body>
<div id="app"></div>
<script>
try {{
{user_js}
}} catch (err) {{
  var app = document.getElementById("app");
  app.innerHTML = '<div style="margin:48px auto;max-width:520px;padding:20px;border:1px solid #a33;border-radius:10px;background:#2d1215;color:#ffb4b4;font-family:monospace;white-space:pre-wrap;"></div>';
  app.firstChild.textContent = "Script error: " + (err && err.message ? err.message : String(err));
}}
</script>
</body>
</html>
"#,
        csp = csp_meta_tag(),
        title = escape_html(title),
        description = escape_html(description),
        base_css = BASE_STYLESHEET,
        user_css = sanitize_css(user_css),
        user_js = user_js,
    )
}
