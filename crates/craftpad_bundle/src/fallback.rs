//! Descriptive fallback branch: no recognizable source files.
//!
//! Rather than a blank frame, render a listing of whatever the bundle holds
//! with extension-derived icons and aggregate stats. Works for an empty map.

use crate::csp::csp_meta_tag;
use crate::document::escape_html;
use crate::files::CodeFileMap;
use crate::snippets::BASE_STYLESHEET;

fn icon_for(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "json" => "{}",
        "md" | "markdown" => "#",
        "txt" => "Aa",
        "svg" | "png" | "jpg" | "jpeg" | "gif" | "webp" => "img",
        "yml" | "yaml" | "toml" | "ini" => "cfg",
        "ts" => "TS",
        _ => "doc",
    }
}

pub(crate) fn synthesize(
    files: &CodeFileMap,
    title: &str,
    description: &str,
    framework_tag: &str,
    language_tag: &str,
) -> String {
    let rows: String = files
        .iter()
        .map(|(name, source)| {
            format!(
                "<li><span class=\"icon\">{}</span><span class=\"name\">{}</span><span class=\"size\">{} bytes</span></li>\n",
                icon_for(name),
                escape_html(name),
                source.len()
            )
        })
        .collect();
    let listing = if rows.is_empty() {
        "<p class=\"empty\">This bundle has no files yet.</p>".to_string()
    } else {
        format!("<ul class=\"listing\">\n{rows}</ul>")
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
{csp}
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
{base_css}
body {{ background: #f7f7f8; color: #333; padding: 40px 16px; }}
.panel {{ max-width: 560px; margin: 0 auto; background: #fff; border: 1px solid #e3e3e6; border-radius: 12px; padding: 24px; }}
.listing {{ list-style: none; padding: 0; }}
.listing li {{ display: flex; gap: 12px; padding: 8px 4px; border-bottom: 1px solid #f0f0f2; }}
.icon {{ font-family: monospace; color: #888; min-width: 32px; }}
.name {{ flex: 1; }}
.size, .stats, .empty {{ color: #888; font-size: 13px; }}
</style>
</head>
<body>
<div class="panel">
<h1>{title}</h1>
<p>{description}</p>
{listing}
<p class="stats">{count} file(s) &middot; framework: {framework} &middot; language: {language}</p>
</div>
</body>
</html>
"#,
        csp = csp_meta_tag(),
        title = escape_html(title),
        description = escape_html(description),
        base_css = BASE_STYLESHEET,
        listing = listing,
        count = files.len(),
        framework = escape_html(framework_tag),
        language = escape_html(language_tag),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_each_entry_with_icon() {
        let files: CodeFileMap = [
            ("notes.md".to_string(), "# hi".to_string()),
            ("data.json".to_string(), "{}".to_string()),
        ]
        .into_iter()
        .collect();
        let doc = synthesize(&files, "Bundle", "desc", "react", "en");
        assert!(doc.contains("notes.md"));
        assert!(doc.contains("data.json"));
        assert!(doc.contains("2 file(s)"));
    }

    #[test]
    fn empty_map_still_renders() {
        let doc = synthesize(&CodeFileMap::new(), "Empty", "", "react", "en");
        assert!(doc.contains("no files yet"));
        assert!(doc.contains("0 file(s)"));
    }
}
