//! React branch: synthesize a full document around `.jsx`/`.tsx` sources.
//!
//! The generated bootstrap populates a scoped candidate registry from the
//! identifiers this module finds in the source text, then runs the
//! three-tier auto-mount: conventional names in a fixed order, heuristic
//! scan of the remaining candidates, styled placeholder. The registry keeps
//! mounting off the mutable global namespace entirely.

use regex::Regex;

use crate::config::AssemblerConfig;
use crate::csp::csp_meta_tag;
use crate::document::{escape_html, sanitize_css};
use crate::snippets::{AUTO_MOUNT_TAIL_JS, BASE_STYLESHEET, ERROR_TRAP_JS};

/// Conventional component names tried first, in order.
pub const CONVENTIONAL_COMPONENT_NAMES: [&str; 20] = [
    "App",
    "Component",
    "Main",
    "Home",
    "Page",
    "Root",
    "Index",
    "Dashboard",
    "Layout",
    "Landing",
    "Card",
    "Form",
    "Widget",
    "Header",
    "Profile",
    "Gallery",
    "Calculator",
    "Game",
    "Chart",
    "Todo",
];

lazy_static::lazy_static! {
    // Top-level declarations worth registering as mount candidates.
    static ref DECLARATIONS: Regex = Regex::new(
        r"(?m)^\s*(?:export\s+)?(?:default\s+)?(?:function|class|const|let|var)\s+([A-Z][A-Za-z0-9_]*)"
    )
    .unwrap();
}

/// Identifiers the bootstrap should register: every capitalized top-level
/// declaration, plus any conventional name that appears in the source (some
/// models assign to names they never declare at the top level).
pub(crate) fn candidate_identifiers(source: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in DECLARATIONS.captures_iter(source) {
        let name = caps.get(1).unwrap().as_str().to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    for name in CONVENTIONAL_COMPONENT_NAMES {
        if source.contains(name) && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Emit the registry population code. `typeof` keeps undeclared names
/// harmless; the try/catch absorbs TDZ errors from shadowed consts.
fn registry_snippet(identifiers: &[String]) -> String {
    let mut out = String::from("var __craftpadCandidates = {};\n");
    for name in identifiers {
        out.push_str(&format!(
            "try {{ __craftpadCandidates[\"{name}\"] = typeof {name} !== \"undefined\" ? {name} : undefined; }} catch (e) {{}}\n"
        ));
    }
    out.push_str("var __craftpadMountOrder = [");
    out.push_str(
        &CONVENTIONAL_COMPONENT_NAMES
            .iter()
            .map(|n| format!("\"{n}\""))
            .collect::<Vec<_>>()
            .join(", "),
    );
    out.push_str("];\n");
    out
}

/// The complete transpiled bootstrap: user source, candidate registry,
/// auto-mount tail.
pub(crate) fn bootstrap(user_source: &str) -> String {
    let identifiers = candidate_identifiers(user_source);
    format!(
        "{user_source}\n\n{}{}",
        registry_snippet(&identifiers),
        AUTO_MOUNT_TAIL_JS
    )
}

/// Synthesize the full react document for branch (b).
pub(crate) fn synthesize(
    config: &AssemblerConfig,
    title: &str,
    description: &str,
    user_css: &str,
    user_source: &str,
) -> String {
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
<script crossorigin src="{react}"></script>
<script crossorigin src="{react_dom}"></script>
<script src="{babel}"></script>
</head>
<body>
<div id="root"></div>
<script>
{error_trap}
</script>
<script type="text/babel" data-presets="react">
{bootstrap}
</script>
</body>
</html>
"#,
        csp = csp_meta_tag(),
        title = escape_html(title),
        description = escape_html(description),
        base_css = BASE_STYLESHEET,
        user_css = sanitize_css(user_css),
        react = config.react_url,
        react_dom = config.react_dom_url,
        babel = config.babel_url,
        error_trap = ERROR_TRAP_JS,
        bootstrap = bootstrap(user_source),
    )
}
