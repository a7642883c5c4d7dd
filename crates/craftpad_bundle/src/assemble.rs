//! Branch dispatch and the `.html`-base branch.

use tracing::debug;

use crate::config::AssemblerConfig;
use crate::csp::{ensure_csp, head_open_end, CSP_TAG_OPEN};
use crate::document::{sanitize_css, PreviewDocument};
use crate::files::{CodeFileMap, FileKind};
use crate::snippets::ERROR_TRAP_JS;
use crate::{fallback, react, script};

/// Assembles file maps into preview documents under a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    config: AssemblerConfig,
}

impl Assembler {
    pub fn new(config: AssemblerConfig) -> Self {
        Self { config }
    }

    /// Turn a bundle into one self-contained document.
    ///
    /// Total: every input, including an empty map, produces a valid
    /// CSP-bearing HTML5 document. Branch selection, first match wins:
    /// `.html` base, react synthesis, plain-script synthesis, descriptive
    /// fallback.
    pub fn assemble(
        &self,
        files: &CodeFileMap,
        title: &str,
        description: &str,
        language_tag: &str,
    ) -> PreviewDocument {
        let title = if title.trim().is_empty() {
            &self.config.default_title
        } else {
            title
        };

        let html = if let Some((_, base)) = files.first_of_kind(FileKind::Html) {
            debug!(branch = "html_base", files = files.len(), "assembling bundle");
            self.assemble_html_base(base, files)
        } else if files.has_kind(FileKind::Jsx) {
            debug!(branch = "react", files = files.len(), "assembling bundle");
            let css = files.concat_of_kind(FileKind::Css);
            let source = join_nonempty(
                files.concat_of_kind(FileKind::Js),
                files.concat_of_kind(FileKind::Jsx),
            );
            react::synthesize(&self.config, title, description, &css, &source)
        } else if files.has_kind(FileKind::Js) {
            debug!(branch = "script", files = files.len(), "assembling bundle");
            let css = files.concat_of_kind(FileKind::Css);
            let js = files.concat_of_kind(FileKind::Js);
            script::synthesize(title, description, &css, &js)
        } else {
            debug!(branch = "fallback", files = files.len(), "assembling bundle");
            fallback::synthesize(
                files,
                title,
                description,
                &self.config.framework_tag,
                language_tag,
            )
        };

        PreviewDocument::new(html)
    }

    /// Branch (a): the first `.html` entry is the base document, taken
    /// verbatim. CSP is inserted when absent, user CSS lands in a `<style>`
    /// block right after the CSP tag (head only), and scripts are injected
    /// before `</body>` behind the error trap.
    fn assemble_html_base(&self, base: &str, files: &CodeFileMap) -> String {
        let mut html = base.to_string();
        ensure_csp(&mut html);

        let css = files.concat_of_kind(FileKind::Css);
        if !css.is_empty() {
            if let Some(head_end) = head_open_end(&html) {
                let at = after_csp_tag(&html).unwrap_or(head_end);
                html.insert_str(at, &format!("\n<style>\n{}\n</style>", sanitize_css(&css)));
            }
        }

        let plain_js = files.concat_of_kind(FileKind::Js);
        let jsx = files.concat_of_kind(FileKind::Jsx);
        let code = join_nonempty(plain_js, jsx);
        if !code.is_empty() {
            let mut injection = format!("<script>\n{ERROR_TRAP_JS}\n</script>\n");
            if files.has_kind(FileKind::Jsx) {
                // The transpiler and runtime must be present for a
                // text/babel block to execute at all.
                injection.push_str(&format!(
                    "<script crossorigin src=\"{}\"></script>\n<script crossorigin src=\"{}\"></script>\n<script src=\"{}\"></script>\n",
                    self.config.react_url, self.config.react_dom_url, self.config.babel_url
                ));
                injection.push_str(&format!(
                    "<script type=\"text/babel\" data-presets=\"react\">\n{code}\n</script>\n"
                ));
            } else {
                injection.push_str(&format!("<script>\n{code}\n</script>\n"));
            }
            match html.rfind("</body>") {
                Some(idx) => html.insert_str(idx, &injection),
                None => html.push_str(&injection),
            }
        }

        html
    }
}

/// Position just past the closing `>` of the CSP meta tag.
fn after_csp_tag(html: &str) -> Option<usize> {
    let at = html.find(CSP_TAG_OPEN)?;
    let close = html[at..].find('>')?;
    Some(at + close + 1)
}

fn join_nonempty(a: String, b: String) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, _) => b,
        (_, true) => a,
        _ => format!("{a}\n\n{b}"),
    }
}

/// Assemble with the default configuration.
pub fn assemble(
    files: &CodeFileMap,
    title: &str,
    description: &str,
    language_tag: &str,
) -> PreviewDocument {
    Assembler::default().assemble(files, title, description, language_tag)
}
