//! Assembler configuration: pinned runtime artifacts and tags.

/// Pinned CDN artifacts for the react branch. Versions are fixed so a
/// preview never breaks under us; the origins here must stay in sync with
/// the script-src entries of [`crate::csp::CSP_DIRECTIVE`].
pub const REACT_URL: &str = "https://unpkg.com/react@18.2.0/umd/react.production.min.js";
pub const REACT_DOM_URL: &str = "https://unpkg.com/react-dom@18.2.0/umd/react-dom.production.min.js";
pub const BABEL_URL: &str = "https://cdn.jsdelivr.net/npm/@babel/standalone@7.23.5/babel.min.js";

#[derive(Debug, Clone)]
pub struct AssemblerConfig {
    /// Runtime script for the UI-rendering library.
    pub react_url: String,
    /// DOM renderer companion script.
    pub react_dom_url: String,
    /// In-browser transpiler for `.jsx`/`.tsx` sources.
    pub babel_url: String,
    /// Framework tag shown by the descriptive fallback document.
    pub framework_tag: String,
    /// Title used when the caller passes an empty one.
    pub default_title: String,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            react_url: REACT_URL.to_string(),
            react_dom_url: REACT_DOM_URL.to_string(),
            babel_url: BABEL_URL.to_string(),
            framework_tag: "react".to_string(),
            default_title: "Craftpad preview".to_string(),
        }
    }
}

impl AssemblerConfig {
    pub fn with_framework_tag(mut self, tag: impl Into<String>) -> Self {
        self.framework_tag = tag.into();
        self
    }

    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }
}
