//! The bundle: an insertion-ordered map of filename to source text.

use indexmap::IndexMap;

/// File classification derived from the extension. Drives branch selection
/// and concatenation grouping in the assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Html,
    Css,
    Js,
    Jsx,
    Other,
}

impl FileKind {
    pub fn of(filename: &str) -> FileKind {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "html" | "htm" => FileKind::Html,
            "css" => FileKind::Css,
            "js" | "mjs" => FileKind::Js,
            "jsx" | "tsx" => FileKind::Jsx,
            _ => FileKind::Other,
        }
    }
}

/// Named source files being assembled into a preview. Keys are unique and
/// insertion order is significant: it determines concatenation order. The
/// editor collaborator mutates this; the assembler only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeFileMap {
    inner: IndexMap<String, String>,
}

impl CodeFileMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a file. Replacing keeps the original position, so
    /// edits never reorder the bundle.
    pub fn insert(&mut self, filename: impl Into<String>, source: impl Into<String>) {
        self.inner.insert(filename.into(), source.into());
    }

    pub fn remove(&mut self, filename: &str) -> Option<String> {
        self.inner.shift_remove(filename)
    }

    pub fn get(&self, filename: &str) -> Option<&str> {
        self.inner.get(filename).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn has_kind(&self, kind: FileKind) -> bool {
        self.inner.keys().any(|name| FileKind::of(name) == kind)
    }

    /// First entry of the given kind, in insertion order.
    pub fn first_of_kind(&self, kind: FileKind) -> Option<(&str, &str)> {
        self.iter().find(|(name, _)| FileKind::of(name) == kind)
    }

    /// Concatenate all sources of the given kind, insertion order, separated
    /// by blank lines.
    pub fn concat_of_kind(&self, kind: FileKind) -> String {
        self.iter()
            .filter(|(name, _)| FileKind::of(name) == kind)
            .map(|(_, source)| source)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl FromIterator<(String, String)> for CodeFileMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}
