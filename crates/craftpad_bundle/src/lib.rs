//! craftpad-bundle: assemble a code bundle into one preview document.
//!
//! Takes the named source files of a generated UI (the `CodeFileMap`) and
//! produces a single self-contained HTML5 document the sandboxed render
//! host can load. [`assemble`] is total: any input, including an empty map,
//! yields a valid document carrying exactly one Content-Security-Policy
//! meta tag, with CSS applied before any script runs and file concatenation
//! following map insertion order.

pub mod assemble;
pub mod config;
pub mod csp;
pub mod document;
pub mod files;
mod fallback;
mod react;
mod script;
mod snippets;

pub use assemble::{assemble, Assembler};
pub use config::AssemblerConfig;
pub use csp::CSP_DIRECTIVE;
pub use document::{escape_html, PreviewDocument};
pub use files::{CodeFileMap, FileKind};
pub use react::CONVENTIONAL_COMPONENT_NAMES;
