//! Language-specific adapters.
//!
//! Each module wraps one tree-sitter grammar and carries that language's
//! kind tables for function detection and decision-point counting. To add a
//! language: implement [`LanguageAdapter`](super::LanguageAdapter) in a new
//! module here and register it in [`default_registry`].

mod clike;
mod javascript;
mod python;
mod typescript;

pub use javascript::JavaScriptAdapter;
pub use python::PythonAdapter;
pub use typescript::TypeScriptAdapter;

use super::AdapterRegistry;

/// Build a registry with all stock language adapters.
pub fn default_registry() -> AdapterRegistry {
    let mut registry = AdapterRegistry::new();
    python::register(&mut registry);
    javascript::register(&mut registry);
    typescript::register(&mut registry);
    registry
}

/// Map a file extension (without dot) to a registered language identifier.
///
/// This is host-side convenience for the CLI; editor hosts pick the
/// identifier with their own detection logic.
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    match ext {
        "py" | "pyi" => Some("python"),
        "js" | "mjs" | "cjs" => Some("javascript"),
        "jsx" => Some("javascriptreact"),
        "ts" | "mts" | "cts" => Some("typescript"),
        "tsx" => Some("typescriptreact"),
        _ => None,
    }
}
