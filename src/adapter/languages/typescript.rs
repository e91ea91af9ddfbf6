//! TypeScript adapter.
//!
//! TypeScript ships two grammars: plain TS and TSX (JSX syntax enabled).
//! Both expose the same kind names, so classification is shared with the
//! JavaScript adapter via the `clike` tables.

use tree_sitter::{Language, Node, Tree};

use super::super::{parse_with, AdapterError, AdapterRegistry, LanguageAdapter};
use super::clike;

pub struct TypeScriptAdapter {
    language: Language,
    id: &'static str,
}

impl TypeScriptAdapter {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            id: "typescript",
        }
    }

    /// Adapter for .tsx documents, which need the dedicated TSX grammar.
    pub fn new_tsx() -> Self {
        Self {
            language: tree_sitter_typescript::LANGUAGE_TSX.into(),
            id: "typescriptreact",
        }
    }
}

impl Default for TypeScriptAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageAdapter for TypeScriptAdapter {
    fn language_id(&self) -> &'static str {
        self.id
    }

    fn parse(&self, source: &str) -> Result<Tree, AdapterError> {
        parse_with(&self.language, source)
    }

    fn is_function_node(&self, node: &Node) -> bool {
        clike::is_function_node(node)
    }

    fn is_decision_point(&self, node: &Node) -> bool {
        clike::is_decision_point(node)
    }

    fn function_name<'s>(&self, node: &Node, source: &'s str) -> Option<&'s str> {
        clike::function_name(node, source)
    }
}

/// Register the TypeScript and TSX adapters.
pub fn register(registry: &mut AdapterRegistry) {
    registry.register("typescript", Box::new(TypeScriptAdapter::new()));
    registry.register("typescriptreact", Box::new(TypeScriptAdapter::new_tsx()));
}
