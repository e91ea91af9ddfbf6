//! Language adapters and the adapter registry.
//!
//! An adapter wraps one tree-sitter grammar and classifies its node kinds
//! for the two traversal purposes: function detection and decision-point
//! detection. The registry maps editor language identifiers to adapters and
//! is fixed after construction - build it once at startup and pass it to
//! the [`Analyzer`](crate::Analyzer) rather than reaching for a global.

use std::collections::HashMap;

use thiserror::Error;
use tree_sitter::{Node, Parser, Tree};

pub mod languages;

/// Fallback name for function-like nodes with no syntactic binding name.
pub const ANONYMOUS: &str = "anonymous";

/// Errors raised while turning source text into a tree.
///
/// Syntax errors in the source are NOT represented here: tree-sitter returns
/// a best-effort tree with ERROR nodes and analysis proceeds over it.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The grammar was rejected by the tree-sitter runtime (ABI mismatch).
    #[error("failed to load grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),
    /// The parser returned no tree at all.
    #[error("parser produced no tree")]
    NoTree,
}

/// Per-language parsing and node classification.
///
/// # Thread safety
///
/// `tree_sitter::Parser` is not `Sync`, so implementations hold only the
/// `Language` and construct a parser per `parse` call.
pub trait LanguageAdapter: Send + Sync {
    /// The editor language identifier this adapter serves (e.g. "python").
    fn language_id(&self) -> &'static str;

    /// Parse source text into a syntax tree.
    ///
    /// Must be tolerant: malformed input yields the best-effort partial tree
    /// rather than an error, so analysis can proceed over the valid portions.
    fn parse(&self, source: &str) -> Result<Tree, AdapterError>;

    /// Whether this node defines a function, method, or closure.
    fn is_function_node(&self, node: &Node) -> bool;

    /// Whether this node introduces a branch in control flow.
    fn is_decision_point(&self, node: &Node) -> bool;

    /// The binding name of a function-like node, if it has one.
    ///
    /// Callers substitute [`ANONYMOUS`] when this returns `None`.
    fn function_name<'s>(&self, node: &Node, source: &'s str) -> Option<&'s str>;
}

/// Parse `source` with the given grammar, building a parser for this call.
pub(crate) fn parse_with(language: &tree_sitter::Language, source: &str) -> Result<Tree, AdapterError> {
    let mut parser = Parser::new();
    parser.set_language(language)?;
    parser.parse(source, None).ok_or(AdapterError::NoTree)
}

/// Maps language identifiers to adapters.
///
/// Fixed for the process lifetime once built; unknown identifiers simply
/// miss the lookup. Use [`languages::default_registry`] for the stock set.
#[derive(Default)]
pub struct AdapterRegistry {
    adapters: HashMap<&'static str, Box<dyn LanguageAdapter>>,
}

impl AdapterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter under a language identifier.
    ///
    /// A later registration for the same identifier replaces the earlier one.
    pub fn register(&mut self, language_id: &'static str, adapter: Box<dyn LanguageAdapter>) {
        self.adapters.insert(language_id, adapter);
    }

    /// Look up the adapter for a language identifier.
    pub fn get(&self, language_id: &str) -> Option<&dyn LanguageAdapter> {
        self.adapters.get(language_id).map(|a| a.as_ref())
    }

    /// All registered language identifiers, sorted.
    pub fn language_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.adapters.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
