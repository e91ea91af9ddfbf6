//! Analysis orchestration: language lookup, parse, locate, score.

use serde::{Deserialize, Serialize};

use crate::adapter::{AdapterError, AdapterRegistry};
use crate::complexity::{cyclomatic_complexity, NestedFunctions};
use crate::locate::locate_functions;
use crate::position::{Position, PositionMapper};

/// Metrics for one function-like construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    /// Binding name, or `"anonymous"` when the syntax carries none.
    pub name: String,
    /// Start of the node's full span (signature included), 0-based.
    pub start: Position,
    /// End of the node's full span, 0-based.
    pub end: Position,
    /// `end.line - start.line + 1`; always >= 1.
    pub line_count: usize,
    /// 1 plus the number of decision points in the subtree; always >= 1.
    pub complexity: u32,
}

/// The engine's entry point for editor hosts.
///
/// Owns the adapter registry (fixed after construction) and nothing else:
/// every call parses the full text from scratch and returns fresh
/// descriptors, so identical inputs always yield identical output.
pub struct Analyzer {
    registry: AdapterRegistry,
    nested: NestedFunctions,
}

impl Analyzer {
    /// Create an analyzer over a registry built by the caller.
    pub fn new(registry: AdapterRegistry) -> Self {
        Self {
            registry,
            nested: NestedFunctions::default(),
        }
    }

    /// Select how nested-function decision points are attributed.
    pub fn with_nested_functions(mut self, nested: NestedFunctions) -> Self {
        self.nested = nested;
        self
    }

    /// The registry this analyzer dispatches on.
    pub fn registry(&self) -> &AdapterRegistry {
        &self.registry
    }

    /// Analyze a document, containing every failure.
    ///
    /// Unknown language identifiers and internal failures both yield an
    /// empty list: the host boundary never sees an error, and a failed call
    /// degrades to "no annotations", never to wrong ones.
    pub fn analyze(&self, language_id: &str, source: &str) -> Vec<FunctionDescriptor> {
        self.try_analyze(language_id, source).unwrap_or_default()
    }

    /// Analyze a document, surfacing parse-level failures.
    ///
    /// Unknown language identifiers are still a silent no-op (`Ok` with an
    /// empty list); only adapter failures become errors.
    pub fn try_analyze(
        &self,
        language_id: &str,
        source: &str,
    ) -> Result<Vec<FunctionDescriptor>, AdapterError> {
        let Some(adapter) = self.registry.get(language_id) else {
            return Ok(Vec::new());
        };

        let tree = adapter.parse(source)?;
        let mapper = PositionMapper::new(source);

        let descriptors = locate_functions(adapter, tree.root_node(), source)
            .into_iter()
            .map(|function| {
                let start = mapper.position_at(function.node.start_byte());
                let end = mapper.position_at(function.node.end_byte());
                FunctionDescriptor {
                    line_count: end.line - start.line + 1,
                    complexity: cyclomatic_complexity(adapter, function.node, self.nested),
                    name: function.name,
                    start,
                    end,
                }
            })
            .collect();

        Ok(descriptors)
    }
}
