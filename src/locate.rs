//! Function discovery over a parsed tree.

use tree_sitter::Node;

use crate::adapter::{LanguageAdapter, ANONYMOUS};

/// A function-like node found during traversal, with its resolved name.
pub struct LocatedFunction<'tree> {
    pub node: Node<'tree>,
    pub name: String,
}

/// Find every function-like node under `root`, in textual (pre-order) order.
///
/// Traversal recurses into ALL children, including the bodies of functions
/// already matched, so nested functions are reported as their own entries at
/// any depth. Uses an explicit work-stack; tree depth never touches the call
/// stack.
pub fn locate_functions<'tree>(
    adapter: &dyn LanguageAdapter,
    root: Node<'tree>,
    source: &str,
) -> Vec<LocatedFunction<'tree>> {
    let mut found = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if adapter.is_function_node(&node) {
            let name = adapter
                .function_name(&node, source)
                .unwrap_or(ANONYMOUS)
                .to_string();
            found.push(LocatedFunction { node, name });
        }

        // Children pushed in reverse so the leftmost is visited next.
        for i in (0..node.child_count()).rev() {
            if let Some(child) = node.child(i) {
                stack.push(child);
            }
        }
    }

    found
}
