//! Cyclomatic complexity over a function subtree.

use tree_sitter::Node;

use crate::adapter::LanguageAdapter;

/// How decision points inside nested functions are attributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NestedFunctions {
    /// Count the whole subtree, nested function bodies included. A branch
    /// inside an inner function then contributes to every enclosing
    /// function's score as well as its own. This reproduces the reference
    /// behavior and is the default.
    #[default]
    Include,
    /// Stop at nested function boundaries; each function's score covers
    /// only its own body.
    Exclude,
}

/// Compute cyclomatic complexity for the subtree rooted at `function`.
///
/// Complexity is 1 (the base path) plus one per decision-point node, per the
/// adapter's classification. Iterative traversal with an explicit stack.
pub fn cyclomatic_complexity(
    adapter: &dyn LanguageAdapter,
    function: Node<'_>,
    nested: NestedFunctions,
) -> u32 {
    let mut branches = 0;
    let mut stack = vec![function];

    while let Some(node) = stack.pop() {
        if nested == NestedFunctions::Exclude
            && node.id() != function.id()
            && adapter.is_function_node(&node)
        {
            continue;
        }

        if adapter.is_decision_point(&node) {
            branches += 1;
        }

        for i in (0..node.child_count()).rev() {
            if let Some(child) = node.child(i) {
                stack.push(child);
            }
        }
    }

    1 + branches
}
