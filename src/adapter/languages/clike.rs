//! Node classification shared by the C-like grammars (JavaScript,
//! TypeScript, and their JSX/TSX variants).
//!
//! The JS and TS grammars use identical kind names for the constructs the
//! metrics care about, so both adapters delegate here.

use tree_sitter::Node;

const FUNCTION_KINDS: &[&str] = &[
    "function_declaration",
    "function_expression",
    "arrow_function",
    "method_definition",
];

pub(super) fn is_function_node(node: &Node) -> bool {
    FUNCTION_KINDS.contains(&node.kind())
}

pub(super) fn is_decision_point(node: &Node) -> bool {
    match node.kind() {
        "if_statement" | "for_statement" | "while_statement" | "do_statement"
        | "ternary_expression" => true,
        // A case with no statements falls through; it is not a branch of
        // its own. `switch_default` never counts.
        "switch_case" => node.child_by_field_name("body").is_some(),
        "binary_expression" => node
            .child_by_field_name("operator")
            .is_some_and(|op| matches!(op.kind(), "&&" | "||")),
        _ => false,
    }
}

/// Binding name of a function-like node, when the grammar exposes one.
///
/// Declarations and methods carry a `name` field; arrow functions never do,
/// and function expressions only when written as `function named() {}`.
pub(super) fn function_name<'s>(node: &Node, source: &'s str) -> Option<&'s str> {
    node.child_by_field_name("name")
        .and_then(|name| name.utf8_text(source.as_bytes()).ok())
}
