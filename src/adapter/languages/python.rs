//! Python adapter.

use tree_sitter::{Language, Node, Tree};

use super::super::{parse_with, AdapterError, AdapterRegistry, LanguageAdapter};

/// Node kinds that introduce a branch in Python control flow.
///
/// `boolean_operator` covers both `and` and `or` (one node per operator).
/// `else_clause` appears under `if`, `for`, `while`, and `try` statements
/// and counts in every position. A `case_clause` always counts; the grammar
/// never produces an empty one.
const DECISION_KINDS: &[&str] = &[
    "if_statement",
    "for_statement",
    "while_statement",
    "with_statement",
    "try_statement",
    "except_clause",
    "elif_clause",
    "else_clause",
    "boolean_operator",
    "conditional_expression",
    "case_clause",
];

pub struct PythonAdapter {
    language: Language,
}

impl PythonAdapter {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_python::LANGUAGE.into(),
        }
    }
}

impl Default for PythonAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageAdapter for PythonAdapter {
    fn language_id(&self) -> &'static str {
        "python"
    }

    fn parse(&self, source: &str) -> Result<Tree, AdapterError> {
        parse_with(&self.language, source)
    }

    fn is_function_node(&self, node: &Node) -> bool {
        node.kind() == "function_definition"
    }

    fn is_decision_point(&self, node: &Node) -> bool {
        DECISION_KINDS.contains(&node.kind())
    }

    fn function_name<'s>(&self, node: &Node, source: &'s str) -> Option<&'s str> {
        node.child_by_field_name("name")
            .and_then(|name| name.utf8_text(source.as_bytes()).ok())
    }
}

/// Register the Python adapter.
pub fn register(registry: &mut AdapterRegistry) {
    registry.register("python", Box::new(PythonAdapter::new()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complexity::{cyclomatic_complexity, NestedFunctions};
    use crate::locate::locate_functions;

    fn functions_with_complexity(source: &str) -> Vec<(String, u32)> {
        let adapter = PythonAdapter::new();
        let tree = adapter.parse(source).unwrap();
        locate_functions(&adapter, tree.root_node(), source)
            .into_iter()
            .map(|f| {
                let cc = cyclomatic_complexity(&adapter, f.node, NestedFunctions::Include);
                (f.name, cc)
            })
            .collect()
    }

    #[test]
    fn test_simple_function_base_complexity() {
        let found = functions_with_complexity("def simple():\n    return 42\n");
        assert_eq!(found, vec![("simple".to_string(), 1)]);
    }

    #[test]
    fn test_if_elif_else() {
        let source = r#"
def f(x):
    if x:
        pass
    elif x > 1:
        pass
    else:
        pass
"#;
        // 1 (base) + if + elif + else = 4
        let found = functions_with_complexity(source);
        assert_eq!(found, vec![("f".to_string(), 4)]);
    }

    #[test]
    fn test_loops_and_with() {
        let source = r#"
def g(items):
    with open("x") as fh:
        for item in items:
            while item:
                item -= 1
"#;
        // 1 + with + for + while = 4
        let found = functions_with_complexity(source);
        assert_eq!(found, vec![("g".to_string(), 4)]);
    }

    #[test]
    fn test_try_except() {
        let source = r#"
def h():
    try:
        risky()
    except ValueError:
        pass
    except KeyError:
        pass
"#;
        // 1 + try + 2 except clauses = 4
        let found = functions_with_complexity(source);
        assert_eq!(found, vec![("h".to_string(), 4)]);
    }

    #[test]
    fn test_boolean_operators_and_ternary() {
        let source = r#"
def check(a, b, c):
    return a if a and b or c else None
"#;
        // 1 + conditional_expression + and + or = 4
        let found = functions_with_complexity(source);
        assert_eq!(found, vec![("check".to_string(), 4)]);
    }

    #[test]
    fn test_match_case_clauses() {
        let source = r#"
def dispatch(x):
    match x:
        case 1:
            pass
        case 2:
            pass
"#;
        // 1 + 2 case clauses = 3
        let found = functions_with_complexity(source);
        assert_eq!(found, vec![("dispatch".to_string(), 3)]);
    }

    #[test]
    fn test_lambda_is_not_a_function_node() {
        // Only `function_definition` counts as function-like for Python.
        let found = functions_with_complexity("f = lambda x: x + 1\n");
        assert!(found.is_empty());
    }

    #[test]
    fn test_decorated_and_async_functions_found() {
        let source = r#"
@decorator
def decorated():
    pass

async def fetch():
    pass
"#;
        let names: Vec<String> = functions_with_complexity(source)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["decorated".to_string(), "fetch".to_string()]);
    }
}
