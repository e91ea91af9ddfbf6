//! JavaScript adapter.
//!
//! The JavaScript grammar parses JSX natively, so the same adapter serves
//! both the "javascript" and "javascriptreact" identifiers.

use tree_sitter::{Language, Node, Tree};

use super::super::{parse_with, AdapterError, AdapterRegistry, LanguageAdapter};
use super::clike;

pub struct JavaScriptAdapter {
    language: Language,
    id: &'static str,
}

impl JavaScriptAdapter {
    pub fn new() -> Self {
        Self::with_id("javascript")
    }

    fn with_id(id: &'static str) -> Self {
        Self {
            language: tree_sitter_javascript::LANGUAGE.into(),
            id,
        }
    }
}

impl Default for JavaScriptAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageAdapter for JavaScriptAdapter {
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

/// Register the JavaScript adapter for both plain and JSX identifiers.
pub fn register(registry: &mut AdapterRegistry) {
    registry.register("javascript", Box::new(JavaScriptAdapter::new()));
    registry.register(
        "javascriptreact",
        Box::new(JavaScriptAdapter::with_id("javascriptreact")),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::ANONYMOUS;
    use crate::complexity::{cyclomatic_complexity, NestedFunctions};
    use crate::locate::locate_functions;

    fn functions_with_complexity(source: &str) -> Vec<(String, u32)> {
        let adapter = JavaScriptAdapter::new();
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
    fn test_for_if_logical_and() {
        let source = r#"
function g(x) {
  for (let i = 0; i < x; i++) {
    if (i && x) { }
  }
}
"#;
        // 1 (base) + for + if + && = 4
        let found = functions_with_complexity(source);
        assert_eq!(found, vec![("g".to_string(), 4)]);
    }

    #[test]
    fn test_empty_switch_case_does_not_count() {
        let source = r#"
function pick(x) {
  switch (x) {
    case 1:
    case 2:
      work();
      break;
    default:
      rest();
  }
}
"#;
        // 1 (base) + non-empty `case 2` = 2; the fallthrough `case 1` and
        // the default clause contribute nothing.
        let found = functions_with_complexity(source);
        assert_eq!(found, vec![("pick".to_string(), 2)]);
    }

    #[test]
    fn test_ternary_and_logical_or() {
        let source = r#"
function choose(a, b) {
  return a || b ? a : b;
}
"#;
        // 1 + ternary + || = 3
        let found = functions_with_complexity(source);
        assert_eq!(found, vec![("choose".to_string(), 3)]);
    }

    #[test]
    fn test_do_while_counts() {
        let source = r#"
function spin(n) {
  do {
    n--;
  } while (n > 0);
}
"#;
        let found = functions_with_complexity(source);
        assert_eq!(found, vec![("spin".to_string(), 2)]);
    }

    #[test]
    fn test_nullish_coalescing_does_not_count() {
        // Parity with the reference tables: only && and || count.
        let found = functions_with_complexity("function f(a, b) { return a ?? b; }\n");
        assert_eq!(found, vec![("f".to_string(), 1)]);
    }

    #[test]
    fn test_anonymous_forms() {
        let source = r#"
const double = (x) => x * 2;
items.forEach(function (item) { use(item); });
const named = function realName() { };
"#;
        let found = functions_with_complexity(source);
        let names: Vec<String> = found.into_iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                ANONYMOUS.to_string(),
                ANONYMOUS.to_string(),
                "realName".to_string(),
            ]
        );
    }

    #[test]
    fn test_method_definition() {
        let source = r#"
class Greeter {
  greet(name) {
    if (name) {
      return "hi " + name;
    }
    return "hi";
  }
}
"#;
        let found = functions_with_complexity(source);
        assert_eq!(found, vec![("greet".to_string(), 2)]);
    }

    #[test]
    fn test_jsx_parses_under_react_id() {
        let adapter = JavaScriptAdapter::with_id("javascriptreact");
        let source = "const App = () => <div>{items.map((i) => <li>{i}</li>)}</div>;\n";
        let tree = adapter.parse(source).unwrap();
        let found = locate_functions(&adapter, tree.root_node(), source);
        assert_eq!(found.len(), 2);
    }
}
