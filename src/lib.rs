//! fnlens - per-function source metrics.
//!
//! For each function-like construct in a document, fnlens reports its line
//! span and cyclomatic complexity (1 plus the number of decision points in
//! the function's subtree). Parsing is tree-sitter based, so malformed
//! input still yields metrics for whatever parses.
//!
//! # Architecture
//!
//! - `adapter`: per-language grammars and node-kind classification
//! - `locate`: pre-order discovery of function-like nodes
//! - `complexity`: decision-point counting over a function subtree
//! - `position`: byte offset to line/column mapping
//! - `analyzer`: the orchestrator an editor host (or the CLI) calls
//! - `report`: pretty and JSON output for the CLI
//!
//! # Example
//!
//! ```
//! use fnlens::{default_registry, Analyzer};
//!
//! let analyzer = Analyzer::new(default_registry());
//! let descriptors = analyzer.analyze("python", "def f(x):\n    if x:\n        pass\n");
//! assert_eq!(descriptors[0].complexity, 2);
//! ```
//!
//! # Adding a new language
//!
//! Implement `LanguageAdapter` in `src/adapter/languages/` and register it
//! in `languages/mod.rs`; the orchestrator needs no changes.

pub mod adapter;
pub mod analyzer;
pub mod cli;
pub mod complexity;
pub mod locate;
pub mod position;
pub mod report;

pub use adapter::languages::{default_registry, language_for_extension};
pub use adapter::{AdapterError, AdapterRegistry, LanguageAdapter, ANONYMOUS};
pub use analyzer::{Analyzer, FunctionDescriptor};
pub use complexity::NestedFunctions;
pub use position::{Position, PositionMapper};
