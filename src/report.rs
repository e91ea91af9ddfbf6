//! Output formatting for analysis results.
//!
//! Two formats:
//! - Pretty: colored terminal output, one annotation per function using the
//!   same text an editor host would render inline
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};

use crate::analyzer::FunctionDescriptor;

/// Results for one analyzed file.
#[derive(Serialize, Deserialize)]
pub struct FileReport {
    pub file: String,
    pub language: String,
    pub functions: Vec<FunctionDescriptor>,
}

/// The inline annotation text for one descriptor.
pub fn annotation(descriptor: &FunctionDescriptor) -> String {
    format!(
        "Lines: {}, Complexity: {}",
        descriptor.line_count, descriptor.complexity
    )
}

/// Write reports as a JSON array to stdout.
pub fn write_json(reports: &[FileReport]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(reports)?);
    Ok(())
}

/// Write reports as colored human-readable text to stdout.
pub fn write_pretty(reports: &[FileReport]) {
    for report in reports {
        println!(
            "{} {}",
            report.file.bold(),
            format!("({})", report.language).dimmed()
        );

        if report.functions.is_empty() {
            println!("  {}", "no functions".dimmed());
            continue;
        }

        for function in &report.functions {
            println!(
                "  {}:{}  {}  {}",
                function.start.line + 1,
                function.start.column,
                function.name.cyan(),
                annotation(function).dimmed()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_annotation_text() {
        let descriptor = FunctionDescriptor {
            name: "f".to_string(),
            start: Position { line: 0, column: 0 },
            end: Position { line: 9, column: 1 },
            line_count: 10,
            complexity: 4,
        };
        assert_eq!(annotation(&descriptor), "Lines: 10, Complexity: 4");
    }

    #[test]
    fn test_json_shape() {
        let report = FileReport {
            file: "demo.py".to_string(),
            language: "python".to_string(),
            functions: vec![FunctionDescriptor {
                name: "f".to_string(),
                start: Position { line: 2, column: 0 },
                end: Position { line: 4, column: 8 },
                line_count: 3,
                complexity: 2,
            }],
        };

        let json = serde_json::to_value([report]).unwrap();
        assert_eq!(json[0]["file"], "demo.py");
        assert_eq!(json[0]["functions"][0]["complexity"], 2);
        assert_eq!(json[0]["functions"][0]["start"]["line"], 2);
    }
}
