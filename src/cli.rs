//! Command-line interface - the host glue around the analysis engine.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use walkdir::WalkDir;

use crate::adapter::languages::{default_registry, language_for_extension};
use crate::analyzer::Analyzer;
use crate::complexity::NestedFunctions;
use crate::report::{self, FileReport};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

/// Per-function source metrics: line span and cyclomatic complexity.
#[derive(Parser)]
#[command(name = "fnlens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report metrics for the functions in the given files
    Analyze(AnalyzeArgs),
    /// List supported language identifiers
    Languages,
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Files or directories to analyze
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Force a language identifier instead of detecting from extensions
    #[arg(short, long)]
    pub language: Option<String>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Score each function over its own body only, leaving nested
    /// functions out of the enclosing function's complexity
    #[arg(long)]
    pub exclude_nested: bool,
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    let nested = if args.exclude_nested {
        NestedFunctions::Exclude
    } else {
        NestedFunctions::Include
    };
    let analyzer = Analyzer::new(default_registry()).with_nested_functions(nested);

    let mut reports = Vec::new();
    for path in &args.paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry?;
                if entry.file_type().is_file() {
                    analyze_file(&analyzer, entry.path(), args.language.as_deref(), &mut reports)?;
                }
            }
        } else {
            analyze_file(&analyzer, path, args.language.as_deref(), &mut reports)?;
        }
    }

    match args.format.as_str() {
        "pretty" => report::write_pretty(&reports),
        "json" => report::write_json(&reports)?,
        other => anyhow::bail!("unknown output format: {}", other),
    }

    Ok(EXIT_SUCCESS)
}

/// Analyze one file, appending a report when its language is supported.
///
/// Files without a recognized language are skipped silently, mirroring the
/// engine's empty-list contract for unsupported identifiers.
fn analyze_file(
    analyzer: &Analyzer,
    path: &Path,
    forced_language: Option<&str>,
    reports: &mut Vec<FileReport>,
) -> anyhow::Result<()> {
    let language = match forced_language {
        Some(id) => id,
        None => {
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            match language_for_extension(ext) {
                Some(id) => id,
                None => return Ok(()),
            }
        }
    };

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    reports.push(FileReport {
        file: path.display().to_string(),
        language: language.to_string(),
        functions: analyzer.analyze(language, &source),
    });

    Ok(())
}

/// Run the languages command.
pub fn run_languages() -> anyhow::Result<i32> {
    for id in default_registry().language_ids() {
        println!("{id}");
    }
    Ok(EXIT_SUCCESS)
}
