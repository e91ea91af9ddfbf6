//! Byte-offset to line/column conversion.
//!
//! Adapters report node spans as byte offsets into the document. Different
//! parsers disagree on how positions are expressed (row/column points vs.
//! absolute offsets), so the engine normalizes everything through one mapper
//! built from the document text.

use serde::{Deserialize, Serialize};

/// A 0-based line/column position in a document.
///
/// Columns are measured in bytes within the line, which matches tree-sitter
/// point semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Maps byte offsets in a document to [`Position`]s.
///
/// Built once per analysis call from the full document text; holds only the
/// byte offsets where each line starts.
#[derive(Debug)]
pub struct PositionMapper {
    line_starts: Vec<usize>,
}

impl PositionMapper {
    /// Build a mapper from document text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));
        Self { line_starts }
    }

    /// Convert a byte offset to a 0-based position.
    ///
    /// Offsets past the end of the text map onto the last line with a
    /// byte-offset column; columns are not clamped to the line's length.
    pub fn position_at(&self, offset: usize) -> Position {
        // First line start strictly after the offset, minus one.
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Position {
            line,
            column: offset - self.line_starts[line],
        }
    }
}
