//! Position and range conversion.
//!
//! Both sides count lines and columns from zero, so converting is pure field
//! renaming (`column` <-> `character`). Ranges lose their file on the way to
//! LSP because a protocol range is scoped by its containing document; the
//! reverse direction lives on [`Converter`](super::Converter) since it needs
//! the workspace root to recover the file.

use lsp_types::{Position, Range};

use crate::analysis::{SourcePosition, SourceRange};

/// Convert an LSP position to an analyzer position.
#[must_use]
pub const fn lsp_to_source_position(position: Position) -> SourcePosition {
    SourcePosition {
        line: position.line,
        column: position.character,
    }
}

/// Convert an analyzer position to an LSP position.
#[must_use]
pub const fn source_to_lsp_position(position: SourcePosition) -> Position {
    Position {
        line: position.line,
        character: position.column,
    }
}

/// Convert an analyzer range to an LSP range, dropping the file.
#[must_use]
pub const fn source_to_lsp_range(range: &SourceRange) -> Range {
    Range {
        start: source_to_lsp_position(range.start),
        end: source_to_lsp_position(range.end),
    }
}

/// Build an analyzer range from an LSP range and an already-resolved file.
#[must_use]
pub fn lsp_to_source_range_in(range: Range, file: impl Into<String>) -> SourceRange {
    SourceRange {
        file: file.into(),
        start: lsp_to_source_position(range.start),
        end: lsp_to_source_position(range.end),
    }
}

impl From<Position> for SourcePosition {
    fn from(position: Position) -> Self {
        lsp_to_source_position(position)
    }
}

impl From<SourcePosition> for Position {
    fn from(position: SourcePosition) -> Self {
        source_to_lsp_position(position)
    }
}

impl From<&SourceRange> for Range {
    fn from(range: &SourceRange) -> Self {
        source_to_lsp_range(range)
    }
}
