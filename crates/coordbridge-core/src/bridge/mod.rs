//! Translation layer between analyzer and LSP types.
//!
//! This module handles the conversion of positions, ranges, severities,
//! warnings and fixes, plus resolution between workspace-relative paths
//! and document URIs.

mod converter;
mod position;
mod workspace;

pub use converter::{
    convert_severity, convert_severity_code, Converter, FileEdits, DEFAULT_DIAGNOSTIC_SOURCE,
};
pub use position::{
    lsp_to_source_position, lsp_to_source_range_in, source_to_lsp_position, source_to_lsp_range,
};
pub use workspace::{OutsideRootPolicy, WorkspaceRoot};
