//! Analysis-engine types.
//!
//! These mirror the analyzer's own vocabulary: workspace-relative file paths,
//! `{line, column}` positions and numeric severities. Field names follow the
//! analyzer's JSON so warnings and fixes can be read straight off its output.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Position inside a file (0-based line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SourcePosition {
    /// Line number (0-based).
    pub line: u32,
    /// Column number (0-based).
    pub column: u32,
}

impl SourcePosition {
    /// Create a new position.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Range inside a workspace file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRange {
    /// Workspace-relative path, `/`-separated.
    pub file: String,
    /// Start position (inclusive).
    pub start: SourcePosition,
    /// End position (exclusive).
    pub end: SourcePosition,
}

impl SourceRange {
    /// Create a new range in `file`.
    #[must_use]
    pub fn new(file: impl Into<String>, start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            file: file.into(),
            start,
            end,
        }
    }
}

/// Severity of an analyzer warning.
///
/// Serialized as the analyzer's numeric code: 0 = error, 1 = warning, 2 = info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    /// A definite problem.
    Error,
    /// A probable problem.
    Warning,
    /// Informational note.
    Info,
}

impl Severity {
    /// Numeric wire code of this severity.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Error => 0,
            Self::Warning => 1,
            Self::Info => 2,
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = Error;

    #[allow(clippy::use_self)]
    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Severity::Error),
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Info),
            other => Err(Error::UnknownSeverity(other)),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.code()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        };
        f.write_str(name)
    }
}

/// A warning reported by the analysis engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    /// Machine-readable warning code, e.g. `"undefined-elements"`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Where the warning applies.
    pub source_range: SourceRange,
    /// Severity of the warning.
    pub severity: Severity,
}

/// A single text replacement within a fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Replacement {
    /// Range to replace; carries the target file.
    pub range: SourceRange,
    /// Text to put in place of the range.
    pub replacement_text: String,
}

impl Replacement {
    /// Create a new replacement.
    #[must_use]
    pub fn new(range: SourceRange, replacement_text: impl Into<String>) -> Self {
        Self {
            range,
            replacement_text: replacement_text.into(),
        }
    }
}

/// An ordered sequence of replacements, possibly spanning several files.
pub type Edit = Vec<Replacement>;

/// Parse a JSON array of warnings as emitted by the analyzer.
///
/// # Errors
///
/// Returns `Error::Json` if the input is malformed or a severity code is unknown.
pub fn parse_warnings(json: &str) -> Result<Vec<Warning>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a JSON array of replacements (a single fix).
///
/// # Errors
///
/// Returns `Error::Json` if the input is malformed.
pub fn parse_edit(json: &str) -> Result<Edit> {
    Ok(serde_json::from_str(json)?)
}
