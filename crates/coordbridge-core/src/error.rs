//! Error types for coordbridge-core.
//!
//! This module defines the canonical error type for the library. Conversions
//! themselves only fail on path/URI resolution; everything else here belongs
//! to the boundaries (configuration files and engine JSON).

use std::path::PathBuf;

/// The main error type for coordbridge-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// URI could not be parsed, is not a `file:` URI, or could not be built from a path.
    #[error("invalid URI: {0}")]
    InvalidUri(String),

    /// Resolved path lies outside the configured workspace root.
    #[error("path outside workspace: {0}")]
    PathOutsideWorkspace(PathBuf),

    /// Workspace root is not an absolute path.
    #[error("invalid workspace root (must be absolute): {0}")]
    InvalidWorkspaceRoot(PathBuf),

    /// Severity code outside the analysis engine's enumeration.
    #[error("unknown analyzer severity code: {0}")]
    UnknownSeverity(u8),

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Invalid configuration format.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A specialized Result type for coordbridge-core operations.
pub type Result<T> = std::result::Result<T, Error>;
