//! # coordbridge-core
//!
//! Translation between a source-analysis engine's view of files and the
//! Language Server Protocol's.
//!
//! The analyzer names files by workspace-relative paths, positions by
//! `{line, column}` and reports warnings with its own three-level severity.
//! LSP names files by `file://` URIs, positions by `{line, character}` and
//! has its own diagnostic and workspace-edit shapes. This crate maps one onto
//! the other without doing any analysis or I/O of its own.
//!
//! ## Architecture
//!
//! - [`analysis`] - Analyzer-side types (positions, ranges, warnings, edits)
//! - [`bridge`] - Conversion to and from LSP types, path/URI resolution
//! - [`config`] - Configuration types and loading
//! - [`error`] - Error types for the library
//!
//! ## Example
//!
//! ```rust,ignore
//! use coordbridge_core::bridge::{Converter, WorkspaceRoot};
//!
//! let converter = Converter::new(WorkspaceRoot::new("/ws")?);
//! let workspace_edit = converter.edit_to_workspace_edit(&fix)?;
//! ```

pub mod analysis;
pub mod bridge;
pub mod config;
pub mod error;

pub use bridge::{Converter, OutsideRootPolicy, WorkspaceRoot};
pub use config::BridgeConfig;
pub use error::{Error, Result};
