//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Analyzer to LSP converter
///
/// Reads analyzer warnings or fixes as JSON and prints the equivalent
/// LSP diagnostics or workspace edits.
#[derive(Debug, Parser)]
#[command(name = "coordbridge")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to configuration file
    ///
    /// If not specified, searches for coordbridge.toml in:
    /// 1. $COORDBRIDGE_CONFIG environment variable
    /// 2. Current directory
    /// 3. ~/.config/coordbridge/coordbridge.toml
    #[arg(short, long, value_name = "FILE", env = "COORDBRIDGE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Workspace root (overrides the configuration file)
    ///
    /// Defaults to the current directory when neither is set.
    #[arg(short, long, value_name = "DIR", global = true)]
    pub workspace_root: Option<PathBuf>,

    /// Logging level
    ///
    /// Valid values: trace, debug, info, warn, error
    #[arg(
        short,
        long,
        default_value = "info",
        env = "COORDBRIDGE_LOG",
        global = true
    )]
    pub log_level: String,

    /// Output logs as JSON (for structured logging)
    #[arg(long, default_value = "false", env = "COORDBRIDGE_LOG_JSON", global = true)]
    pub log_json: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Conversion commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert analyzer warnings to LSP publishDiagnostics parameters
    Diagnostics {
        /// JSON file with an array of warnings ("-" for stdin)
        #[arg(value_name = "INPUT", default_value = "-")]
        input: PathBuf,
    },

    /// Convert an analyzer fix to an LSP workspace edit
    Fix {
        /// JSON file with an array of replacements ("-" for stdin)
        #[arg(value_name = "INPUT", default_value = "-")]
        input: PathBuf,

        /// Emit ordered documentChanges instead of the changes map
        #[arg(long)]
        ordered: bool,
    },

    /// Print the URI of a workspace-relative path
    Uri {
        /// Workspace-relative path
        path: String,
    },

    /// Print the workspace-relative path of a document URI
    Path {
        /// Document URI
        uri: String,
    },
}
