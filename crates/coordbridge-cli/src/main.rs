//! coordbridge - analyzer to LSP converter
//!
//! This binary reads analyzer warnings and fixes as JSON and prints the
//! matching LSP diagnostics and workspace edits.

use anyhow::{Context, Result};
use clap::Parser;

mod args;
mod commands;
mod logging;

use args::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    logging::init(&args.log_level, args.log_json)?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting coordbridge");

    // Load configuration
    let config = if let Some(config_path) = &args.config {
        coordbridge_core::BridgeConfig::load_from(config_path)
            .with_context(|| format!("failed to load config from {}", config_path.display()))?
    } else {
        coordbridge_core::BridgeConfig::load().context("failed to load configuration")?
    };

    let converter = commands::build_converter(&config, args.workspace_root.as_deref())?;

    let mut stdout = std::io::stdout().lock();
    commands::run(&converter, &args.command, &mut stdout)
}
