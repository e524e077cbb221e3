//! Subcommand execution.

use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use coordbridge_core::analysis::{parse_edit, parse_warnings};
use coordbridge_core::{BridgeConfig, Converter};
use lsp_types::Uri;

use crate::args::Command;

/// Build the converter, preferring an explicit root over the configured one.
///
/// # Errors
///
/// Returns an error if no usable absolute root can be determined.
pub fn build_converter(config: &BridgeConfig, root_override: Option<&Path>) -> Result<Converter> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;

    let mut config = config.clone();
    if let Some(root) = root_override {
        // Relative overrides are taken relative to the current directory
        config.workspace.root = Some(cwd.join(root));
    }

    Converter::from_config(&config, &cwd).context("failed to set up workspace root")
}

/// Run a command, writing its output to `out`.
///
/// # Errors
///
/// Returns an error if input cannot be read or parsed, or conversion fails.
pub fn run(converter: &Converter, command: &Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Diagnostics { input } => {
            let warnings = parse_warnings(&read_input(input)?)
                .with_context(|| format!("failed to parse warnings from {}", input.display()))?;
            tracing::info!(count = warnings.len(), "converting warnings");
            let published = converter
                .warnings_to_diagnostics(&warnings)
                .context("failed to convert warnings")?;
            write_json(out, &published)
        }
        Command::Fix { input, ordered } => {
            let edit = parse_edit(&read_input(input)?)
                .with_context(|| format!("failed to parse fix from {}", input.display()))?;
            tracing::info!(replacements = edit.len(), ordered, "converting fix");
            let workspace_edit = if *ordered {
                converter.edit_to_document_changes(&edit)
            } else {
                converter.edit_to_workspace_edit(&edit)
            }
            .context("failed to convert fix")?;
            write_json(out, &workspace_edit)
        }
        Command::Uri { path } => {
            let uri = converter
                .uri_for_relative_path(path)
                .with_context(|| format!("failed to resolve {path}"))?;
            writeln!(out, "{}", uri.as_str())?;
            Ok(())
        }
        Command::Path { uri } => {
            let document =
                Uri::from_str(uri).map_err(|_| anyhow::anyhow!("invalid URI: {uri}"))?;
            let path = converter
                .workspace_relative_path(&document)
                .with_context(|| format!("failed to resolve {uri}"))?;
            writeln!(out, "{path}")?;
            Ok(())
        }
    }
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))
    }
}

fn write_json(out: &mut impl Write, value: &impl serde::Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to write JSON")?;
    writeln!(out)?;
    Ok(())
}
