//! Configuration types and loading.
//!
//! This module provides the configuration for coordbridge: which
//! workspace root to resolve paths against, what to do with paths that
//! escape it, and how produced diagnostics are tagged.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bridge::{OutsideRootPolicy, DEFAULT_DIAGNOSTIC_SOURCE};
use crate::error::{Error, Result};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "COORDBRIDGE_CONFIG";

/// File name searched for in the current and user config directories.
pub const CONFIG_FILE_NAME: &str = "coordbridge.toml";

/// Main configuration for coordbridge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgeConfig {
    /// Workspace configuration.
    #[serde(default)]
    pub workspace: WorkspaceConfig,

    /// Diagnostic output configuration.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// Workspace-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceConfig {
    /// Absolute workspace root. When unset, callers supply a fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Handling of paths and URIs outside the root.
    /// Valid values: "reject", "allow"
    #[serde(default)]
    pub outside_root: OutsideRootPolicy,
}

/// Diagnostic output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// Value of the `source` field on every produced diagnostic.
    #[serde(default = "default_source")]
    pub source: String,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
        }
    }
}

fn default_source() -> String {
    DEFAULT_DIAGNOSTIC_SOURCE.to_string()
}

impl BridgeConfig {
    /// Load configuration from the default locations.
    ///
    /// Paths checked in order:
    /// 1. `$COORDBRIDGE_CONFIG` environment variable
    /// 2. `./coordbridge.toml` (current directory)
    /// 3. `~/.config/coordbridge/coordbridge.toml` (Linux/macOS)
    /// 4. `%APPDATA%\coordbridge\coordbridge.toml` (Windows)
    ///
    /// Falls back to built-in defaults when none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing config fails to parse or validate.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load_from(Path::new(&path));
        }

        let local_config = PathBuf::from(CONFIG_FILE_NAME);
        if local_config.exists() {
            return Self::load_from(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("coordbridge").join(CONFIG_FILE_NAME);
            if user_config.exists() {
                return Self::load_from(&user_config);
            }
        }

        tracing::debug!("no configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or parsing fails.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ConfigNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;

        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Error::Toml` on syntax errors and `Error::InvalidConfig` on
    /// invalid values.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.diagnostics.source.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "diagnostics.source cannot be empty".to_string(),
            ));
        }

        if let Some(root) = &self.workspace.root {
            if !root.is_absolute() {
                return Err(Error::InvalidConfig(format!(
                    "workspace.root must be absolute: {}",
                    root.display()
                )));
            }
        }

        Ok(())
    }
}
