//! Workspace root and path/URI resolution.
//!
//! The analyzer names files by workspace-relative, `/`-separated paths while
//! LSP names them by absolute `file://` URIs. [`WorkspaceRoot`] holds the one
//! absolute directory both are measured against.

use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use lsp_types::Uri;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};
use url::Url;

use crate::error::{Error, Result};

/// Characters WHATWG leaves raw in file paths but RFC 3986 forbids.
const URI_PATH_EXTRA: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b']')
    .add(b'^')
    .add(b'|')
    .add(b'{')
    .add(b'}')
    .add(b'`')
    .add(b'\\');

/// What to do when a path or URI resolves outside the workspace root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutsideRootPolicy {
    /// Fail with [`Error::PathOutsideWorkspace`].
    #[default]
    Reject,
    /// Produce escaping relative paths (with `..` segments).
    Allow,
}

/// Absolute workspace directory that relative paths are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRoot {
    path: PathBuf,
    policy: OutsideRootPolicy,
}

impl WorkspaceRoot {
    /// Create a workspace root from an absolute directory path.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWorkspaceRoot` if `path` is not absolute.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_absolute() {
            return Err(Error::InvalidWorkspaceRoot(path));
        }
        Ok(Self {
            path: normalize(&path),
            policy: OutsideRootPolicy::default(),
        })
    }

    /// Create a workspace root from a `file://` URI.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidUri` if the URI is not a decodable file URI.
    pub fn from_uri(uri: &str) -> Result<Self> {
        Self::new(uri_to_file_path(uri)?)
    }

    /// Set the policy for paths that escape the root.
    #[must_use]
    pub const fn with_policy(mut self, policy: OutsideRootPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The absolute root directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The configured outside-root policy.
    #[must_use]
    pub const fn policy(&self) -> OutsideRootPolicy {
        self.policy
    }

    /// Compute the workspace-relative path of a document URI.
    ///
    /// The URI is decoded to a filesystem path first (percent-escapes and
    /// platform separators), then made relative to the root. The result uses
    /// `/` separators; the root itself maps to the empty string.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidUri` for non-file or undecodable URIs and
    /// `Error::PathOutsideWorkspace` if the document is outside the root
    /// under [`OutsideRootPolicy::Reject`].
    pub fn relative_path(&self, document: &Uri) -> Result<String> {
        let absolute = normalize(&uri_to_file_path(document.as_str())?);

        if let Ok(rest) = absolute.strip_prefix(&self.path) {
            let relative = join_segments(rest);
            trace!(uri = %document.as_str(), relative = %relative, "resolved document path");
            return Ok(relative);
        }

        match self.policy {
            OutsideRootPolicy::Reject => Err(Error::PathOutsideWorkspace(absolute)),
            OutsideRootPolicy::Allow => {
                let relative = escaping_relative(&self.path, &absolute);
                warn!(
                    uri = %document.as_str(),
                    relative = %relative,
                    "document lies outside the workspace root"
                );
                Ok(relative)
            }
        }
    }

    /// Resolve a workspace-relative path to a `file://` URI.
    ///
    /// Segments are joined lexically: empty and `.` segments are dropped,
    /// `..` removes the previous segment. A leading `/` is still relative to
    /// the root.
    ///
    /// # Errors
    ///
    /// Returns `Error::PathOutsideWorkspace` if `..` segments climb above the
    /// root under [`OutsideRootPolicy::Reject`], and `Error::InvalidUri` if the
    /// joined path cannot be encoded.
    pub fn uri_for(&self, relative: &str) -> Result<Uri> {
        let absolute = self.resolve(relative)?;
        let url = Url::from_file_path(&absolute).map_err(|()| {
            Error::InvalidUri(format!("cannot encode path: {}", absolute.display()))
        })?;
        let encoded = format!(
            "file://{}{}",
            url.host_str().unwrap_or_default(),
            utf8_percent_encode(url.path(), URI_PATH_EXTRA)
        );
        Uri::from_str(&encoded).map_err(|_| Error::InvalidUri(encoded))
    }

    fn resolve(&self, relative: &str) -> Result<PathBuf> {
        let mut resolved = self.path.clone();
        let mut depth = 0usize;

        for segment in relative.split('/') {
            match segment {
                "" | "." => {}
                ".." if depth > 0 => {
                    resolved.pop();
                    depth -= 1;
                }
                ".." => match self.policy {
                    OutsideRootPolicy::Reject => {
                        return Err(Error::PathOutsideWorkspace(self.path.join(relative)));
                    }
                    OutsideRootPolicy::Allow => {
                        resolved.pop();
                    }
                },
                name => {
                    resolved.push(name);
                    depth += 1;
                }
            }
        }

        Ok(resolved)
    }
}

/// Decode a `file://` URI string into a filesystem path.
fn uri_to_file_path(uri: &str) -> Result<PathBuf> {
    let url = Url::parse(uri).map_err(|e| Error::InvalidUri(format!("{uri}: {e}")))?;
    if url.scheme() != "file" {
        return Err(Error::InvalidUri(format!(
            "{uri}: unsupported scheme '{}'",
            url.scheme()
        )));
    }
    url.to_file_path()
        .map_err(|()| Error::InvalidUri(format!("{uri}: not a local file path")))
}

/// Lexically resolve `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Join the normal components of a relative path with `/`.
fn join_segments(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Relative path from `base` to `target`, climbing with `..` as needed.
fn escaping_relative(base: &Path, target: &Path) -> String {
    let base: Vec<_> = base.components().collect();
    let target: Vec<_> = target.components().collect();
    let common = base
        .iter()
        .zip(&target)
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<String> =
        std::iter::repeat_n("..".to_string(), base.len() - common).collect();
    segments.extend(target[common..].iter().filter_map(|c| match c {
        Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
        _ => None,
    }));
    segments.join("/")
}
