//! Analyzer to LSP conversion.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use lsp_types::{
    Diagnostic, DiagnosticSeverity, DocumentChanges, Location, NumberOrString, OneOf,
    OptionalVersionedTextDocumentIdentifier, PublishDiagnosticsParams, Range, TextDocumentEdit,
    TextEdit, Uri, WorkspaceEdit,
};
use tracing::debug;

use super::position::{lsp_to_source_range_in, source_to_lsp_range};
use super::workspace::{OutsideRootPolicy, WorkspaceRoot};
use crate::analysis::{Replacement, Severity, SourceRange, Warning};
use crate::config::BridgeConfig;
use crate::error::Result;

/// Identifier placed in the `source` field of every produced diagnostic.
pub const DEFAULT_DIAGNOSTIC_SOURCE: &str = "polymer-ide";

/// Text edits for one file, in the order they were produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEdits {
    /// Target document.
    pub uri: Uri,
    /// Edits to apply to the document.
    pub edits: Vec<TextEdit>,
}

/// Converts between analyzer types and LSP types for one workspace.
///
/// The workspace root and diagnostic source are fixed at construction; every
/// method is a pure function of its arguments and that state.
#[derive(Debug, Clone)]
pub struct Converter {
    root: WorkspaceRoot,
    source: String,
}

impl Converter {
    /// Create a converter for the given workspace root.
    #[must_use]
    pub fn new(root: WorkspaceRoot) -> Self {
        Self {
            root,
            source: DEFAULT_DIAGNOSTIC_SOURCE.to_string(),
        }
    }

    /// Override the `source` tag used on produced diagnostics.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Build a converter from configuration.
    ///
    /// `fallback_root` is used when the configuration names no root.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWorkspaceRoot` if the chosen root is not absolute.
    pub fn from_config(config: &BridgeConfig, fallback_root: &Path) -> Result<Self> {
        let root_path: PathBuf = config
            .workspace
            .root
            .clone()
            .unwrap_or_else(|| fallback_root.to_path_buf());
        let root = WorkspaceRoot::new(root_path)?.with_policy(config.workspace.outside_root);

        debug!(
            root = %root.path().display(),
            policy = ?root.policy(),
            source = %config.diagnostics.source,
            "converter configured"
        );

        Ok(Self::new(root).with_source(config.diagnostics.source.clone()))
    }

    /// The workspace root.
    #[must_use]
    pub const fn root(&self) -> &WorkspaceRoot {
        &self.root
    }

    /// The `source` tag used on produced diagnostics.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The outside-root policy of the workspace root.
    #[must_use]
    pub const fn policy(&self) -> OutsideRootPolicy {
        self.root.policy()
    }

    /// Workspace-relative path of a document.
    ///
    /// # Errors
    ///
    /// See [`WorkspaceRoot::relative_path`].
    pub fn workspace_relative_path(&self, document: &Uri) -> Result<String> {
        self.root.relative_path(document)
    }

    /// URI of a workspace-relative path.
    ///
    /// # Errors
    ///
    /// See [`WorkspaceRoot::uri_for`].
    pub fn uri_for_relative_path(&self, path: &str) -> Result<Uri> {
        self.root.uri_for(path)
    }

    /// Convert an LSP range within `document` to an analyzer range.
    ///
    /// # Errors
    ///
    /// Returns an error if the document URI cannot be resolved against the root.
    pub fn lsp_to_source_range(&self, range: Range, document: &Uri) -> Result<SourceRange> {
        let file = self.workspace_relative_path(document)?;
        Ok(lsp_to_source_range_in(range, file))
    }

    /// Pair an analyzer range's file URI with its converted range.
    ///
    /// # Errors
    ///
    /// Returns an error if the range's file cannot be resolved to a URI.
    pub fn source_range_to_location(&self, range: &SourceRange) -> Result<Location> {
        Ok(Location {
            uri: self.uri_for_relative_path(&range.file)?,
            range: source_to_lsp_range(range),
        })
    }

    /// Convert an analyzer warning to an LSP diagnostic.
    #[must_use]
    pub fn warning_to_diagnostic(&self, warning: &Warning) -> Diagnostic {
        Diagnostic {
            range: source_to_lsp_range(&warning.source_range),
            severity: Some(convert_severity(warning.severity)),
            code: Some(NumberOrString::String(warning.code.clone())),
            code_description: None,
            source: Some(self.source.clone()),
            message: warning.message.clone(),
            related_information: None,
            tags: None,
            data: None,
        }
    }

    /// Convert a batch of warnings, grouped per document.
    ///
    /// Documents appear in the order their first warning does; diagnostics
    /// keep input order within a document.
    ///
    /// # Errors
    ///
    /// Returns an error if any warning's file cannot be resolved to a URI.
    pub fn warnings_to_diagnostics(
        &self,
        warnings: &[Warning],
    ) -> Result<Vec<PublishDiagnosticsParams>> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut published: Vec<PublishDiagnosticsParams> = Vec::new();

        for warning in warnings {
            let uri = self.uri_for_relative_path(&warning.source_range.file)?;
            let key = uri.as_str().to_string();
            let slot = if let Some(&slot) = index.get(&key) {
                slot
            } else {
                published.push(PublishDiagnosticsParams::new(uri, Vec::new(), None));
                index.insert(key, published.len() - 1);
                published.len() - 1
            };
            published[slot]
                .diagnostics
                .push(self.warning_to_diagnostic(warning));
        }

        debug!(
            warnings = warnings.len(),
            documents = published.len(),
            "converted warnings"
        );
        Ok(published)
    }

    /// Group an edit's replacements into per-file text edits.
    ///
    /// Buckets are created on first use and keep first-occurrence order;
    /// edits within a bucket keep input order.
    ///
    /// # Errors
    ///
    /// Returns an error if any replacement's file cannot be resolved to a URI.
    pub fn group_edit(&self, edit: &[Replacement]) -> Result<Vec<FileEdits>> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<FileEdits> = Vec::new();

        for replacement in edit {
            let uri = self.uri_for_relative_path(&replacement.range.file)?;
            let key = uri.as_str().to_string();
            let slot = if let Some(&slot) = index.get(&key) {
                slot
            } else {
                groups.push(FileEdits {
                    uri,
                    edits: Vec::new(),
                });
                index.insert(key, groups.len() - 1);
                groups.len() - 1
            };
            groups[slot].edits.push(TextEdit::new(
                source_to_lsp_range(&replacement.range),
                replacement.replacement_text.clone(),
            ));
        }

        debug!(
            replacements = edit.len(),
            files = groups.len(),
            "grouped edit"
        );
        Ok(groups)
    }

    /// Convert an edit to a workspace edit using the `changes` map.
    ///
    /// # Errors
    ///
    /// Returns an error if any replacement's file cannot be resolved to a URI.
    pub fn edit_to_workspace_edit(&self, edit: &[Replacement]) -> Result<WorkspaceEdit> {
        let changes: HashMap<Uri, Vec<TextEdit>> = self
            .group_edit(edit)?
            .into_iter()
            .map(|group| (group.uri, group.edits))
            .collect();
        Ok(WorkspaceEdit::new(changes))
    }

    /// Convert an edit to a workspace edit using ordered `documentChanges`.
    ///
    /// Unlike the `changes` map this keeps the order in which files first
    /// appear in the edit.
    ///
    /// # Errors
    ///
    /// Returns an error if any replacement's file cannot be resolved to a URI.
    pub fn edit_to_document_changes(&self, edit: &[Replacement]) -> Result<WorkspaceEdit> {
        let edits = self
            .group_edit(edit)?
            .into_iter()
            .map(|group| TextDocumentEdit {
                text_document: OptionalVersionedTextDocumentIdentifier {
                    uri: group.uri,
                    version: None,
                },
                edits: group.edits.into_iter().map(OneOf::Left).collect(),
            })
            .collect();

        Ok(WorkspaceEdit {
            changes: None,
            document_changes: Some(DocumentChanges::Edits(edits)),
            change_annotations: None,
        })
    }
}

/// Map an analyzer severity to the LSP severity.
#[must_use]
pub const fn convert_severity(severity: Severity) -> DiagnosticSeverity {
    match severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
        Severity::Info => DiagnosticSeverity::INFORMATION,
    }
}

/// Map a raw analyzer severity code to the LSP severity.
///
/// # Panics
///
/// Panics if `code` is not a known analyzer severity. An unknown code means
/// the analyzer and this crate disagree on the severity enumeration; no
/// fallback severity is guessed.
#[must_use]
pub fn convert_severity_code(code: u8) -> DiagnosticSeverity {
    match Severity::try_from(code) {
        Ok(severity) => convert_severity(severity),
        Err(err) => panic!("analyzer severity contract violated: {err}"),
    }
}
