use std::str::FromStr;

use coordbridge_core::analysis::{parse_edit, parse_warnings, SourcePosition, SourceRange};
use coordbridge_core::bridge::{
    lsp_to_source_position, source_to_lsp_position, source_to_lsp_range, Converter,
    OutsideRootPolicy, WorkspaceRoot,
};
use coordbridge_core::Error;
use lsp_types::{DiagnosticSeverity, DocumentChanges, NumberOrString, Position, Range, Uri};

use crate::common::test_utils::{init_tracing, read_analyzer_fixture};

#[allow(clippy::unwrap_used)]
fn converter() -> Converter {
    Converter::new(WorkspaceRoot::new("/ws").unwrap())
}

#[allow(clippy::unwrap_used)]
fn uri(s: &str) -> Uri {
    Uri::from_str(s).unwrap()
}

#[test]
fn test_position_roundtrip_both_directions() {
    for line in [0, 1, 17, 4096] {
        for character in [0, 3, 80, 65_535] {
            let lsp = Position::new(line, character);
            assert_eq!(source_to_lsp_position(lsp_to_source_position(lsp)), lsp);

            let source = SourcePosition::new(line, character);
            assert_eq!(lsp_to_source_position(source_to_lsp_position(source)), source);
        }
    }
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_range_roundtrip_keeps_file() {
    let converter = converter();
    let original = SourceRange::new(
        "elements/x-foo/x-foo.html",
        SourcePosition::new(3, 9),
        SourcePosition::new(5, 0),
    );
    let document = converter.uri_for_relative_path(&original.file).unwrap();

    let back = converter
        .lsp_to_source_range(source_to_lsp_range(&original), &document)
        .unwrap();
    assert_eq!(back.file, original.file);
    assert_eq!(back.start, original.start);
    assert_eq!(back.end, original.end);
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_path_uri_roundtrip_example() {
    let converter = converter();
    let uri = converter.uri_for_relative_path("foo/bar.html").unwrap();
    assert_eq!(uri.as_str(), "file:///ws/foo/bar.html");
    assert_eq!(converter.workspace_relative_path(&uri).unwrap(), "foo/bar.html");
}

#[test]
fn test_outside_root_is_a_recoverable_error() {
    let result = converter().workspace_relative_path(&uri("file:///tmp/elsewhere.html"));
    assert!(matches!(result, Err(Error::PathOutsideWorkspace(_))));
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_outside_root_allowed_by_policy() {
    let converter = Converter::new(
        WorkspaceRoot::new("/ws")
            .unwrap()
            .with_policy(OutsideRootPolicy::Allow),
    );
    let relative = converter
        .workspace_relative_path(&uri("file:///tmp/elsewhere.html"))
        .unwrap();
    assert_eq!(relative, "../tmp/elsewhere.html");
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_fixture_warnings_to_diagnostics() {
    init_tracing();
    let warnings = parse_warnings(&read_analyzer_fixture("warnings.json")).unwrap();
    let published = converter().warnings_to_diagnostics(&warnings).unwrap();

    assert_eq!(published.len(), 2);
    assert_eq!(published[0].uri.as_str(), "file:///ws/src/my-app.html");
    assert_eq!(published[1].uri.as_str(), "file:///ws/index.html");

    let app = &published[0].diagnostics;
    assert_eq!(app.len(), 2);
    assert_eq!(app[0].severity, Some(DiagnosticSeverity::WARNING));
    assert_eq!(app[1].severity, Some(DiagnosticSeverity::INFORMATION));
    assert_eq!(
        app[0].code,
        Some(NumberOrString::String("undefined-elements".to_string()))
    );
    assert_eq!(app[0].message, "The element paper-button is not defined");
    assert_eq!(
        app[0].range,
        Range::new(Position::new(12, 4), Position::new(12, 18))
    );

    let index = &published[1].diagnostics;
    assert_eq!(index[0].severity, Some(DiagnosticSeverity::ERROR));
    assert!(published
        .iter()
        .flat_map(|p| &p.diagnostics)
        .all(|d| d.source.as_deref() == Some("polymer-ide")));
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_fixture_fix_to_workspace_edit() {
    init_tracing();
    let fix = parse_edit(&read_analyzer_fixture("fix.json")).unwrap();
    let changes = converter().edit_to_workspace_edit(&fix).unwrap().changes.unwrap();

    assert_eq!(changes.len(), 2);
    let a = &changes[&uri("file:///ws/a.html")];
    let texts: Vec<_> = a.iter().map(|e| e.new_text.as_str()).collect();
    assert_eq!(texts, ["x", "z"]);
    assert_eq!(a[0].range, Range::new(Position::new(0, 0), Position::new(0, 3)));
    assert_eq!(a[1].range, Range::new(Position::new(7, 1), Position::new(8, 0)));

    let b = &changes[&uri("file:///ws/b.html")];
    assert_eq!(b.len(), 1);
    assert_eq!(b[0].new_text, "y");
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_fixture_fix_serializes_as_lsp_json() {
    let fix = parse_edit(&read_analyzer_fixture("fix.json")).unwrap();
    let edit = converter().edit_to_document_changes(&fix).unwrap();
    let value = serde_json::to_value(&edit).unwrap();

    let document_changes = value["documentChanges"].as_array().unwrap();
    assert_eq!(document_changes.len(), 2);
    assert_eq!(document_changes[0]["textDocument"]["uri"], "file:///ws/a.html");
    assert_eq!(document_changes[0]["edits"][1]["newText"], "z");
    assert_eq!(document_changes[1]["textDocument"]["uri"], "file:///ws/b.html");
    assert_eq!(document_changes[0]["edits"][0]["range"]["start"]["character"], 0);

    assert!(matches!(edit.document_changes, Some(DocumentChanges::Edits(_))));
}
