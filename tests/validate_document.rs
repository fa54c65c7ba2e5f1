//! Integration tests for document-level validation: YAML parsing, root and
//! workflow structure, per-task attributes and expression diagnostics.

#[allow(dead_code)]
mod helpers;

use helpers::*;
use mistral_lint::{DiagnosticKind, Position, validate_document};

#[test]
fn minimal_document_is_clean() {
    let diagnostics = validate_document(MINIMAL);
    assert!(diagnostics.is_empty(), "Expected no diagnostics, got: {:?}", diagnostics);
}

#[test]
fn empty_and_non_mapping_documents_are_skipped() {
    assert!(validate_document("").is_empty());
    assert!(validate_document("# just a comment\n").is_empty());
    assert!(validate_document("- a\n- b\n").is_empty());
    assert!(validate_document("plain text").is_empty());
}

#[test]
fn unsupported_version_is_the_only_finding() {
    let text = MINIMAL.replace("'2.0'", "'1.0'");
    let diagnostics = validate_document(&text);
    insta::assert_json_snapshot!(diagnostics, @r#"
    [
      {
        "kind": "structural",
        "message": "Unsupported Mistral version. Only '2.0' is supported",
        "range": {
          "start": {
            "line": 0,
            "character": 0
          },
          "end": {
            "line": 0,
            "character": 7
          }
        }
      }
    ]
    "#);
}

#[test]
fn numeric_version_is_unsupported() {
    let text = MINIMAL.replace("'2.0'", "2.0");
    let messages = validate_messages(&text);
    assert_eq!(messages, vec!["Unsupported Mistral version. Only '2.0' is supported"]);
}

#[test]
fn missing_version_is_reported() {
    let text = MINIMAL.replace("version: '2.0'\n", "");
    let diagnostics = validate_document(&text);
    let d = find(&diagnostics, "Missing 'version' field");
    // falls back to the document start
    assert_eq!(d.range(), range(0, 0, 0, 10));
}

#[test]
fn missing_workflows_anchors_at_document_start() {
    let diagnostics = validate_document("version: '2.0'\n");
    assert_eq!(diagnostics.len(), 1, "{:?}", diagnostics);
    assert!(diagnostics[0].message().contains("Missing 'workflows' section"));
    assert_eq!(diagnostics[0].start().line, 0);
    assert_eq!(diagnostics[0].range(), range(0, 0, 0, 10));
}

#[test]
fn workflows_must_be_a_mapping() {
    let diagnostics = validate_document("version: '2.0'\nworkflows: [a, b]\n");
    assert_eq!(
        messages(&diagnostics),
        vec!["'workflows' must be an object mapping workflow names to definitions"]
    );
    assert_eq!(diagnostics[0].range(), range(1, 0, 1, 9));
}

#[test]
fn yaml_errors_replace_every_other_check() {
    let diagnostics = validate_document("version: '1.0'\nworkflows: [\n");
    assert_eq!(diagnostics.len(), 1, "{:?}", diagnostics);
    assert!(diagnostics[0].message().starts_with("Error parsing YAML: "));
    assert_eq!(diagnostics[0].kind(), DiagnosticKind::Structural);
    assert_eq!(diagnostics[0].start(), Position::new(0, 0));
}

#[test]
fn duplicate_keys_are_parse_errors() {
    let text = single_workflow("      t1:\n        action: a\n      t1:\n        action: b\n");
    let messages = validate_messages(&text);
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("Error parsing YAML: "), "{:?}", messages);
}

#[test]
fn workflow_shape_errors() {
    let text = "version: '2.0'\nworkflows:\n  scalar: 5\n  empty:\n    type: direct\n  listed:\n    tasks: [a]\n";
    assert_eq!(
        validate_messages(text),
        vec![
            "Workflow 'scalar' must be an object",
            "Missing 'tasks' section in workflow 'empty'",
            "'tasks' section in workflow 'listed' must be a mapping",
        ]
    );
}

#[test]
fn task_must_be_an_object() {
    let text = single_workflow("      t1: std.noop\n");
    let diagnostics = validate_document(&text);
    let d = find(&diagnostics, "Task in workflow 'wf1' must be an object");
    assert_eq!(d.range(), range(4, 6, 4, 8));
}

#[test]
fn attribute_errors_in_report_order() {
    assert_eq!(
        validate_messages(BAD_ATTRIBUTES),
        vec![
            "Invalid workflow type 'sideways'. Must be 'direct' or 'reverse'",
            "'input' in task 'fetch' must be an object",
            "Invalid 'on-success' in task 'fetch'. Must be string or array",
            "Task 'idle' must have at least one of: action, workflow, or task-defaults",
            "'input' section in workflow 'wf1' must be an array or a mapping of default values",
            "'task-defaults' must be a mapping at workflow 'wf1'",
            "'with-items' must be a mapping",
            "'pause-before' must be a non-negative number",
            "'wait-after' must be a non-negative number",
            "'concurrency' must be an integer >= 1",
            "'join' must be one of all, any",
            "'target' must be a string expression",
            "'output-on-error' must be a mapping",
        ]
    );
}

#[test]
fn attribute_errors_point_at_their_keys() {
    let diagnostics = validate_document(BAD_ATTRIBUTES);
    assert_eq!(find(&diagnostics, "Invalid workflow type").range(), range(3, 4, 3, 8));
    assert_eq!(find(&diagnostics, "'join' must be").range(), range(15, 8, 15, 12));
    assert_eq!(find(&diagnostics, "Task 'idle'").range(), range(18, 6, 18, 10));
    // the task-level input, not the workflow-level one
    assert_eq!(find(&diagnostics, "'input' in task").range(), range(9, 8, 9, 13));
}

#[test]
fn with_items_needs_item_and_values() {
    let text = single_workflow(
        "      t1:\n        action: std.noop\n        with-items:\n          item: x\n",
    );
    assert_eq!(
        validate_messages(&text),
        vec!["'with-items' requires both 'item' and 'values' keys"]
    );
}

#[test]
fn explicit_null_attributes_are_invalid() {
    let text = single_workflow(
        "      t1:\n        action: std.noop\n        concurrency:\n        join: ~\n",
    );
    assert_eq!(
        validate_messages(&text),
        vec![
            "'concurrency' must be an integer >= 1",
            "'join' must be one of all, any",
        ]
    );
}

#[test]
fn valid_attributes_pass() {
    let text = single_workflow(
        "      t1:\n        action: std.noop\n        pause-before: 1.5\n        wait-after: 0\n        concurrency: 4\n        join: all\n        target: <% $.host %>\n        output-on-error:\n          reason: failed\n        on-error: t2\n      t2:\n        workflow: cleanup\n",
    );
    let messages = validate_messages(&text);
    // `$.host` is never declared; nothing else is wrong
    assert_eq!(
        messages,
        vec!["Unknown YAQL variable '$.host' in task 't1' of workflow 'wf1'"]
    );
}

#[test]
fn lexical_errors_point_inside_the_expression() {
    let text = "version: '2.0'\nworkflows:\n  wf1:\n    input:\n      - x\n    tasks:\n      t1:\n        action: std.echo\n        input:\n          output: <% ($.x + 1 %>\n";
    let diagnostics = validate_document(text);
    assert_eq!(diagnostics.len(), 1, "{:?}", diagnostics);
    let d = &diagnostics[0];
    assert_eq!(d.kind(), DiagnosticKind::Lexical);
    assert_eq!(d.message(), "Unclosed parenthesis");
    assert_eq!(d.start(), Position::new(9, 21));
    assert_eq!(d.display_message(), "YAQL syntax error: Unclosed parenthesis");
}

#[test]
fn structural_findings_precede_expression_findings() {
    let text = "version: '3'\nworkflows:\n  wf1:\n    tasks:\n      t1:\n        action: std.echo output=<% @ %>\n";
    let diagnostics = validate_document(text);
    assert_eq!(
        messages(&diagnostics),
        vec![
            "Unsupported Mistral version. Only '2.0' is supported",
            "Unexpected character: @",
        ]
    );
    assert_eq!(diagnostics[1].start(), Position::new(5, 35));
    assert_eq!(diagnostics[0].display_message(), "Mistral error: Unsupported Mistral version. Only '2.0' is supported");
}

#[test]
fn validation_is_idempotent() {
    for text in [MINIMAL, BAD_ATTRIBUTES, DATA_FLOW, REACHABILITY] {
        assert_eq!(validate_document(text), validate_document(text));
    }
}
