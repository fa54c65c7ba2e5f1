//! Root, workflow and task shape rules.

use serde_yaml::Value;

use crate::error::Diagnostic;
use crate::locate::SourceMap;
use crate::parse::types::{
    Document, TRANSITION_KEYS, TaskDef, WorkflowDef, as_mapping, as_sequence, as_str, present,
    scalar_text, untag,
};

const SUPPORTED_VERSION: &str = "2.0";
const WORKFLOW_TYPES: [&str; 2] = ["direct", "reverse"];
const JOIN_MODES: [&str; 2] = ["all", "any"];

/// Root, workflow and per-task shape checks, in document order.
pub fn validate_structure(
    document: &Document<'_>,
    source: &SourceMap<'_>,
    errors: &mut Vec<Diagnostic>,
) {
    check_version(document, source, errors);

    match document.workflows_value() {
        None => errors.push(Diagnostic::structural(
            "Missing 'workflows' section in Mistral definition",
            source.document_start(),
        )),
        Some(value) if as_mapping(value).is_none() => errors.push(Diagnostic::structural(
            "'workflows' must be an object mapping workflow names to definitions",
            source.root_key("workflows"),
        )),
        Some(_) => {
            for workflow in document.workflow_defs() {
                validate_workflow(&workflow, source, errors);
            }
        }
    }
}

fn check_version(
    document: &Document<'_>,
    source: &SourceMap<'_>,
    errors: &mut Vec<Diagnostic>,
) {
    match document.version() {
        None => errors.push(Diagnostic::structural(
            "Missing 'version' field in workflow definition",
            source.root_key("version"),
        )),
        Some(v) if as_str(v) != Some(SUPPORTED_VERSION) => errors.push(Diagnostic::structural(
            format!(
                "Unsupported Mistral version. Only '{}' is supported",
                SUPPORTED_VERSION
            ),
            source.root_key("version"),
        )),
        Some(_) => {}
    }
}

fn validate_workflow(
    workflow: &WorkflowDef<'_>,
    source: &SourceMap<'_>,
    errors: &mut Vec<Diagnostic>,
) {
    let name = workflow.name.as_str();

    if workflow.mapping().is_none() {
        errors.push(Diagnostic::structural(
            format!("Workflow '{}' must be an object", name),
            source.workflow(name),
        ));
        return;
    }

    if let Some(kind) = workflow.get("type") {
        if !as_str(kind).is_some_and(|k| WORKFLOW_TYPES.contains(&k)) {
            errors.push(Diagnostic::structural(
                format!(
                    "Invalid workflow type '{}'. Must be 'direct' or 'reverse'",
                    scalar_text(kind)
                ),
                source.workflow_key(name, "type"),
            ));
        }
    }

    match workflow.get("tasks") {
        None => errors.push(Diagnostic::structural(
            format!("Missing 'tasks' section in workflow '{}'", name),
            source.workflow(name),
        )),
        Some(tasks) if as_mapping(tasks).is_none() => errors.push(Diagnostic::structural(
            format!("'tasks' section in workflow '{}' must be a mapping", name),
            source.workflow_key(name, "tasks"),
        )),
        Some(_) => {
            for task in workflow.task_defs() {
                validate_task(name, &task, source, errors);
            }
        }
    }

    if let Some(input) = workflow.get("input") {
        if as_sequence(input).is_none() && as_mapping(input).is_none() {
            errors.push(Diagnostic::structural(
                format!(
                    "'input' section in workflow '{}' must be an array or a mapping of default values",
                    name
                ),
                source.workflow_key(name, "input"),
            ));
        }
    }

    if let Some(defaults) = workflow.get("task-defaults") {
        if as_mapping(defaults).is_none() {
            errors.push(Diagnostic::structural(
                format!("'task-defaults' must be a mapping at workflow '{}'", name),
                source.workflow_key(name, "task-defaults"),
            ));
        }
    }

    for task in workflow.task_defs() {
        validate_task_attributes(name, &task, source, errors);
    }
}

/// Basic task rules: shape, action/workflow, input, transitions.
fn validate_task(
    workflow: &str,
    task: &TaskDef<'_>,
    source: &SourceMap<'_>,
    errors: &mut Vec<Diagnostic>,
) {
    let name = task.name.as_str();

    if task.mapping().is_none() {
        errors.push(Diagnostic::structural(
            format!("Task in workflow '{}' must be an object", workflow),
            source.task(workflow, name),
        ));
        return;
    }

    if name.is_empty() {
        errors.push(Diagnostic::structural(
            format!("Missing 'name' field in task in workflow '{}'", workflow),
            source.workflow_key(workflow, "tasks"),
        ));
    }

    if ["action", "workflow", "task-defaults"]
        .iter()
        .all(|key| task.get(key).is_none())
    {
        errors.push(Diagnostic::structural(
            format!(
                "Task '{}' must have at least one of: action, workflow, or task-defaults",
                name
            ),
            source.task(workflow, name),
        ));
    }

    if let Some(input) = task.get("input") {
        if as_mapping(input).is_none() {
            errors.push(Diagnostic::structural(
                format!("'input' in task '{}' must be an object", name),
                source.task_key(workflow, name, "input"),
            ));
        }
    }

    for key in TRANSITION_KEYS {
        if let Some(transition) = task.get(key) {
            if !is_valid_transition(transition) {
                errors.push(Diagnostic::structural(
                    format!("Invalid '{}' in task '{}'. Must be string or array", key, name),
                    source.task_key(workflow, name, key),
                ));
            }
        }
    }
}

fn is_valid_transition(value: &Value) -> bool {
    match untag(value) {
        Value::String(_) => true,
        Value::Sequence(items) => items
            .iter()
            .all(|item| matches!(untag(item), Value::String(_) | Value::Mapping(_))),
        _ => false,
    }
}

/// Extended task attributes, applied whatever the workflow type.
fn validate_task_attributes(
    workflow: &str,
    task: &TaskDef<'_>,
    source: &SourceMap<'_>,
    errors: &mut Vec<Diagnostic>,
) {
    if task.mapping().is_none() {
        return;
    }
    let name = task.name.as_str();
    let mut report = |key: &str, message: String| {
        errors.push(Diagnostic::structural(message, source.task_key(workflow, name, key)));
    };

    if let Some(with_items) = task.get("with-items") {
        match as_mapping(with_items) {
            None => report("with-items", "'with-items' must be a mapping".to_string()),
            Some(m) if present(m, "item").is_none() || present(m, "values").is_none() => report(
                "with-items",
                "'with-items' requires both 'item' and 'values' keys".to_string(),
            ),
            Some(_) => {}
        }
    }

    for key in ["pause-before", "wait-after"] {
        if let Some(value) = task.field(key) {
            if !untag(value).as_f64().is_some_and(|n| n >= 0.0) {
                report(key, format!("'{}' must be a non-negative number", key));
            }
        }
    }

    if let Some(value) = task.field("concurrency") {
        if !is_positive_integer(value) {
            report(
                "concurrency",
                "'concurrency' must be an integer >= 1".to_string(),
            );
        }
    }

    if let Some(value) = task.field("join") {
        if !as_str(value).is_some_and(|j| JOIN_MODES.contains(&j)) {
            report(
                "join",
                format!("'join' must be one of {}", JOIN_MODES.join(", ")),
            );
        }
    }

    if let Some(value) = task.get("target") {
        if as_str(value).is_none() {
            report("target", "'target' must be a string expression".to_string());
        }
    }

    if let Some(value) = task.get("output-on-error") {
        if as_mapping(value).is_none() {
            report(
                "output-on-error",
                "'output-on-error' must be a mapping".to_string(),
            );
        }
    }
}

fn is_positive_integer(value: &Value) -> bool {
    match untag(value) {
        Value::Number(n) => n.as_u64().is_some_and(|n| n >= 1),
        _ => false,
    }
}
