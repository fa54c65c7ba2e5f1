//! Forward-only variable scope: a task may read workflow inputs, variables
//! published by tasks declared before it, and its own `with-items` item.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Diagnostic;
use crate::locate::SourceMap;
use crate::parse::types::{Document, WorkflowDef};
use crate::yaql::ExpressionOccurrence;

static VARIABLE_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\.([A-Za-z_][A-Za-z0-9_]*)").expect("Invalid regex pattern")
});
static TASK_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"task\(['"]([A-Za-z0-9_-]+)['"]\)"#).expect("Invalid regex pattern")
});

pub fn validate_variable_refs(
    document: &Document<'_>,
    source: &SourceMap<'_>,
    expressions: &[ExpressionOccurrence],
    errors: &mut Vec<Diagnostic>,
) {
    for workflow in document.workflow_defs() {
        if workflow.mapping().is_some() {
            validate_workflow_scope(&workflow, source, expressions, errors);
        }
    }
}

fn validate_workflow_scope(
    workflow: &WorkflowDef<'_>,
    source: &SourceMap<'_>,
    expressions: &[ExpressionOccurrence],
    errors: &mut Vec<Diagnostic>,
) {
    let mut in_scope: HashSet<String> = workflow.input_names().into_iter().collect();

    for task in workflow.task_defs() {
        let local = task.with_items_item();

        let block = source.task_block(&workflow.name, &task.name);
        for expr in expressions
            .iter()
            .filter(|e| block.contains(e.range.start.line))
        {
            for caps in VARIABLE_REF.captures_iter(&expr.text) {
                let var = &caps[1];
                if !in_scope.contains(var) && local != Some(var) {
                    errors.push(Diagnostic::structural(
                        format!(
                            "Unknown YAQL variable '$.{}' in task '{}' of workflow '{}'",
                            var, task.name, workflow.name
                        ),
                        expr.range,
                    ));
                }
            }

            for caps in TASK_REF.captures_iter(&expr.text) {
                let target = &caps[1];
                if !workflow.has_task(target) {
                    errors.push(Diagnostic::structural(
                        format!(
                            "Unknown task reference '{}' in YAQL expression of task '{}'",
                            target, task.name
                        ),
                        expr.range,
                    ));
                }
            }
        }

        in_scope.extend(task.publish_keys());
        in_scope.extend(local.map(String::from));
    }
}
