//! Reachability over `requires` edges.
//!
//! Only `requires` is considered: a task reached solely through
//! `on-success`/`on-error`/`on-complete` is still reported.

use std::collections::HashSet;

use crate::error::Diagnostic;
use crate::locate::SourceMap;
use crate::parse::types::{Document, Requires, WorkflowDef};

pub fn validate_orphans(
    document: &Document<'_>,
    source: &SourceMap<'_>,
    errors: &mut Vec<Diagnostic>,
) {
    for workflow in document.workflow_defs() {
        for orphan in unreachable_tasks(&workflow) {
            errors.push(Diagnostic::structural(
                format!(
                    "Orphan task '{}' is not reachable from any entry in workflow '{}'",
                    orphan, workflow.name
                ),
                source.task(&workflow.name, &orphan),
            ));
        }
    }
}

/// Tasks never reached from an entry task (no or empty `requires`), in
/// declaration order. A task joins the reachable set once every task it
/// requires has joined it; iterate to a fixed point.
pub fn unreachable_tasks(workflow: &WorkflowDef<'_>) -> Vec<String> {
    let tasks: Vec<(String, Requires)> = workflow
        .task_defs()
        .into_iter()
        .map(|t| {
            let requires = t.requires();
            (t.name, requires)
        })
        .collect();

    let mut reachable: HashSet<&str> = tasks
        .iter()
        .filter(|(_, req)| *req == Requires::None)
        .map(|(name, _)| name.as_str())
        .collect();

    loop {
        let mut added = false;
        for (name, requires) in &tasks {
            if reachable.contains(name.as_str()) {
                continue;
            }
            if let Requires::List(deps) = requires {
                if deps.iter().all(|d| reachable.contains(d.as_str())) {
                    reachable.insert(name.as_str());
                    added = true;
                }
            }
        }
        if !added {
            break;
        }
    }

    tasks
        .iter()
        .filter(|(name, _)| !reachable.contains(name.as_str()))
        .map(|(name, _)| name.clone())
        .collect()
}
