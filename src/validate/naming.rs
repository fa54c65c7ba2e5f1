//! Workflow and task naming conventions.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Diagnostic;
use crate::locate::SourceMap;
use crate::parse::types::Document;
use crate::position::Range;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("Invalid regex pattern"));

/// Engine-level transition keywords that cannot name a task.
pub const RESERVED_TASK_NAMES: [&str; 4] = ["noop", "fail", "succeed", "pause"];

const MAX_TASK_NAME: usize = 255;
/// Joined tasks get a suffix appended by the engine.
const MAX_JOIN_TASK_NAME: usize = 208;

pub fn validate_names(
    document: &Document<'_>,
    source: &SourceMap<'_>,
    errors: &mut Vec<Diagnostic>,
) {
    for workflow in document.workflow_defs() {
        if !NAME_PATTERN.is_match(&workflow.name) {
            errors.push(Diagnostic::structural(
                format!(
                    "Workflow name '{}' must match /{}/",
                    workflow.name,
                    NAME_PATTERN.as_str()
                ),
                source.workflow(&workflow.name),
            ));
        }

        let tasks = workflow
            .task_defs()
            .into_iter()
            .map(|task| {
                let range = source.task(&workflow.name, &task.name);
                let has_join = task.has_join();
                (task.name, has_join, range)
            });
        check_task_names(&workflow.name, tasks, errors);
    }
}

/// Check one workflow's task names, given as `(name, has_join, location)`
/// in declaration order.
pub(crate) fn check_task_names(
    workflow: &str,
    tasks: impl IntoIterator<Item = (String, bool, Range)>,
    errors: &mut Vec<Diagnostic>,
) {
    let mut seen = HashSet::new();

    for (name, has_join, range) in tasks {
        if !NAME_PATTERN.is_match(&name) {
            errors.push(Diagnostic::structural(
                format!(
                    "Task name '{}' must match /{}/",
                    name,
                    NAME_PATTERN.as_str()
                ),
                range,
            ));
        }

        if RESERVED_TASK_NAMES.contains(&name.as_str()) {
            errors.push(Diagnostic::structural(
                format!(
                    "Task name '{}' must not equal one of: {}.",
                    name,
                    RESERVED_TASK_NAMES.join(", ")
                ),
                range,
            ));
        }

        let max_len = if has_join { MAX_JOIN_TASK_NAME } else { MAX_TASK_NAME };
        if name.encode_utf16().count() > max_len {
            errors.push(Diagnostic::structural(
                format!(
                    "Task name '{}' exceeds maximum length of {} characters.",
                    name, max_len
                ),
                range,
            ));
        }

        if !seen.insert(name.clone()) {
            errors.push(Diagnostic::structural(
                format!("Duplicate task name '{}' in workflow '{}'", name, workflow),
                range,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(tasks: Vec<(&str, bool)>) -> Vec<String> {
        let mut errors = Vec::new();
        check_task_names(
            "wf",
            tasks
                .into_iter()
                .map(|(n, j)| (n.to_string(), j, Range::default())),
            &mut errors,
        );
        errors.iter().map(|e| e.message().to_string()).collect()
    }

    #[test]
    fn duplicate_flags_only_later_occurrences() {
        let msgs = messages(vec![("a", false), ("b", false), ("a", false), ("a", false)]);
        assert_eq!(
            msgs,
            vec![
                "Duplicate task name 'a' in workflow 'wf'",
                "Duplicate task name 'a' in workflow 'wf'",
            ]
        );
    }

    #[test]
    fn reserved_names_are_rejected() {
        let msgs = messages(vec![("noop", false), ("pause", false), ("paused", false)]);
        assert_eq!(msgs.len(), 2);
        assert!(msgs[0].starts_with("Task name 'noop' must not equal one of: noop, fail"));
    }

    #[test]
    fn join_lowers_the_length_limit() {
        let name = "a".repeat(210);
        assert!(messages(vec![(name.as_str(), false)]).is_empty());
        let msgs = messages(vec![(name.as_str(), true)]);
        assert_eq!(
            msgs,
            vec![format!("Task name '{}' exceeds maximum length of 208 characters.", name)]
        );
    }

    #[test]
    fn pattern_rejects_uppercase_and_dots() {
        let msgs = messages(vec![("Task-One", false), ("task_two", false), ("a.b", false)]);
        assert_eq!(msgs.len(), 2);
        assert!(msgs[0].contains("'Task-One'"));
        assert!(msgs[1].contains("'a.b'"));
    }
}
