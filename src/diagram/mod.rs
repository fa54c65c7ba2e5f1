//! Graphviz rendering of every workflow's task graph.

pub mod writer;

use serde_yaml::Value;

use crate::parse::{Document, TaskGraph, WorkflowDef, parse_yaml};

use writer::{DotWriter, quote};

/// Render `text` as a `digraph mistral` with one dashed cluster per workflow.
///
/// Nodes are `"workflow.task"`. Edges follow [`TaskGraph`] (requires edges
/// point from the dependency) and carry a label for `on-error` and
/// `on-complete`. A `with-items` task gets a self-loop labelled with its item
/// name. Text that does not parse renders as an empty graph.
pub fn to_dot(text: &str) -> String {
    let value = parse_yaml(text).unwrap_or(Value::Null);
    let mut w = DotWriter::new();

    w.block_open("digraph mistral");
    w.line("rankdir=LR;");
    w.line("node [shape=box, style=rounded];");

    if let Some(document) = Document::from_value(&value) {
        for workflow in document.workflow_defs() {
            write_cluster(&mut w, &workflow);
        }
    }

    w.block_close();
    w.finish()
}

fn write_cluster(w: &mut DotWriter, workflow: &WorkflowDef<'_>) {
    let wf = &workflow.name;
    let node = |task: &str| format!("{}.{}", wf, task);
    let graph = TaskGraph::build(workflow);
    let tasks = workflow.task_defs();

    w.block_open(&format!("subgraph {}", quote(&format!("cluster_{}", wf))));
    w.line(&format!("label = {};", quote(wf)));
    w.line("style = dashed;");

    for task in &tasks {
        w.line(&format!("{};", quote(&node(&task.name))));
    }

    for (from, to, kind) in graph.edges() {
        w.edge(&node(from), &node(to), kind.label());
    }

    for task in &tasks {
        if let Some(item) = task.with_items_item() {
            let id = node(&task.name);
            w.edge(&id, &id, Some(format!("loop {}", item).as_str()));
        }
    }

    w.block_close();
}
