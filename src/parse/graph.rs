//! petgraph-based directed task graph for one workflow.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::types::{Requires, TRANSITION_KEYS, WorkflowDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// `requires` dependency, drawn dependency -> dependent.
    Requires,
    OnSuccess,
    OnError,
    OnComplete,
}

impl EdgeKind {
    pub fn from_transition_key(key: &str) -> Option<Self> {
        match key {
            "on-success" => Some(EdgeKind::OnSuccess),
            "on-error" => Some(EdgeKind::OnError),
            "on-complete" => Some(EdgeKind::OnComplete),
            _ => None,
        }
    }

    pub fn label(self) -> Option<&'static str> {
        match self {
            EdgeKind::Requires | EdgeKind::OnSuccess => None,
            EdgeKind::OnError => Some("on-error"),
            EdgeKind::OnComplete => Some("on-complete"),
        }
    }
}

pub struct TaskGraph {
    pub graph: DiGraph<String, EdgeKind>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl TaskGraph {
    /// Build the graph of a workflow's declared tasks. Edges naming tasks
    /// that are not declared are dropped.
    pub fn build(workflow: &WorkflowDef<'_>) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();
        let tasks = workflow.task_defs();

        for task in &tasks {
            let idx = graph.add_node(task.name.clone());
            node_indices.insert(task.name.clone(), idx);
        }

        for task in &tasks {
            let Some(&this) = node_indices.get(&task.name) else {
                continue;
            };

            if let Requires::List(deps) = task.requires() {
                for dep in deps {
                    if let Some(&from) = node_indices.get(&dep) {
                        graph.add_edge(from, this, EdgeKind::Requires);
                    }
                }
            }

            for key in TRANSITION_KEYS {
                let Some(kind) = EdgeKind::from_transition_key(key) else {
                    continue;
                };
                for target in task.transition_targets(key) {
                    if let Some(&to) = node_indices.get(&target) {
                        graph.add_edge(this, to, kind);
                    }
                }
            }
        }

        TaskGraph {
            graph,
            node_indices,
        }
    }

    /// Edges in insertion order as `(from, to, kind)`.
    pub fn edges(&self) -> Vec<(&str, &str, EdgeKind)> {
        self.graph
            .edge_references()
            .map(|e| {
                (
                    self.graph[e.source()].as_str(),
                    self.graph[e.target()].as_str(),
                    *e.weight(),
                )
            })
            .collect()
    }
}
