//! Read-only typed views over the generic YAML tree.
//!
//! Nothing here rejects malformed input: accessors return `None` (or an
//! empty list) when a section has the wrong shape, and the validate phase
//! decides what to report.

use serde_yaml::{Mapping, Value};

/// Strip YAML tags (`!foo value`) so callers match on the underlying shape.
pub fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

pub fn as_mapping(value: &Value) -> Option<&Mapping> {
    untag(value).as_mapping()
}

pub fn as_sequence(value: &Value) -> Option<&Vec<Value>> {
    untag(value).as_sequence()
}

pub fn as_str(value: &Value) -> Option<&str> {
    untag(value).as_str()
}

/// Render a scalar the way it reads in the source; used for mapping keys
/// and for echoing bad values back in messages.
pub fn scalar_text(value: &Value) -> String {
    match untag(value) {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(_) => "[...]".to_string(),
        Value::Mapping(_) => "{...}".to_string(),
        Value::Tagged(_) => String::new(),
    }
}

/// Entry for `key`, including an explicit null.
pub fn field<'a>(mapping: &'a Mapping, key: &str) -> Option<&'a Value> {
    mapping.get(key)
}

/// Entry for `key` unless it is missing or null.
pub fn present<'a>(mapping: &'a Mapping, key: &str) -> Option<&'a Value> {
    field(mapping, key).filter(|v| !untag(v).is_null())
}

/// Mapping entries in document order with stringified keys.
pub fn entries(mapping: &Mapping) -> impl Iterator<Item = (String, &Value)> {
    mapping.iter().map(|(k, v)| (scalar_text(k), v))
}

/// Stringified keys of a mapping value; empty for any other shape.
pub fn mapping_keys(value: &Value) -> Vec<String> {
    as_mapping(value)
        .map(|m| entries(m).map(|(k, _)| k).collect())
        .unwrap_or_default()
}

/// Root of a Mistral document.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    pub root: &'a Mapping,
}

impl<'a> Document<'a> {
    /// `None` when the root is not a mapping (not a candidate document).
    pub fn from_value(value: &'a Value) -> Option<Self> {
        as_mapping(value).map(|root| Document { root })
    }

    pub fn version(&self) -> Option<&'a Value> {
        present(self.root, "version")
    }

    pub fn workflows_value(&self) -> Option<&'a Value> {
        present(self.root, "workflows")
    }

    pub fn workflows(&self) -> Option<&'a Mapping> {
        self.workflows_value().and_then(as_mapping)
    }

    /// Every workflow entry in document order, whatever its shape.
    pub fn workflow_defs(&self) -> Vec<WorkflowDef<'a>> {
        self.workflows()
            .map(|m| {
                entries(m)
                    .map(|(name, body)| WorkflowDef { name, body })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct WorkflowDef<'a> {
    pub name: String,
    pub body: &'a Value,
}

impl<'a> WorkflowDef<'a> {
    pub fn mapping(&self) -> Option<&'a Mapping> {
        as_mapping(self.body)
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.mapping().and_then(|m| present(m, key))
    }

    pub fn tasks(&self) -> Option<&'a Mapping> {
        self.get("tasks").and_then(as_mapping)
    }

    pub fn task_defs(&self) -> Vec<TaskDef<'a>> {
        self.tasks()
            .map(|m| {
                entries(m)
                    .map(|(name, body)| TaskDef { name, body })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn has_task(&self, name: &str) -> bool {
        self.tasks().is_some_and(|m| m.contains_key(name))
    }

    /// Declared input names: bare strings or single-key default mappings in
    /// a list, or the keys of an input mapping.
    pub fn input_names(&self) -> Vec<String> {
        let Some(input) = self.get("input") else {
            return Vec::new();
        };
        match untag(input) {
            Value::Sequence(items) => items
                .iter()
                .flat_map(|item| match untag(item) {
                    Value::String(name) => vec![name.clone()],
                    Value::Mapping(m) => entries(m).map(|(k, _)| k).collect(),
                    _ => Vec::new(),
                })
                .collect(),
            Value::Mapping(m) => entries(m).map(|(k, _)| k).collect(),
            _ => Vec::new(),
        }
    }
}

/// Shape of a task's `requires` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requires {
    /// Missing, null, or an empty list: the task is an entry point.
    None,
    /// String members of a non-empty list.
    List(Vec<String>),
    /// Any other shape; such a task can never become reachable.
    Unusable,
}

#[derive(Debug, Clone)]
pub struct TaskDef<'a> {
    pub name: String,
    pub body: &'a Value,
}

impl<'a> TaskDef<'a> {
    pub fn mapping(&self) -> Option<&'a Mapping> {
        as_mapping(self.body)
    }

    /// Entry for `key` unless missing or null.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.mapping().and_then(|m| present(m, key))
    }

    /// Entry for `key`, including an explicit null.
    pub fn field(&self, key: &str) -> Option<&'a Value> {
        self.mapping().and_then(|m| field(m, key))
    }

    pub fn has_join(&self) -> bool {
        self.get("join").is_some()
    }

    pub fn publish_keys(&self) -> Vec<String> {
        self.get("publish").map(mapping_keys).unwrap_or_default()
    }

    pub fn output_on_error_keys(&self) -> Vec<String> {
        self.get("output-on-error")
            .map(mapping_keys)
            .unwrap_or_default()
    }

    /// `with-items.item` when it is a string.
    pub fn with_items_item(&self) -> Option<&'a str> {
        self.get("with-items")
            .and_then(as_mapping)
            .and_then(|m| present(m, "item"))
            .and_then(as_str)
    }

    pub fn requires(&self) -> Requires {
        let Some(value) = self.get("requires") else {
            return Requires::None;
        };
        match as_sequence(value) {
            Some(items) if items.is_empty() => Requires::None,
            Some(items) if items.iter().all(|i| as_str(i).is_some()) => {
                Requires::List(items.iter().filter_map(as_str).map(String::from).collect())
            }
            _ => Requires::Unusable,
        }
    }

    /// Successor task names from `on-success`/`on-error`/`on-complete`:
    /// plain strings, or the single key of a `{task: condition}` entry.
    pub fn transition_targets(&self, key: &str) -> Vec<String> {
        let Some(value) = self.get(key) else {
            return Vec::new();
        };
        match untag(value) {
            Value::String(name) => vec![name.clone()],
            Value::Sequence(items) => items
                .iter()
                .filter_map(|item| match untag(item) {
                    Value::String(name) => Some(name.clone()),
                    Value::Mapping(m) if m.len() == 1 => entries(m).next().map(|(k, _)| k),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

pub const TRANSITION_KEYS: [&str; 3] = ["on-success", "on-error", "on-complete"];
