//! Parse phase: YAML text -> generic value tree + typed views + task graph.

pub mod graph;
pub mod types;

pub use graph::{EdgeKind, TaskGraph};
pub use types::*;

use serde_yaml::Value;

/// Parse a document into a generic YAML tree.
///
/// An empty (or comment-only) document parses to `Value::Null`.
pub fn parse_yaml(text: &str) -> Result<Value, serde_yaml::Error> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_yaml::from_str::<Value>(text)
}
