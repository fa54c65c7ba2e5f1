//! Name listings for editor completion: workflows, tasks and the variables a
//! document declares.
//!
//! The document listings are lenient: text that does not parse, or that
//! has no `workflows` mapping, yields an empty list.

pub mod docs;

use std::collections::HashSet;

use serde_yaml::Value;

use crate::parse::{Document, parse_yaml};

pub use docs::{FunctionDoc, KeyDoc};

fn with_document<T: Default>(text: &str, f: impl FnOnce(Document<'_>) -> T) -> T {
    let value = parse_yaml(text).unwrap_or(Value::Null);
    Document::from_value(&value).map(f).unwrap_or_default()
}

pub fn workflow_names(text: &str) -> Vec<String> {
    with_document(text, |doc| {
        doc.workflow_defs().into_iter().map(|wf| wf.name).collect()
    })
}

pub fn task_names(text: &str, workflow: &str) -> Vec<String> {
    with_document(text, |doc| {
        doc.workflow_defs()
            .into_iter()
            .find(|wf| wf.name == workflow)
            .map(|wf| wf.task_defs().into_iter().map(|t| t.name).collect())
            .unwrap_or_default()
    })
}

/// Inputs, publish keys, `output-on-error` keys and `with-items` item names
/// across every workflow, deduplicated in first-seen order.
pub fn declared_variables(text: &str) -> Vec<String> {
    with_document(text, |doc| {
        let mut seen = HashSet::new();
        let mut vars = Vec::new();
        let mut add = |name: String| {
            if seen.insert(name.clone()) {
                vars.push(name);
            }
        };

        for workflow in doc.workflow_defs() {
            workflow.input_names().into_iter().for_each(&mut add);
            for task in workflow.task_defs() {
                task.publish_keys().into_iter().for_each(&mut add);
                task.output_on_error_keys().into_iter().for_each(&mut add);
                if let Some(item) = task.with_items_item() {
                    add(item.to_string());
                }
            }
        }
        vars
    })
}

/// Signature and documentation of every YAQL built-in function.
pub fn yaql_function_docs() -> &'static [FunctionDoc] {
    docs::YAQL_FUNCTIONS
}

/// Documentation of the Mistral DSL keys.
pub fn mistral_key_docs() -> &'static [KeyDoc] {
    docs::MISTRAL_KEYS
}

/// Hover text for a word: a YAQL function's signature and documentation,
/// else a Mistral key's documentation.
pub fn hover_text(word: &str) -> Option<String> {
    docs::function_doc(word)
        .map(|f| format!("{}\n\n{}", f.signature, f.documentation))
        .or_else(|| docs::key_doc(word).map(|k| k.documentation.to_string()))
}
