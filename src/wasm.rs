//! WASM entry points for the editor host.

use wasm_bindgen::prelude::*;

use crate::error::{Diagnostic, DiagnosticKind};

/// Validate a Mistral document.
/// Returns a JSON array of diagnostic objects in report order.
#[wasm_bindgen]
pub fn validate_document(text: &str) -> JsValue {
    let result: Vec<DiagnosticDto> = crate::validate::validate_document(text)
        .iter()
        .map(DiagnosticDto::from)
        .collect();
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Workflow names declared under `workflows`.
#[wasm_bindgen]
pub fn workflow_names(text: &str) -> JsValue {
    serde_wasm_bindgen::to_value(&crate::outline::workflow_names(text)).unwrap_or(JsValue::NULL)
}

/// Task names declared in one workflow.
#[wasm_bindgen]
pub fn task_names(text: &str, workflow: &str) -> JsValue {
    serde_wasm_bindgen::to_value(&crate::outline::task_names(text, workflow))
        .unwrap_or(JsValue::NULL)
}

/// Variables visible anywhere in the document, for completion.
#[wasm_bindgen]
pub fn declared_variables(text: &str) -> JsValue {
    serde_wasm_bindgen::to_value(&crate::outline::declared_variables(text))
        .unwrap_or(JsValue::NULL)
}

/// YAQL function signatures and documentation, as an array of
/// `{name, signature, documentation}`.
#[wasm_bindgen]
pub fn yaql_function_docs() -> JsValue {
    serde_wasm_bindgen::to_value(crate::outline::yaql_function_docs()).unwrap_or(JsValue::NULL)
}

/// Mistral key documentation, as an array of `{key, documentation}`.
#[wasm_bindgen]
pub fn mistral_key_docs() -> JsValue {
    serde_wasm_bindgen::to_value(crate::outline::mistral_key_docs()).unwrap_or(JsValue::NULL)
}

/// Hover text for a word under the cursor: a YAQL function signature and
/// documentation, or a Mistral key's documentation.
#[wasm_bindgen]
pub fn hover_text(word: &str) -> Option<String> {
    crate::outline::hover_text(word)
}

/// Graphviz DOT source for the document's task graphs.
#[wasm_bindgen]
pub fn render_dot(text: &str) -> String {
    crate::diagram::to_dot(text)
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
struct DiagnosticDto {
    kind: DiagnosticKind,
    message: String,
    display_message: String,
    start_line: u32,
    start_character: u32,
    end_line: u32,
    end_character: u32,
}

impl From<&Diagnostic> for DiagnosticDto {
    fn from(d: &Diagnostic) -> Self {
        let range = d.range();
        DiagnosticDto {
            kind: d.kind(),
            message: d.message().to_string(),
            display_message: d.display_message(),
            start_line: range.start.line,
            start_character: range.start.character,
            end_line: range.end.line,
            end_character: range.end.character,
        }
    }
}
