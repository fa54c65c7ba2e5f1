//! Document validation: structure, expressions, variable flow, naming and
//! task reachability, aggregated into one ordered diagnostic list.

pub mod naming;
pub mod orphans;
pub mod structural;
pub mod variables;

use tracing::debug;

use crate::error::Diagnostic;
use crate::locate::SourceMap;
use crate::parse::{Document, parse_yaml};
use crate::yaql::extract::{ExpressionOccurrence, extract_with_index};
use crate::yaql::validate_expression;

/// Validate a whole Mistral v2 document.
///
/// Never fails: a YAML parse error is itself reported as the single
/// diagnostic, and a document whose root is not a mapping yields none.
pub fn validate_document(text: &str) -> Vec<Diagnostic> {
    let source = SourceMap::new(text);

    let value = match parse_yaml(text) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "YAML parse failed");
            return vec![Diagnostic::structural(
                format!("Error parsing YAML: {}", e),
                source.document_start(),
            )];
        }
    };

    let Some(document) = Document::from_value(&value) else {
        debug!("root is not a mapping; skipping");
        return Vec::new();
    };

    let mut diagnostics = Vec::new();

    structural::validate_structure(&document, &source, &mut diagnostics);
    let structural_count = diagnostics.len();

    let expressions = extract_with_index(source.index());
    validate_expressions(&expressions, &mut diagnostics);

    variables::validate_variable_refs(&document, &source, &expressions, &mut diagnostics);
    naming::validate_names(&document, &source, &mut diagnostics);
    orphans::validate_orphans(&document, &source, &mut diagnostics);

    debug!(
        expressions = expressions.len(),
        structural = structural_count,
        total = diagnostics.len(),
        "validated document"
    );
    diagnostics
}

fn validate_expressions(expressions: &[ExpressionOccurrence], diagnostics: &mut Vec<Diagnostic>) {
    for expr in expressions {
        diagnostics.extend(
            validate_expression(&expr.text, expr.body_start)
                .into_iter()
                .map(Diagnostic::from),
        );
    }
}
