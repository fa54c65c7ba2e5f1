//! Locates `<% ... %>` expression regions in raw document text,
//! independent of the YAML structure around them.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::position::{LineIndex, Position, Range};

static EXPRESSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<%\s*(.*?)\s*%>").expect("Invalid regex pattern"));

/// One embedded expression, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpressionOccurrence {
    /// Body between the markers, without surrounding whitespace.
    pub text: String,
    /// Full `<% ... %>` span, markers included.
    pub range: Range,
    /// Position of the body's first character.
    pub body_start: Position,
}

/// Extract every expression occurrence from `document`.
pub fn extract_expressions(document: &str) -> Vec<ExpressionOccurrence> {
    extract_with_index(&LineIndex::new(document))
}

/// Same as [`extract_expressions`], reusing an existing line table.
pub fn extract_with_index(index: &LineIndex<'_>) -> Vec<ExpressionOccurrence> {
    EXPRESSION_PATTERN
        .captures_iter(index.text())
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let body = caps.get(1)?;
            Some(ExpressionOccurrence {
                text: body.as_str().to_string(),
                range: index.range(whole.start(), whole.end()),
                body_start: index.position(body.start()),
            })
        })
        .collect()
}
