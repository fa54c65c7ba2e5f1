//! Unified diagnostic type produced by every analysis phase.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::position::{Position, Range};

/// Which family of check produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Expression tokenizer / bracket balance failure.
    Lexical,
    /// YAML parse, structural, naming or graph failure.
    Structural,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticKind::Lexical => write!(f, "YAQL syntax error"),
            DiagnosticKind::Structural => write!(f, "Mistral error"),
        }
    }
}

/// Point-located error raised inside an embedded expression.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct LexicalError {
    pub message: String,
    pub position: Position,
}

impl LexicalError {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

/// Span-located error raised by the document validator.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct StructuralError {
    pub message: String,
    pub range: Range,
}

impl StructuralError {
    pub fn new(message: impl Into<String>, range: Range) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    #[error(transparent)]
    Lexical(LexicalError),
    #[error(transparent)]
    Structural(StructuralError),
}

impl Diagnostic {
    pub fn structural(message: impl Into<String>, range: Range) -> Self {
        Diagnostic::Structural(StructuralError::new(message, range))
    }

    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::Lexical(_) => DiagnosticKind::Lexical,
            Diagnostic::Structural(_) => DiagnosticKind::Structural,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Diagnostic::Lexical(e) => &e.message,
            Diagnostic::Structural(e) => &e.message,
        }
    }

    /// Location as a range; a lexical point becomes a zero-length range.
    pub fn range(&self) -> Range {
        match self {
            Diagnostic::Lexical(e) => Range::point(e.position),
            Diagnostic::Structural(e) => e.range,
        }
    }

    pub fn start(&self) -> Position {
        self.range().start
    }

    /// Message with the host-facing prefix for its kind.
    pub fn display_message(&self) -> String {
        format!("{}: {}", self.kind(), self.message())
    }
}

impl From<LexicalError> for Diagnostic {
    fn from(e: LexicalError) -> Self {
        Diagnostic::Lexical(e)
    }
}

impl From<StructuralError> for Diagnostic {
    fn from(e: StructuralError) -> Self {
        Diagnostic::Structural(e)
    }
}
