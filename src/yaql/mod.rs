//! The embedded YAQL expression language: tokenizer, bracket validator and
//! document-level extraction of `<% ... %>` regions.

pub mod extract;
pub mod lexer;
pub mod token;
pub mod validate;

pub use extract::{ExpressionOccurrence, extract_expressions};
pub use lexer::tokenize;
pub use token::{Token, TokenKind};
pub use validate::validate_expression;
