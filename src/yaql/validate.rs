//! Structural well-formedness of a single expression: bracket balance on
//! top of the tokenizer's lexical checks.

use crate::error::LexicalError;
use crate::position::Position;

use super::lexer::tokenize;
use super::token::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bracket {
    Paren,
    Square,
    Brace,
}

impl Bracket {
    fn opening(text: &str) -> Option<Self> {
        match text {
            "(" => Some(Bracket::Paren),
            "[" => Some(Bracket::Square),
            "{" => Some(Bracket::Brace),
            _ => None,
        }
    }

    fn closing(text: &str) -> Option<Self> {
        match text {
            ")" => Some(Bracket::Paren),
            "]" => Some(Bracket::Square),
            "}" => Some(Bracket::Brace),
            _ => None,
        }
    }

    fn noun(self) -> &'static str {
        match self {
            Bracket::Paren => "parenthesis",
            Bracket::Square => "bracket",
            Bracket::Brace => "brace",
        }
    }
}

/// Validate one expression body. Tokenizer errors come first (scan order),
/// then unmatched closers (token order), then unclosed openers (opening
/// order). Blank expressions are valid.
pub fn validate_expression(text: &str, origin: Position) -> Vec<LexicalError> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let (tokens, mut errors) = tokenize(text, origin);
    errors.extend(check_brackets(&tokens));
    errors
}

fn check_brackets(tokens: &[Token]) -> Vec<LexicalError> {
    let mut errors = Vec::new();
    let mut stack: Vec<(Bracket, Position)> = Vec::new();

    for token in tokens.iter().filter(|t| t.kind == TokenKind::Delimiter) {
        if let Some(open) = Bracket::opening(&token.text) {
            stack.push((open, token.range.start));
        } else if let Some(close) = Bracket::closing(&token.text) {
            match stack.last() {
                Some((top, _)) if *top == close => {
                    stack.pop();
                }
                // mismatched closers leave the stack untouched
                _ => errors.push(LexicalError::new(
                    format!("Unmatched closing {}", close.noun()),
                    token.range.start,
                )),
            }
        }
    }

    errors.extend(
        stack
            .into_iter()
            .map(|(open, pos)| LexicalError::new(format!("Unclosed {}", open.noun()), pos)),
    );
    errors
}
