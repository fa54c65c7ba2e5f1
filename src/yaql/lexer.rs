//! Single-pass YAQL tokenizer.
//!
//! The lexer never stops at a bad character: every failure is recorded as a
//! [`LexicalError`] and scanning resumes after it, so one pass reports every
//! lexical problem in a snippet.

use crate::error::LexicalError;
use crate::position::{Position, Range};

use super::token::{
    DELIMITERS, OPERATORS, Token, TokenKind, WORD_OPERATORS, classify_word, is_ident_continue,
    is_ident_start,
};

/// Tokenize `text`, reporting positions relative to `origin` (the location
/// of the snippet's first character in the full document).
pub fn tokenize(text: &str, origin: Position) -> (Vec<Token>, Vec<LexicalError>) {
    Lexer::new(text, origin).run()
}

struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    cursor: Position,
    tokens: Vec<Token>,
    errors: Vec<LexicalError>,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str, origin: Position) -> Self {
        Self {
            source,
            pos: 0,
            cursor: origin,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn run(mut self) -> (Vec<Token>, Vec<LexicalError>) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.bump();
            } else if c == '\'' || c == '"' {
                self.string_literal(c);
            } else if c.is_ascii_digit() {
                self.number();
            } else if DELIMITERS.contains(&c) {
                let start = self.cursor;
                self.bump();
                self.push(TokenKind::Delimiter, c.to_string(), start);
            } else if let Some(op) = self.match_operator() {
                let start = self.cursor;
                self.bump_str(op);
                self.push(TokenKind::Operator, op, start);
            } else if is_ident_start(c) {
                self.word();
            } else {
                self.errors.push(LexicalError::new(
                    format!("Unexpected character: {}", c),
                    self.cursor,
                ));
                self.bump();
            }
        }
        (self.tokens, self.errors)
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        self.cursor = self.cursor.advance(c);
        Some(c)
    }

    fn bump_str(&mut self, s: &str) {
        self.pos += s.len();
        self.cursor = self.cursor.advance_str(s);
    }

    fn push(&mut self, kind: TokenKind, text: impl Into<String>, start: Position) {
        self.tokens
            .push(Token::new(kind, text, Range::new(start, self.cursor)));
    }

    fn string_literal(&mut self, quote: char) {
        let start = self.cursor;
        self.bump();

        let mut value = String::new();
        let mut escaped = false;
        let mut closed = false;
        while let Some(c) = self.bump() {
            if escaped {
                value.push(c);
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                closed = true;
                break;
            } else {
                value.push(c);
            }
        }

        if closed {
            self.push(TokenKind::String, value, start);
        } else {
            self.errors
                .push(LexicalError::new("Unterminated string literal", start));
        }
    }

    fn number(&mut self) {
        let start = self.cursor;
        let begin = self.pos;
        self.digits();

        if self.peek() == Some('.') {
            self.bump();
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.errors.push(LexicalError::new(
                    "Expected digit after decimal point",
                    self.cursor,
                ));
            }
            self.digits();
        }

        let source = self.source;
        self.push(TokenKind::Number, &source[begin..self.pos], start);
    }

    fn digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
    }

    fn match_operator(&self) -> Option<&'static str> {
        let rest = self.rest();
        OPERATORS.iter().copied().find(|op| {
            if !rest.starts_with(op) {
                return false;
            }
            if WORD_OPERATORS.contains(op) {
                return !rest[op.len()..]
                    .chars()
                    .next()
                    .is_some_and(is_ident_continue);
            }
            true
        })
    }

    fn word(&mut self) {
        let start = self.cursor;
        let begin = self.pos;
        while self.peek().is_some_and(is_ident_continue) {
            self.bump();
        }
        let source = self.source;
        let word = &source[begin..self.pos];
        self.push(classify_word(word), word, start);
    }
}
