//! Integration tests for the YAQL tokenizer.

use mistral_lint::yaql::{Token, TokenKind, tokenize};
use mistral_lint::{Position, Range};

fn lex(text: &str) -> Vec<Token> {
    let (tokens, errors) = tokenize(text, Position::default());
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    tokens
}

fn kinds(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens.iter().map(|t| (t.kind, t.text.as_str())).collect()
}

#[test]
fn classifies_a_query() {
    use TokenKind::*;
    assert_eq!(
        kinds(&lex("$.users.where($.age >= 18).select(name)")),
        vec![
            (Delimiter, "$"),
            (Delimiter, "."),
            (Identifier, "users"),
            (Delimiter, "."),
            (Keyword, "where"),
            (Delimiter, "("),
            (Delimiter, "$"),
            (Delimiter, "."),
            (Identifier, "age"),
            (Operator, ">="),
            (Number, "18"),
            (Delimiter, ")"),
            (Delimiter, "."),
            (Keyword, "select"),
            (Delimiter, "("),
            (Identifier, "name"),
            (Delimiter, ")"),
        ]
    );
}

#[test]
fn functions_and_strings() {
    use TokenKind::*;
    assert_eq!(
        kinds(&lex(r#"len(task("t1").result) != 0"#)),
        vec![
            (Function, "len"),
            (Delimiter, "("),
            (Function, "task"),
            (Delimiter, "("),
            (String, "t1"),
            (Delimiter, ")"),
            (Delimiter, "."),
            (Identifier, "result"),
            (Delimiter, ")"),
            (Operator, "!="),
            (Number, "0"),
        ]
    );
}

#[test]
fn decimal_numbers() {
    assert_eq!(kinds(&lex("3.25")), vec![(TokenKind::Number, "3.25")]);
}

#[test]
fn unexpected_character_is_skipped() {
    let (tokens, errors) = tokenize("a @ b", Position::default());
    assert_eq!(tokens.len(), 2);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Unexpected character: @");
    assert_eq!(errors[0].position, Position::new(0, 2));
}

#[test]
fn unterminated_string_produces_no_token() {
    let (tokens, errors) = tokenize("x + 'abc", Position::default());
    assert_eq!(tokens.len(), 2);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Unterminated string literal");
    assert_eq!(errors[0].position, Position::new(0, 4));
}

#[test]
fn missing_decimal_digit() {
    let (tokens, errors) = tokenize("1.", Position::default());
    assert_eq!(tokens.len(), 1);
    assert_eq!(errors[0].message, "Expected digit after decimal point");
    assert_eq!(errors[0].position, Position::new(0, 2));
}

#[test]
fn positions_follow_newlines() {
    let (tokens, _) = tokenize("a +\n  b", Position::new(3, 7));
    assert_eq!(tokens[0].range, Range::from_coords(3, 7, 3, 8));
    assert_eq!(tokens[2].range, Range::from_coords(4, 2, 4, 3));
}

#[test]
fn columns_count_utf16_units() {
    let (tokens, errors) = tokenize("'é😀' + x", Position::default());
    assert!(errors.is_empty());
    assert_eq!(tokens[0].range, Range::from_coords(0, 0, 0, 5));
    assert_eq!(tokens[2].range.start, Position::new(0, 8));
}
