//! Token model and the fixed lookup tables of the YAQL tokenizer.

use serde::Serialize;

use crate::position::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Operator,
    Delimiter,
    Keyword,
    Function,
    Identifier,
    String,
    Number,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text, except for string literals where this is the unescaped
    /// value without quotes.
    pub text: String,
    pub range: Range,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, range: Range) -> Self {
        Self {
            kind,
            text: text.into(),
            range,
        }
    }
}

/// Operators, longest first so that `>=` wins over `>`.
pub const OPERATORS: &[&str] = &[
    ">=", "<=", "!=", "and", "not", "or", "in", "+", "-", "*", "/", "%", "=", "<", ">",
];

/// Operators spelled as words; these never split an identifier.
pub const WORD_OPERATORS: &[&str] = &["and", "or", "not", "in"];

pub const DELIMITERS: &[char] = &['(', ')', '{', '}', '[', ']', ',', ';', '?', ':', '$', '.'];

pub const KEYWORDS: &[&str] = &[
    "let",
    "where",
    "select",
    "selectMany",
    "limit",
    "skip",
    "true",
    "false",
    "null",
    "if",
    "then",
    "else",
    "switch",
    "case",
];

pub const FUNCTIONS: &[&str] = &[
    // string
    "concat",
    "join",
    "len",
    "split",
    "str",
    "regex",
    "match",
    "replace",
    "contains",
    "toLower",
    "toUpper",
    "trim",
    "endsWith",
    "startsWith",
    // math
    "int",
    "float",
    "abs",
    "round",
    "floor",
    "ceiling",
    "pow",
    "mod",
    // collections
    "list",
    "dict",
    "sum",
    "avg",
    "min",
    "max",
    "distinct",
    "count",
    "fold",
    "filter",
    "range",
    "first",
    "last",
    "any",
    "all",
    // mistral / openstack
    "task",
    "env",
    "json_escape",
    "execute",
    "get_param",
    "get_attr",
];

pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Classify a scanned identifier word.
pub fn classify_word(word: &str) -> TokenKind {
    if KEYWORDS.contains(&word) {
        TokenKind::Keyword
    } else if FUNCTIONS.contains(&word) {
        TokenKind::Function
    } else {
        TokenKind::Identifier
    }
}
