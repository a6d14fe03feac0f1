use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Words that scan as something other than a plain identifier.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Keyword);
        map.insert("import", TokenKind::Keyword);
        map.insert("from", TokenKind::Keyword);
        map.insert("null", TokenKind::NullLiteral);
        map.insert("true", TokenKind::BooleanLiteral);
        map.insert("false", TokenKind::BooleanLiteral);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Comment,
    Keyword,
    Identifier,
    Punctuator,
    NullLiteral,
    BooleanLiteral,
    NumericLiteral,
    CharacterLiteral,
    StringLiteral,
    EOF,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Payload of a token. Only `EOF` carries `None`, only numeric literals carry `Number`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenValue {
    None,
    Text(String),
    Number(u64),
}

impl TokenValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::None => write!(f, "null"),
            TokenValue::Text(text) => write!(f, "{}", text),
            TokenValue::Number(number) => write!(f, "{}", number),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    /// True for a token of `kind` whose text equals `value`.
    pub fn is(&self, kind: TokenKind, value: &str) -> bool {
        self.kind == kind && self.value.as_str() == Some(value)
    }
}
