use std::fmt::Display;

/// Tag naming which kind of value a literal holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralType {
    String,
    Numeric,
    Character,
    Null,
    Boolean,
}

impl Display for LiteralType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The value of a literal, keyed by its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    String(String),
    Numeric(u64),
    Character(char),
    Boolean(bool),
    Null,
}

impl LiteralValue {
    pub fn value_type(&self) -> LiteralType {
        match self {
            LiteralValue::String(_) => LiteralType::String,
            LiteralValue::Numeric(_) => LiteralType::Numeric,
            LiteralValue::Character(_) => LiteralType::Character,
            LiteralValue::Boolean(_) => LiteralType::Boolean,
            LiteralValue::Null => LiteralType::Null,
        }
    }
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralValue::String(value) => write!(f, "{:?}", value),
            LiteralValue::Numeric(value) => write!(f, "{}", value),
            LiteralValue::Character(value) => write!(f, "{:?}", value),
            LiteralValue::Boolean(value) => write!(f, "{}", value),
            LiteralValue::Null => write!(f, "null"),
        }
    }
}
