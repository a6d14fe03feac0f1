//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates an anchored lexer pattern entry

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's TokenValue
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::NumericLiteral, TokenValue::Number(42), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexer pattern entry whose regex only matches at the cursor.
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!("[0-9]+", number_handler)
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($regex:literal, $handler:expr) => {
        RegexPattern {
            regex: Regex::new(concat!("^(?:", $regex, ")")).expect("lexer pattern must compile"),
            handler: $handler,
        }
    };
}
