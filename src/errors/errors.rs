use std::{fmt::Display, sync::Arc};

use thiserror::Error;

use crate::{get_line_at_position, lexer::tokens::TokenKind, Position};

/// A scanning or parsing failure, positioned in the source it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    file: Arc<str>,
    line_text: String,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            file: Arc::from("shell"),
            line_text: String::new(),
        }
    }

    /// Attaches the file name and the text of the failing line.
    pub fn with_source(mut self, source: &str, file: Arc<str>) -> Self {
        self.line_text = get_line_at_position(source, self.position.line);
        self.file = file;
        self
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_file(&self) -> &str {
        &self.file
    }

    pub fn get_line_text(&self) -> &str {
        &self.line_text
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn is_scanning_error(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnexpectedCharacter { .. }
                | ErrorImpl::UnexpectedEndOfFile
                | ErrorImpl::MalformedCharacterLiteral { .. }
                | ErrorImpl::NumberParseError { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnexpectedEndOfFile => "UnexpectedEndOfFile",
            ErrorImpl::MalformedCharacterLiteral { .. } => "MalformedCharacterLiteral",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedEndOfFile => {
                ErrorTip::Suggestion(String::from("String literal is never closed"))
            }
            ErrorImpl::MalformedCharacterLiteral { .. } => ErrorTip::Suggestion(String::from(
                "Character literals hold exactly one character, like 'a'",
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnexpectedToken { kind: TokenKind::EOF } => ErrorTip::Suggestion(
                String::from("Unexpected token: `EOF`, did you miss a semicolon?"),
            ),
            ErrorImpl::UnexpectedToken { kind } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", kind))
            }
            ErrorImpl::UnexpectedTokenDetailed { kind, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", kind, message))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)?;

        if self.is_scanning_error() {
            write!(
                f,
                " at line {} at column {}",
                self.position.line + 1,
                self.position.column + 1
            )?;
        }

        write!(
            f,
            "\n\t{}\n\t{}^",
            self.line_text,
            " ".repeat(self.position.column)
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Unexpected character \"{character}\"")]
    UnexpectedCharacter { character: char },
    #[error("Unexpected end of file")]
    UnexpectedEndOfFile,
    #[error("Malformed character literal, found {found}")]
    MalformedCharacterLiteral { found: String },
    #[error("Invalid numeric literal {token:?}")]
    NumberParseError { token: String },
    #[error("Unexpected token \"{kind}\"")]
    UnexpectedToken { kind: TokenKind },
    #[error("Unexpected token \"{kind}\", {message}")]
    UnexpectedTokenDetailed { kind: TokenKind, message: String },
}
