use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_PATTERN, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP};

/// Consumes the token whose leading text `matched` sits at the cursor.
pub type TokenHandler = fn(&mut Lexer, &str) -> Result<(TokenKind, TokenValue), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: TokenHandler,
}

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new("^[ \n]+").expect("whitespace pattern must compile");

    // Order matters: the first pattern matching at the cursor wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        MK_PATTERN!(r"#[^\n]*", comment_handler),
        MK_PATTERN!(r"[A-Za-z][A-Za-z0-9]*", symbol_handler),
        MK_PATTERN!(r"[0-9]+", number_handler),
        MK_PATTERN!(r"'", character_handler),
        MK_PATTERN!(r#"""#, string_handler),
        MK_PATTERN!(r">>>|<<|>>|&&|\|\||==|!=|[%()*+,\-./:;?\[\]^{}~<>=!&|]", punctuator_handler),
    ];
}

/// Pull-based scanner over a single source string.
///
/// Tracks a byte cursor for slicing alongside the character offset, line and
/// column reported in positions.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    file: Arc<str>,
    pos: usize,
    offset: usize,
    line: usize,
    column: usize,
    exhausted: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = match file {
            Some(file) => Arc::from(file),
            None => Arc::from("shell"),
        };

        Lexer {
            source,
            file: file_name,
            pos: 0,
            offset: 0,
            line: 0,
            column: 0,
            exhausted: false,
        }
    }

    /// Scans and returns the next token.
    ///
    /// Once the end of input is reached every further call returns the same
    /// `EOF` token without moving the cursor.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.skip_whitespace();

        if self.at_eof() {
            let position = Lexer::position(self);
            return Ok(MK_TOKEN!(
                TokenKind::EOF,
                TokenValue::None,
                Span { start: position, end: position }
            ));
        }

        let start = Lexer::position(self);

        for pattern in PATTERNS.iter() {
            let matched = pattern
                .regex
                .find(self.remainder())
                .map(|found| found.as_str().to_string());

            if let Some(matched) = matched {
                let (kind, value) = (pattern.handler)(self, &matched)?;
                return Ok(MK_TOKEN!(kind, value, Span { start, end: Lexer::position(self) }));
            }
        }

        let character = self.at().unwrap_or_default();
        Err(self.error(ErrorImpl::UnexpectedCharacter { character }, start))
    }

    /// Drains the lexer up to and including `EOF`.
    pub fn collect_tokens(self) -> Result<Vec<Token>, Error> {
        self.collect()
    }

    pub fn position(&self) -> Position {
        Position::new(self.offset, self.line, self.column)
    }

    /// Builds an error carrying this lexer's file name and the failing line.
    pub fn error(&self, error_impl: ErrorImpl, position: Position) -> Error {
        Error::new(error_impl, position).with_source(&self.source, Arc::clone(&self.file))
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Moves the cursor over the next `n` bytes, keeping line and column in step.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());

        for character in self.source[self.pos..end].chars() {
            self.offset += 1;
            if character == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }

        self.pos = end;
    }

    fn skip_whitespace(&mut self) {
        let skipped = WHITESPACE.find(self.remainder()).map(|found| found.end());

        if let Some(skipped) = skipped {
            self.advance_n(skipped);
        }
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    /// Yields tokens through the first `EOF` or error, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let token = self.next_token();
        match &token {
            Ok(token) if token.kind != TokenKind::EOF => {}
            _ => self.exhausted = true,
        }

        Some(token)
    }
}

fn comment_handler(lexer: &mut Lexer, matched: &str) -> Result<(TokenKind, TokenValue), Error> {
    lexer.advance_n(matched.len());
    Ok((TokenKind::Comment, TokenValue::Text(matched[1..].to_string())))
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<(TokenKind, TokenValue), Error> {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.advance_n(matched.len());
    Ok((kind, TokenValue::Text(matched.to_string())))
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Result<(TokenKind, TokenValue), Error> {
    let value = matched.parse::<u64>().map_err(|_| {
        lexer.error(
            ErrorImpl::NumberParseError { token: matched.to_string() },
            Lexer::position(lexer),
        )
    })?;

    lexer.advance_n(matched.len());
    Ok((TokenKind::NumericLiteral, TokenValue::Number(value)))
}

fn character_handler(lexer: &mut Lexer, _matched: &str) -> Result<(TokenKind, TokenValue), Error> {
    lexer.advance_n(1);

    let value = match lexer.at() {
        Some(character) if character != '\'' => character,
        found => return Err(malformed_character(lexer, found)),
    };
    lexer.advance_n(value.len_utf8());

    match lexer.at() {
        Some('\'') => lexer.advance_n(1),
        found => return Err(malformed_character(lexer, found)),
    }

    Ok((TokenKind::CharacterLiteral, TokenValue::Text(value.to_string())))
}

fn malformed_character(lexer: &Lexer, found: Option<char>) -> Error {
    let found = match found {
        Some(character) => format!("\"{}\"", character),
        None => String::from("end of file"),
    };

    lexer.error(ErrorImpl::MalformedCharacterLiteral { found }, Lexer::position(lexer))
}

fn string_handler(lexer: &mut Lexer, _matched: &str) -> Result<(TokenKind, TokenValue), Error> {
    lexer.advance_n(1);

    match lexer.remainder().find('"') {
        Some(length) => {
            let value = lexer.remainder()[..length].to_string();
            lexer.advance_n(length + 1);
            Ok((TokenKind::StringLiteral, TokenValue::Text(value)))
        }
        None => {
            lexer.advance_n(lexer.remainder().len());
            Err(lexer.error(ErrorImpl::UnexpectedEndOfFile, Lexer::position(lexer)))
        }
    }
}

fn punctuator_handler(lexer: &mut Lexer, matched: &str) -> Result<(TokenKind, TokenValue), Error> {
    lexer.advance_n(matched.len());
    Ok((TokenKind::Punctuator, TokenValue::Text(matched.to_string())))
}

/// Creates a lexer over `source`. Scanning errors surface from the token that
/// triggers them, never from this call.
pub fn tokenize(source: String, file: Option<String>) -> Lexer {
    Lexer::new(source, file)
}
