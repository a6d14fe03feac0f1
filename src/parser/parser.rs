//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser pulls tokens from a [`Lexer`] one at a time and keeps exactly
//! one of them buffered as the lookahead.
//!
//! Spans follow a marker protocol: a rule takes [`Parser::marker`] before it
//! consumes anything and closes its node with [`Parser::finish`], whose end is
//! the start of whatever token is left in the lookahead.
//!
//! It maintains lookup tables for:
//! - Statement handlers, keyed by keyword
//! - NUD (null denotation) handlers for primary expressions, keyed by token kind

use std::collections::HashMap;

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::{
    lookups::{create_token_lookups, NUDHandler, NUDLookup, StmtHandler, StmtLookup},
    stmt::parse_element,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The token source
    lexer: Lexer,
    /// The next token, not yet consumed
    lookahead: Token,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for primary expression handlers
    nud_lookup: NUDLookup,
}

impl Parser {
    /// Creates a new Parser and buffers the first token.
    ///
    /// # Arguments
    ///
    /// * `lexer` - The lexer positioned at the start of the source
    ///
    /// # Returns
    ///
    /// The parser, or the scanning error raised by the first token.
    pub fn new(mut lexer: Lexer) -> Result<Self, Error> {
        let lookahead = lexer.next_token()?;

        let mut parser = Parser {
            lexer,
            lookahead,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        Ok(parser)
    }

    /// Returns the lookahead token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.lookahead
    }

    /// Returns the kind of the lookahead token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.lookahead.kind
    }

    /// Consumes the lookahead, refills it from the lexer and returns the consumed token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.lookahead, next))
    }

    /// Expects a token of the specified kind and consumes it.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the lookahead matches, otherwise an UnexpectedToken error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.lookahead.kind != expected_kind {
            return Err(self.unexpected_token());
        }

        self.advance()
    }

    /// Expects the keyword `keyword` and consumes it.
    pub fn expect_keyword(&mut self, keyword: &str) -> Result<Token, Error> {
        if !self.lookahead.is(TokenKind::Keyword, keyword) {
            return Err(self.unexpected_token());
        }

        self.advance()
    }

    /// Expects the punctuator `punctuator` and consumes it.
    pub fn expect_punctuator(&mut self, punctuator: &str) -> Result<Token, Error> {
        if !self.match_punctuator(punctuator) {
            return Err(self.unexpected_token());
        }

        self.advance()
    }

    /// Checks whether the lookahead is the punctuator `punctuator`.
    pub fn match_punctuator(&self, punctuator: &str) -> bool {
        self.lookahead.is(TokenKind::Punctuator, punctuator)
    }

    /// Returns true while the lookahead is not EOF.
    pub fn has_tokens(&self) -> bool {
        self.lookahead.kind != TokenKind::EOF
    }

    /// Opens a node at the start of the lookahead.
    pub fn marker(&self) -> Position {
        self.lookahead.span.start
    }

    /// Closes a node opened at `marker` just before the lookahead.
    pub fn finish(&self, marker: Position) -> Span {
        Span {
            start: marker,
            end: self.lookahead.span.start,
        }
    }

    /// Builds an error tied to this parser's source.
    pub fn error(&self, error_impl: ErrorImpl, position: Position) -> Error {
        self.lexer.error(error_impl, position)
    }

    /// An UnexpectedToken error for the lookahead.
    pub fn unexpected_token(&self) -> Error {
        self.error(
            ErrorImpl::UnexpectedToken { kind: self.lookahead.kind },
            self.lookahead.span.start,
        )
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Registers a primary expression handler for a token kind.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a keyword.
    pub fn stmt(&mut self, keyword: &'static str, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(keyword, stmt_fn);
    }
}

/// Parses `source` into a Program.
///
/// This is the main entry point: it runs the lexer and the parser in a single
/// pass and stops at the first scanning or syntax error.
///
/// # Arguments
///
/// * `source` - The source text
/// * `file` - Optional file name used in diagnostics, `"shell"` when absent
pub fn parse(source: String, file: Option<String>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokenize(source, file))?;
    parse_program(&mut parser)
}

/// Parses elements until EOF.
pub fn parse_program(parser: &mut Parser) -> Result<Program, Error> {
    let marker = parser.marker();

    let mut body = vec![];
    while parser.has_tokens() {
        body.push(parse_element(parser)?);
    }

    Ok(Program {
        body,
        span: parser.finish(marker),
    })
}
