use std::collections::HashMap;

use crate::{
    ast::ast::{Element, Expr},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<Element, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Literals and symbols
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::StringLiteral, parse_literal_expr);
    parser.nud(TokenKind::NumericLiteral, parse_literal_expr);
    parser.nud(TokenKind::CharacterLiteral, parse_literal_expr);
    parser.nud(TokenKind::NullLiteral, parse_literal_expr);
    parser.nud(TokenKind::BooleanLiteral, parse_literal_expr);

    // Statements
    parser.stmt("import", parse_import_declaration);
    parser.stmt("let", parse_variable_declaration);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<&'static str, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
