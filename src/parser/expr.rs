use crate::{
    ast::{
        ast::Expr,
        expressions::{Argument, CallExpression, Identifier, Literal},
        types::LiteralValue,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{TokenKind, TokenValue},
};

use super::parser::Parser;

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let handler = parser
        .get_nud_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match handler {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected_token()),
    }
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Identifier, Error> {
    let marker = parser.marker();
    let token = parser.expect(TokenKind::Identifier)?;

    Ok(Identifier {
        name: token.value.to_string(),
        span: parser.finish(marker),
    })
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    Ok(Expr::Identifier(parse_identifier(parser)?))
}

pub fn parse_literal_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let marker = parser.marker();
    let token = parser.advance()?;
    let (kind, start) = (token.kind, token.span.start);

    let value = match (kind, token.value) {
        (TokenKind::StringLiteral, TokenValue::Text(text)) => LiteralValue::String(text),
        (TokenKind::NumericLiteral, TokenValue::Number(number)) => LiteralValue::Numeric(number),
        (TokenKind::CharacterLiteral, TokenValue::Text(text)) if text.chars().count() == 1 => {
            LiteralValue::Character(text.chars().next().unwrap_or_default())
        }
        (TokenKind::NullLiteral, _) => LiteralValue::Null,
        (TokenKind::BooleanLiteral, TokenValue::Text(text)) => LiteralValue::Boolean(text == "true"),
        _ => return Err(parser.error(ErrorImpl::UnexpectedToken { kind }, start)),
    };

    Ok(Expr::Literal(Literal {
        value,
        span: parser.finish(marker),
    }))
}

/// Parses a primary expression followed by any number of argument lists,
/// wrapping the accumulated expression in a new call for each one.
pub fn parse_call_chain(parser: &mut Parser) -> Result<Expr, Error> {
    let marker = parser.marker();
    let mut expression = parse_primary_expr(parser)?;

    while parser.match_punctuator("(") {
        let arguments = parse_arguments(parser)?;

        expression = Expr::Call(CallExpression {
            callee: Box::new(expression),
            arguments,
            span: parser.finish(marker),
        });
    }

    Ok(expression)
}

pub fn parse_arguments(parser: &mut Parser) -> Result<Vec<Argument>, Error> {
    parser.expect_punctuator("(")?;

    let mut args = vec![];

    while !parser.match_punctuator(")") {
        args.push(parse_argument(parser)?);
    }

    parser.expect_punctuator(")")?;

    Ok(args)
}

pub fn parse_argument(parser: &mut Parser) -> Result<Argument, Error> {
    let marker = parser.marker();
    let id = parse_identifier(parser)?;

    Ok(Argument {
        id,
        span: parser.finish(marker),
    })
}
