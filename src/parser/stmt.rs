use crate::{
    ast::{
        ast::{Element, Expr, Node},
        statements::{Comment, ImportDeclaration, ImportSpecifier, VariableDeclaration},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_call_chain, parse_identifier, parse_primary_expr},
    parser::Parser,
};

/// Dispatches on the lookahead. Keywords without a handler, such as `from`,
/// fall through to an expression statement.
pub fn parse_element(parser: &mut Parser) -> Result<Element, Error> {
    let token = parser.current_token();

    if token.kind == TokenKind::Comment {
        return parse_comment(parser);
    }

    if token.kind == TokenKind::Keyword {
        let handler = token
            .value
            .as_str()
            .and_then(|keyword| parser.get_stmt_lookup().get(keyword).copied());

        if let Some(handler) = handler {
            return handler(parser);
        }
    }

    parse_expression_stmt(parser)
}

pub fn parse_comment(parser: &mut Parser) -> Result<Element, Error> {
    let marker = parser.marker();
    let token = parser.expect(TokenKind::Comment)?;

    Ok(Element::Comment(Comment {
        text: token.value.to_string(),
        span: parser.finish(marker),
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Element, Error> {
    let expression = parse_call_chain(parser)?;

    parser.expect_punctuator(";")?;

    Ok(Element::Expression(expression))
}

pub fn parse_import_specifier(parser: &mut Parser) -> Result<ImportSpecifier, Error> {
    let marker = parser.marker();
    let id = parse_identifier(parser)?;

    Ok(ImportSpecifier {
        id,
        span: parser.finish(marker),
    })
}

pub fn parse_import_declaration(parser: &mut Parser) -> Result<Element, Error> {
    let marker = parser.marker();

    parser.expect_keyword("import")?;
    parser.expect_punctuator("{")?;

    let mut specifiers = vec![parse_import_specifier(parser)?];
    while parser.match_punctuator(",") {
        parser.advance()?;
        specifiers.push(parse_import_specifier(parser)?);
    }

    parser.expect_punctuator("}")?;
    parser.expect_keyword("from")?;

    let source_kind = parser.current_token_kind();
    let source = match parse_primary_expr(parser)? {
        Expr::Literal(literal) => literal,
        other => {
            return Err(parser.error(
                ErrorImpl::UnexpectedTokenDetailed {
                    kind: source_kind,
                    message: String::from("expected a literal import source"),
                },
                other.get_span().start,
            ))
        }
    };

    parser.expect_punctuator(";")?;

    Ok(Element::ImportDeclaration(ImportDeclaration {
        specifiers,
        source,
        span: parser.finish(marker),
    }))
}

pub fn parse_variable_declaration(parser: &mut Parser) -> Result<Element, Error> {
    let marker = parser.marker();

    parser.expect_keyword("let")?;
    let id = parse_identifier(parser)?;

    parser.expect_punctuator(":")?;
    let value_type = parse_identifier(parser)?;

    let optional = parser.match_punctuator("?");
    if optional {
        parser.advance()?;
    }

    parser.expect_punctuator("=")?;
    let init = parse_primary_expr(parser)?;
    parser.expect_punctuator(";")?;

    Ok(Element::VariableDeclaration(VariableDeclaration {
        id,
        value_type,
        optional,
        init,
        span: parser.finish(marker),
    }))
}
