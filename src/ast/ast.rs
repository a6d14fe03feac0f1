use std::fmt::{Debug, Display};

use crate::Span;

use super::{
    expressions::{CallExpression, Identifier, Literal},
    statements::{Comment, ImportDeclaration, VariableDeclaration},
};

/// Node Types
///
/// The closed set of node kinds the parser produces.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum NodeType {
    Program,
    Comment,
    ImportDeclaration,
    ImportSpecifier,
    VariableDeclaration,
    CallExpression,
    Argument,
    Identifier,
    Literal,
}

impl Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Node Trait
///
/// Behaviour shared by every AST node.
pub trait Node: Debug {
    /// Returns the kind of the node.
    fn get_node_type(&self) -> NodeType;
    /// Returns the span of the node.
    fn get_span(&self) -> &Span;
}

/// Expression
///
/// Anything that can stand as a primary expression or a call chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Identifier(Identifier),
    Literal(Literal),
    Call(CallExpression),
}

impl Node for Expr {
    fn get_node_type(&self) -> NodeType {
        match self {
            Expr::Identifier(identifier) => identifier.get_node_type(),
            Expr::Literal(literal) => literal.get_node_type(),
            Expr::Call(call) => call.get_node_type(),
        }
    }
    fn get_span(&self) -> &Span {
        match self {
            Expr::Identifier(identifier) => identifier.get_span(),
            Expr::Literal(literal) => literal.get_span(),
            Expr::Call(call) => call.get_span(),
        }
    }
}

/// Element
///
/// A top-level entry in a program body. Expression statements are stored as
/// the bare expression, so their span stops before the `;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Comment(Comment),
    ImportDeclaration(ImportDeclaration),
    VariableDeclaration(VariableDeclaration),
    Expression(Expr),
}

impl Node for Element {
    fn get_node_type(&self) -> NodeType {
        match self {
            Element::Comment(comment) => comment.get_node_type(),
            Element::ImportDeclaration(import) => import.get_node_type(),
            Element::VariableDeclaration(declaration) => declaration.get_node_type(),
            Element::Expression(expression) => expression.get_node_type(),
        }
    }
    fn get_span(&self) -> &Span {
        match self {
            Element::Comment(comment) => comment.get_span(),
            Element::ImportDeclaration(import) => import.get_span(),
            Element::VariableDeclaration(declaration) => declaration.get_span(),
            Element::Expression(expression) => expression.get_span(),
        }
    }
}
