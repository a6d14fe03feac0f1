use crate::Span;

use super::{
    ast::{Expr, Node, NodeType},
    types::{LiteralType, LiteralValue},
};

// LITERALS

/// Identifier
/// A bare name: a variable, a callee, a type annotation or an argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

impl Node for Identifier {
    fn get_node_type(&self) -> NodeType {
        NodeType::Identifier
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Literal
/// A string, numeric, character, boolean or null constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub value: LiteralValue,
    pub span: Span,
}

impl Literal {
    pub fn value_type(&self) -> LiteralType {
        self.value.value_type()
    }
}

impl Node for Literal {
    fn get_node_type(&self) -> NodeType {
        NodeType::Literal
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

// COMPLEX

/// Call Expression
/// `callee(args...)`. The callee may itself be a call, as in `f(a)(b)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpression {
    pub callee: Box<Expr>,
    pub arguments: Vec<Argument>,
    pub span: Span,
}

impl Node for CallExpression {
    fn get_node_type(&self) -> NodeType {
        NodeType::CallExpression
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub id: Identifier,
    pub span: Span,
}

impl Node for Argument {
    fn get_node_type(&self) -> NodeType {
        NodeType::Argument
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}
