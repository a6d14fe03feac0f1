use std::slice::Iter;

use crate::Span;

use super::{
    ast::{Element, Expr, Node, NodeType},
    expressions::{Identifier, Literal},
};

/// Root of every parse. Owns the whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub body: Vec<Element>,
    pub span: Span,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Element> {
        self.body.iter()
    }
}

impl Node for Program {
    fn get_node_type(&self) -> NodeType {
        NodeType::Program
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    pub span: Span,
}

impl Node for Comment {
    fn get_node_type(&self) -> NodeType {
        NodeType::Comment
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// `import { a, b } from "source";`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDeclaration {
    pub specifiers: Vec<ImportSpecifier>,
    pub source: Literal,
    pub span: Span,
}

impl Node for ImportDeclaration {
    fn get_node_type(&self) -> NodeType {
        NodeType::ImportDeclaration
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpecifier {
    pub id: Identifier,
    pub span: Span,
}

impl Node for ImportSpecifier {
    fn get_node_type(&self) -> NodeType {
        NodeType::ImportSpecifier
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// `let id: Type = init;` or, with `optional` set, `let id: Type? = init;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaration {
    pub id: Identifier,
    pub value_type: Identifier,
    pub optional: bool,
    pub init: Expr,
    pub span: Span,
}

impl Node for VariableDeclaration {
    fn get_node_type(&self) -> NodeType {
        NodeType::VariableDeclaration
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}
