//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive descent parser that transforms the
//! lexer's token stream into a Program. It handles:
//!
//! - Top-level dispatch between comments, imports, declarations and
//!   expression statements
//! - Primary expressions and left-associative call chains
//! - Span bookkeeping for every node
//! - Fail-fast error reporting on the first mismatch

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
