//! Lexical analysis module.
//!
//! This module contains the pull-based lexer that turns source text into
//! tokens on demand. It handles:
//!
//! - `#` comments, keywords, identifiers and the null/boolean words
//! - Numeric, character and (multi-line) string literals
//! - Longest-match punctuators such as `>>>`
//! - Exact offset/line/column tracking for every token

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
