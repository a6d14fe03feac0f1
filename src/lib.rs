#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;


extern crate regex;

pub use lexer::lexer::tokenize;
pub use parser::parser::parse;

/// A point in the source text. All fields are 0-based; `offset` counts characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Position { offset, line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Half-open `[start, end)` range in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the text of the 0-based `line`, without its terminator.
pub fn get_line_at_position(source: &str, line: usize) -> String {
    source.split('\n').nth(line).unwrap_or_default().to_string()
}


/// Renders an error as a rustc-style block:
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `EOF`, did you miss a semicolon?)
/// -> main.cj
///   |
/// 1 | let x: Int = 5
///   | --------------^
/// ```
pub fn format_error(error: &Error) -> String {
    let position = error.get_position();

    let line_string = (position.line + 1).to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", error.get_file()));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(error.get_line_text());
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = position.column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    out
}

pub fn display_error(error: &Error) {
    println!("{}", format_error(error));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (String::from(&string[start..]), start)
}
