//! Error types and error handling for the front end.
//!
//! This module defines the single error type shared by the lexer and the
//! parser. It includes:
//!
//! - An error structure carrying the failing position, file and line text
//! - Specific error variants for scanning and parsing
//! - Caret-annotated formatting and suggestions

pub mod errors;
