//! Lexical analysis module for the front-end.
//!
//! This module contains the lexer (tokenizer) that turns source text
//! into tokens on demand for the parser. It handles:
//!
//! - Keywords (`def`, `var`, `return`), identifiers and number literals
//! - Single-character punctuation and operators
//! - `#` line comments and whitespace
//! - Line/column tracking for every token

pub mod lexer;
pub mod tokens;
