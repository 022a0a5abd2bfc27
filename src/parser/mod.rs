//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that pulls tokens
//! from the lexer and builds a `ModuleAST`. It handles:
//!
//! - Definitions, prototypes and blocks
//! - Statements (variable declarations, returns, bare expressions)
//! - Expressions, with precedence climbing for binary operators
//! - Tensor literals and shape annotations
//!
//! There is no error recovery: the first syntax error fails the parse.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
