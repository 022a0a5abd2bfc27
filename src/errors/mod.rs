//! Error types and error handling for the front-end.
//!
//! This module defines the error types produced while reading and parsing
//! source files. It includes:
//!
//! - Error structures with source location information
//! - Specific error variants for file access, syntax and literals
//! - Helpful tips used by the caret diagnostic in `render_error`

pub mod errors;
