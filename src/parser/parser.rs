//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and its entry points.
//! The parser pulls tokens from the lexer one at a time and dispatches on
//! the current token through lookup tables for:
//! - Statement handlers (`var`, `return`)
//! - NUD (null denotation) handlers for primary expressions
//!
//! Binary expressions are handled by precedence climbing in `expr.rs`.

use std::{cell::Cell, collections::HashMap, process, rc::Rc};

use tracing::{debug, error};

use crate::{
    ast::ast::ModuleAST,
    config::{ErrorPolicy, ParserConfig},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    render_error, Location,
};

use super::{
    lookups::{create_token_lookups, NUDHandler, NUDLookup, StmtHandler, StmtLookup},
    stmt::parse_definition,
};

/// Deepest expression nesting accepted before the parse is abandoned.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Holds one level of expression nesting for as long as it is alive.
pub struct Nesting {
    depth: Rc<Cell<usize>>,
}

impl Drop for Nesting {
    fn drop(&mut self) {
        self.depth.set(self.depth.get() - 1);
    }
}

/// The main parser structure that maintains parsing state.
///
/// The parser owns the lexer for the whole parse and looks at exactly one
/// token, the lexer's current one.
pub struct Parser {
    /// Source of tokens, advanced as tokens are eaten
    lexer: Lexer,
    /// What happens when a syntax error is raised
    config: ParserConfig,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (primary) expression handlers
    nud_lookup: NUDLookup,
    /// Expressions currently being parsed, innermost included
    depth: Rc<Cell<usize>>,
}

impl Parser {
    /// Creates a new Parser instance with its lookup tables filled in.
    ///
    /// # Arguments
    ///
    /// * `lexer` - Lexer positioned at the first token
    /// * `config` - Error policy and reporting switch
    pub fn new(lexer: Lexer, config: ParserConfig) -> Self {
        let mut parser = Parser {
            lexer,
            config,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            depth: Rc::new(Cell::new(0)),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.lexer.current()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.lexer.current_kind()
    }

    /// Eats the current token and returns it.
    pub fn advance(&mut self) -> Token {
        let token = self.lexer.current().clone();
        self.lexer.advance();
        token
    }

    /// Location of the current token.
    pub fn get_location(&self) -> Location {
        self.lexer.location()
    }

    /// Eats a token of the specified kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `expected` - Description of what was expected, used in the diagnostic
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an UnexpectedToken error.
    pub fn expect(&mut self, expected_kind: TokenKind, expected: &str) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            Err(self.unexpected(expected))
        } else {
            Ok(self.advance())
        }
    }

    /// Raises an UnexpectedToken error against the current token.
    pub fn unexpected(&self, expected: &str) -> Error {
        self.error(ErrorImpl::UnexpectedToken {
            expected: expected.to_string(),
            found: self.current_token().to_string(),
        })
    }

    /// Raises an error at the current token.
    pub fn error(&self, error_impl: ErrorImpl) -> Error {
        self.error_at(error_impl, self.get_location())
    }

    /// Raises an error at `location`.
    ///
    /// This is the only place the error policy is applied: the diagnostic is
    /// printed once, then the process exits under `ErrorPolicy::Abort`.
    pub fn error_at(&self, error_impl: ErrorImpl, location: Location) -> Error {
        let error = Error::new(error_impl, location);
        debug!(%error, "syntax error");

        if self.config.report {
            eprintln!("{}", render_error(&error, self.lexer.source()));
        }

        if self.config.error_policy == ErrorPolicy::Abort {
            error!("aborting on first syntax error");
            process::exit(1);
        }

        error
    }

    /// Enters one more level of expression nesting.
    ///
    /// Fails with `NestingTooDeep` once `MAX_NESTING_DEPTH` levels are open,
    /// so deeply nested input is reported instead of exhausting the stack.
    pub fn enter_nesting(&self) -> Result<Nesting, Error> {
        if self.depth.get() >= MAX_NESTING_DEPTH {
            return Err(self.error(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }

        self.depth.set(self.depth.get() + 1);
        Ok(Nesting {
            depth: Rc::clone(&self.depth),
        })
    }

    /// Current expression nesting depth; zero between statements.
    pub fn nesting_depth(&self) -> usize {
        self.depth.get()
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Registers a null denotation (primary) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Parses definitions until the end of input.
    ///
    /// The first failing definition fails the whole module; no partial
    /// module is returned.
    pub fn parse_module(&mut self) -> Result<ModuleAST, Error> {
        let mut functions = vec![];

        while self.current_token_kind() != TokenKind::EOF {
            functions.push(parse_definition(self)?);
        }

        debug!(functions = functions.len(), file = %self.lexer.file(), "parsed module");
        Ok(ModuleAST { functions })
    }
}

/// Parses everything `lexer` produces into a module.
///
/// This is the main entry point for parsing.
///
/// # Arguments
///
/// * `lexer` - Lexer over the source to parse
/// * `config` - Error policy and reporting switch
pub fn parse(lexer: Lexer, config: ParserConfig) -> Result<ModuleAST, Error> {
    let mut parser = Parser::new(lexer, config);
    parser.parse_module()
}
