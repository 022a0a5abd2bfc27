use std::collections::HashMap;

use crate::{
    ast::{ast::Expr, expressions::BinaryOperator},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Binding strength of binary operators; higher binds tighter.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Relational = 10,
    Additive = 20,
    Multiplicative = 40,
}

pub fn binding_power(operator: BinaryOperator) -> BindingPower {
    match operator {
        BinaryOperator::Less => BindingPower::Relational,
        BinaryOperator::Add | BinaryOperator::Sub => BindingPower::Additive,
        BinaryOperator::Mul | BinaryOperator::Div => BindingPower::Multiplicative,
    }
}

/// Precedence of `kind` as a binary operator, or -1 when it is not one.
pub fn get_token_precedence(kind: TokenKind) -> i32 {
    BinaryOperator::from_token(kind).map_or(-1, |operator| binding_power(operator) as i32)
}

pub type StmtHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Primaries
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::Number, parse_number_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
    parser.nud(TokenKind::OpenBracket, parse_literal_expr);

    // Statements
    parser.stmt(TokenKind::Var, parse_var_decl_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
