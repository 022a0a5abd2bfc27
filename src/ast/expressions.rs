use crate::{lexer::tokens::TokenKind, Location};

use super::{ast::Expr, types::VarType};

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
    pub location: Location,
}

/// Literal Expression
/// Represents a tensor literal such as `[[1, 2], [3, 4]]`. Each value is
/// either a `Number` or a nested `Literal`.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub values: Vec<Expr>,
    pub var_type: VarType,
    pub location: Location,
}

impl LiteralExpr {
    /// The shape is the element count followed by the shape of the first
    /// nested literal, if any. Ragged input is left for later stages.
    pub fn new(values: Vec<Expr>, location: Location) -> Self {
        let mut shape = vec![values.len()];
        if let Some(Expr::Literal(first)) = values.first() {
            shape.extend(first.var_type.shape.iter().copied());
        }

        LiteralExpr {
            values,
            var_type: VarType::new(shape),
            location,
        }
    }
}

/// Variable Expression
/// Represents a reference to a named variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: String,
    pub location: Location,
}

// OPERATORS

/// Binary operators understood by the precedence climber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Less,
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperator {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Less => Some(BinaryOperator::Less),
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Dash => Some(BinaryOperator::Sub),
            TokenKind::Star => Some(BinaryOperator::Mul),
            TokenKind::Slash => Some(BinaryOperator::Div),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Less => '<',
            BinaryOperator::Add => '+',
            BinaryOperator::Sub => '-',
            BinaryOperator::Mul => '*',
            BinaryOperator::Div => '/',
        }
    }
}

/// Binary Expression
/// Located at its operator.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub location: Location,
}

/// Call Expression
/// Represents `callee(args...)`; the callee is resolved by a later stage.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub arguments: Vec<Expr>,
    pub location: Location,
}
