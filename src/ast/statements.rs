use crate::Location;

use super::{ast::Expr, types::VarType};

/// Variable Declaration
/// `var name<d0, d1> = value`. The initializer is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclExpr {
    pub name: String,
    pub var_type: VarType,
    pub value: Box<Expr>,
    pub location: Location,
}

/// Return Statement
/// `return` with an optional value.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnExpr {
    pub value: Option<Box<Expr>>,
    pub location: Location,
}

/// A named parameter of a prototype.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub location: Location,
}

/// Function Prototype
/// The function name and its ordered parameters, located at `def`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrototypeAST {
    pub name: String,
    pub params: Vec<Param>,
    pub location: Location,
}

impl PrototypeAST {
    pub fn param_names(&self) -> Vec<&str> {
        self.params.iter().map(|param| param.name.as_str()).collect()
    }
}
