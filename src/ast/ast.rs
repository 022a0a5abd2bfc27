use std::fmt::Display;

use crate::Location;

use super::{
    dump::dump,
    expressions::{BinaryExpr, CallExpr, LiteralExpr, NumberExpr, VariableExpr},
    statements::{PrototypeAST, ReturnExpr, VarDeclExpr},
};

/// Expression Types
///
/// The tag of an `Expr`, fixed when the node is built.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Number,
    Literal,
    Variable,
    Binary,
    Call,
    VarDecl,
    Return,
}

/// A node of a function body. Every variant exclusively owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    Literal(LiteralExpr),
    Variable(VariableExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
    VarDecl(VarDeclExpr),
    Return(ReturnExpr),
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Number(_) => ExprType::Number,
            Expr::Literal(_) => ExprType::Literal,
            Expr::Variable(_) => ExprType::Variable,
            Expr::Binary(_) => ExprType::Binary,
            Expr::Call(_) => ExprType::Call,
            Expr::VarDecl(_) => ExprType::VarDecl,
            Expr::Return(_) => ExprType::Return,
        }
    }

    /// Location of the first token of the node.
    pub fn get_location(&self) -> &Location {
        match self {
            Expr::Number(expr) => &expr.location,
            Expr::Literal(expr) => &expr.location,
            Expr::Variable(expr) => &expr.location,
            Expr::Binary(expr) => &expr.location,
            Expr::Call(expr) => &expr.location,
            Expr::VarDecl(expr) => &expr.location,
            Expr::Return(expr) => &expr.location,
        }
    }
}

/// A function definition: its prototype and the ordered body expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionAST {
    pub prototype: PrototypeAST,
    pub body: Vec<Expr>,
    pub location: Location,
}

/// Root of a parse: the functions of one source file, in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModuleAST {
    pub functions: Vec<FunctionAST>,
}

impl ModuleAST {
    pub fn get_function(&self, name: &str) -> Option<&FunctionAST> {
        self.functions
            .iter()
            .find(|function| function.prototype.name == name)
    }
}

impl Display for ModuleAST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", dump(self))
    }
}
