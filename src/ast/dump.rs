//! Structural text dump of the AST.
//!
//! Each node is printed on its own line as `label @file line:column`, indented
//! two spaces per nesting level:
//!
//! ```text
//! Module:
//!   Function: add @add.toy 1:1
//!     Prototype: add @add.toy 1:1
//!       Param: a @add.toy 1:9
//!       Param: b @add.toy 1:12
//!     Block:
//!       Return: @add.toy 2:3
//!         BinOp: + @add.toy 2:12
//!           Variable: a @add.toy 2:10
//!           Variable: b @add.toy 2:14
//! ```

use std::{cell::Cell, fmt, rc::Rc};

use crate::Location;

use super::{
    ast::{Expr, FunctionAST, ModuleAST},
    statements::PrototypeAST,
};

/// Raises the nesting level for as long as it is alive.
struct Indent {
    level: Rc<Cell<usize>>,
}

impl Indent {
    fn new(level: &Rc<Cell<usize>>) -> Self {
        level.set(level.get() + 1);
        Indent {
            level: Rc::clone(level),
        }
    }
}

impl Drop for Indent {
    fn drop(&mut self) {
        self.level.set(self.level.get() - 1);
    }
}

pub struct ASTDumper<'a> {
    out: &'a mut dyn fmt::Write,
    level: Rc<Cell<usize>>,
}

impl<'a> ASTDumper<'a> {
    pub fn new(out: &'a mut dyn fmt::Write) -> Self {
        ASTDumper {
            out,
            level: Rc::new(Cell::new(0)),
        }
    }

    /// Current nesting level; zero whenever no dump is in progress.
    pub fn level(&self) -> usize {
        self.level.get()
    }

    fn indent(&self) -> Indent {
        Indent::new(&self.level)
    }

    fn line(&mut self, label: fmt::Arguments, location: Option<&Location>) -> fmt::Result {
        for _ in 0..self.level.get() {
            self.out.write_str("  ")?;
        }
        self.out.write_fmt(label)?;
        if let Some(location) = location {
            write!(self.out, " @{}", location)?;
        }
        self.out.write_char('\n')
    }

    pub fn dump_module(&mut self, module: &ModuleAST) -> fmt::Result {
        self.line(format_args!("Module:"), None)?;
        let _indent = self.indent();
        for function in &module.functions {
            self.dump_function(function)?;
        }
        Ok(())
    }

    pub fn dump_function(&mut self, function: &FunctionAST) -> fmt::Result {
        self.line(
            format_args!("Function: {}", function.prototype.name),
            Some(&function.location),
        )?;
        let _indent = self.indent();
        self.dump_prototype(&function.prototype)?;

        self.line(format_args!("Block:"), None)?;
        let _block = self.indent();
        for expr in &function.body {
            self.dump_expr(expr)?;
        }
        Ok(())
    }

    fn dump_prototype(&mut self, prototype: &PrototypeAST) -> fmt::Result {
        self.line(
            format_args!("Prototype: {}", prototype.name),
            Some(&prototype.location),
        )?;
        let _indent = self.indent();
        for param in &prototype.params {
            self.line(format_args!("Param: {}", param.name), Some(&param.location))?;
        }
        Ok(())
    }

    pub fn dump_expr(&mut self, expr: &Expr) -> fmt::Result {
        match expr {
            Expr::Number(number) => {
                self.line(format_args!("Number: {}", number.value), Some(&number.location))
            }
            Expr::Literal(literal) => {
                self.line(
                    format_args!("Literal: {}", literal.var_type),
                    Some(&literal.location),
                )?;
                let _indent = self.indent();
                for value in &literal.values {
                    self.dump_expr(value)?;
                }
                Ok(())
            }
            Expr::Variable(variable) => self.line(
                format_args!("Variable: {}", variable.name),
                Some(&variable.location),
            ),
            Expr::Binary(binary) => {
                self.line(
                    format_args!("BinOp: {}", binary.operator.symbol()),
                    Some(&binary.location),
                )?;
                let _indent = self.indent();
                self.dump_expr(&binary.left)?;
                self.dump_expr(&binary.right)
            }
            Expr::Call(call) => {
                self.line(format_args!("Call: {}", call.callee), Some(&call.location))?;
                let _indent = self.indent();
                for argument in &call.arguments {
                    self.dump_expr(argument)?;
                }
                Ok(())
            }
            Expr::VarDecl(decl) => {
                if decl.var_type.is_specified() {
                    self.line(
                        format_args!("VarDecl: {}{}", decl.name, decl.var_type),
                        Some(&decl.location),
                    )?;
                } else {
                    self.line(format_args!("VarDecl: {}", decl.name), Some(&decl.location))?;
                }
                let _indent = self.indent();
                self.dump_expr(&decl.value)
            }
            Expr::Return(ret) => {
                self.line(format_args!("Return:"), Some(&ret.location))?;
                let _indent = self.indent();
                if let Some(value) = &ret.value {
                    self.dump_expr(value)?;
                }
                Ok(())
            }
        }
    }
}

/// Renders `module` as indented structural text.
pub fn dump(module: &ModuleAST) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = ASTDumper::new(&mut out).dump_module(module);
    out
}

pub fn dump_expr(expr: &Expr) -> String {
    let mut out = String::new();
    let _ = ASTDumper::new(&mut out).dump_expr(expr);
    out
}
