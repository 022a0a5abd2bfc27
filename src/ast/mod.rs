/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Expr` node family, functions and modules
/// - expressions: Literal, variable, operator and call nodes
/// - statements: Declarations, returns and prototypes
/// - types: Shapes attached to variables and tensor literals
/// - dump: Indented structural text output
pub mod ast;
pub mod dump;
pub mod expressions;
pub mod statements;
pub mod types;
