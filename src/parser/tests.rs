//! Unit tests for the parser module.
//!
//! This module contains tests for parsing:
//! - Definitions and prototypes
//! - Variable declarations and shapes
//! - Returns
//! - Expressions and operator precedence
//! - Tensor literals
//! - Syntax errors

use crate::{
    ast::ast::{Expr, ModuleAST},
    config::ParserConfig,
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::Lexer,
};

use super::{
    lookups::get_token_precedence,
    parser::{parse, Parser, MAX_NESTING_DEPTH},
};

fn parse_source(source: &str) -> Result<ModuleAST, Error> {
    let lexer = Lexer::new(source.to_string(), Some("test.toy".to_string()));
    parse(lexer, ParserConfig::quiet())
}

/// Parses `expr` as the only statement of a function and returns it.
fn parse_single(statement: &str) -> Expr {
    let source = format!("def main() {{ {}; }}", statement);
    let mut module = parse_source(&source).unwrap();
    module.functions.remove(0).body.remove(0)
}

/// Compact prefix form used to compare tree shapes.
fn sexpr(expr: &Expr) -> String {
    match expr {
        Expr::Number(number) => number.value.to_string(),
        Expr::Variable(variable) => variable.name.clone(),
        Expr::Binary(binary) => format!(
            "({} {} {})",
            binary.operator.symbol(),
            sexpr(&binary.left),
            sexpr(&binary.right)
        ),
        Expr::Call(call) => {
            let args: Vec<String> = call.arguments.iter().map(sexpr).collect();
            format!("{}({})", call.callee, args.join(", "))
        }
        Expr::Literal(literal) => {
            let values: Vec<String> = literal.values.iter().map(sexpr).collect();
            format!("[{}]", values.join(", "))
        }
        Expr::VarDecl(decl) => format!("(var {} {})", decl.name, sexpr(&decl.value)),
        Expr::Return(ret) => match &ret.value {
            Some(value) => format!("(return {})", sexpr(value)),
            None => "(return)".to_string(),
        },
    }
}

fn error_kind(source: &str) -> ErrorImpl {
    match parse_source(source) {
        Err(error) => error.get_kind().clone(),
        Ok(module) => panic!("Expected parse failure, got {:?}", module),
    }
}

#[test]
fn test_parse_empty_program() {
    let module = parse_source("").unwrap();
    assert!(module.functions.is_empty());

    let module = parse_source("# only a comment\n").unwrap();
    assert!(module.functions.is_empty());
}

#[test]
fn test_parse_empty_function() {
    let module = parse_source("def f() {}").unwrap();

    assert_eq!(module.functions.len(), 1);
    let function = &module.functions[0];
    assert_eq!(function.prototype.name, "f");
    assert!(function.prototype.params.is_empty());
    assert!(function.body.is_empty());
}

#[test]
fn test_parse_function_with_return() {
    let module = parse_source("def f(a,b) { return a+b; }").unwrap();
    let function = &module.functions[0];

    assert_eq!(function.prototype.param_names(), vec!["a", "b"]);
    assert_eq!(function.body.len(), 1);
    assert_eq!(sexpr(&function.body[0]), "(return (+ a b))");
}

#[test]
fn test_parse_multiple_functions() {
    let source = "def a() { return; }\ndef b(x) { return x; }\ndef c() {}";
    let module = parse_source(source).unwrap();

    let names: Vec<&str> = module
        .functions
        .iter()
        .map(|function| function.prototype.name.as_str())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert!(module.get_function("b").is_some());
    assert!(module.get_function("d").is_none());
}

#[test]
fn test_precedence_mul_over_add() {
    assert_eq!(sexpr(&parse_single("1+2*3")), "(+ 1 (* 2 3))");
    assert_eq!(sexpr(&parse_single("1*2+3")), "(+ (* 1 2) 3)");
}

#[test]
fn test_equal_precedence_is_left_associative() {
    assert_eq!(sexpr(&parse_single("1-2-3")), "(- (- 1 2) 3)");
    assert_eq!(sexpr(&parse_single("8/4/2")), "(/ (/ 8 4) 2)");
    assert_eq!(sexpr(&parse_single("a+b-c")), "(- (+ a b) c)");
}

#[test]
fn test_less_binds_loosest() {
    assert_eq!(sexpr(&parse_single("a+1 < b*2")), "(< (+ a 1) (* b 2))");
}

#[test]
fn test_mixed_precedence_chain() {
    assert_eq!(
        sexpr(&parse_single("1+2*3*4-5")),
        "(- (+ 1 (* (* 2 3) 4)) 5)"
    );
    assert_eq!(
        sexpr(&parse_single("a < b + c * d")),
        "(< a (+ b (* c d)))"
    );
}

#[test]
fn test_parenthesized_expression() {
    assert_eq!(sexpr(&parse_single("(1+2)*3")), "(* (+ 1 2) 3)");
    assert_eq!(sexpr(&parse_single("((x))")), "x");
}

#[test]
fn test_parse_calls() {
    assert_eq!(sexpr(&parse_single("print()")), "print()");
    assert_eq!(sexpr(&parse_single("f(1, g(x), a*b)")), "f(1, g(x), (* a b))");
    assert_eq!(sexpr(&parse_single("f(1) + 2")), "(+ f(1) 2)");
}

#[test]
fn test_parse_var_decl() {
    let expr = parse_single("var a = 1 + 2");
    assert_eq!(sexpr(&expr), "(var a (+ 1 2))");

    let Expr::VarDecl(decl) = expr else {
        panic!("Expected a variable declaration");
    };
    assert!(!decl.var_type.is_specified());
}

#[test]
fn test_parse_var_decl_with_shape() {
    let Expr::VarDecl(decl) = parse_single("var a<2, 3> = b") else {
        panic!("Expected a variable declaration");
    };

    assert_eq!(decl.var_type.shape, vec![2, 3]);
    assert_eq!(sexpr(&decl.value), "b");
}

#[test]
fn test_shape_is_not_checked_against_initializer() {
    let Expr::VarDecl(decl) = parse_single("var a<7, 7> = [1, 2]") else {
        panic!("Expected a variable declaration");
    };

    assert_eq!(decl.var_type.shape, vec![7, 7]);
}

#[test]
fn test_parse_return_forms() {
    assert_eq!(sexpr(&parse_single("return")), "(return)");
    assert_eq!(sexpr(&parse_single("return 0")), "(return 0)");
}

#[test]
fn test_parse_tensor_literal() {
    let Expr::Literal(literal) = parse_single("[1, 2, 3]") else {
        panic!("Expected a tensor literal");
    };
    assert_eq!(literal.var_type.shape, vec![3]);
    assert_eq!(literal.values.len(), 3);
}

#[test]
fn test_parse_nested_tensor_literal() {
    let expr = parse_single("[[1, 2, 3], [4, 5, 6]]");
    assert_eq!(sexpr(&expr), "[[1, 2, 3], [4, 5, 6]]");

    let Expr::Literal(literal) = expr else {
        panic!("Expected a tensor literal");
    };
    assert_eq!(literal.var_type.shape, vec![2, 3]);
}

#[test]
fn test_tensor_literal_in_expression() {
    assert_eq!(sexpr(&parse_single("[1, 2] * [3, 4]")), "(* [1, 2] [3, 4])");
}

#[test]
fn test_parse_numbers() {
    assert_eq!(sexpr(&parse_single("3.5")), "3.5");
    assert_eq!(sexpr(&parse_single(".5")), "0.5");
}

#[test]
fn test_node_locations() {
    let source = "def add(a, b) {\n  var c = a * b;\n  return add(c, 1);\n}";
    let module = parse_source(source).unwrap();
    let function = &module.functions[0];

    assert_eq!((function.location.line, function.location.column), (1, 1));
    assert_eq!(
        (function.prototype.location.line, function.prototype.location.column),
        (1, 1)
    );
    let params: Vec<(usize, usize)> = function
        .prototype
        .params
        .iter()
        .map(|param| (param.location.line, param.location.column))
        .collect();
    assert_eq!(params, vec![(1, 9), (1, 12)]);

    let Expr::VarDecl(decl) = &function.body[0] else {
        panic!("Expected a variable declaration");
    };
    assert_eq!((decl.location.line, decl.location.column), (2, 3));
    // Binary nodes are located at their operator
    let location = decl.value.get_location();
    assert_eq!((location.line, location.column), (2, 13));

    let Expr::Return(ret) = &function.body[1] else {
        panic!("Expected a return");
    };
    assert_eq!((ret.location.line, ret.location.column), (3, 3));
    let location = ret.value.as_ref().unwrap().get_location();
    assert_eq!((location.line, location.column), (3, 10));
    assert_eq!(*location.file, "test.toy");
}

#[test]
fn test_error_missing_close_paren() {
    let error = parse_source("def f( { }").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_location().line, 1);
    assert_eq!(error.get_location().column, 8);
}

#[test]
fn test_error_reports_expected_and_found() {
    assert_eq!(
        error_kind("def f() { return 1 }"),
        ErrorImpl::UnexpectedToken {
            expected: "`;` after expression".to_string(),
            found: "`}`".to_string(),
        }
    );
}

#[test]
fn test_error_trailing_comma_in_prototype() {
    assert!(matches!(
        error_kind("def f(a,) {}"),
        ErrorImpl::UnexpectedToken { .. }
    ));
}

#[test]
fn test_error_trailing_comma_in_call() {
    assert!(matches!(
        error_kind("def f() { g(1,); }"),
        ErrorImpl::UnexpectedToken { .. }
    ));
}

#[test]
fn test_error_var_without_initializer() {
    assert_eq!(
        error_kind("def f() { var a; }"),
        ErrorImpl::UnexpectedToken {
            expected: "`=` in variable declaration".to_string(),
            found: "`;`".to_string(),
        }
    );
}

#[test]
fn test_error_shape_needs_two_dimensions() {
    assert_eq!(
        error_kind("def f() { var a<2> = b; }"),
        ErrorImpl::InvalidShape { found: 1 }
    );
    assert_eq!(
        error_kind("def f() { var a<2, 3, 4> = b; }"),
        ErrorImpl::InvalidShape { found: 3 }
    );
}

#[test]
fn test_error_shape_dimension_must_be_integer() {
    assert_eq!(
        error_kind("def f() { var a<2.5, 3> = b; }"),
        ErrorImpl::NumberParseError {
            token: "2.5".to_string(),
        }
    );
}

#[test]
fn test_error_malformed_number() {
    assert_eq!(
        error_kind("def f() { return 1.2.3; }"),
        ErrorImpl::NumberParseError {
            token: "1.2.3".to_string(),
        }
    );
}

#[test]
fn test_error_empty_tensor_literal() {
    assert!(matches!(
        error_kind("def f() { return []; }"),
        ErrorImpl::UnexpectedToken { .. }
    ));
}

#[test]
fn test_error_expression_in_tensor_literal() {
    assert!(matches!(
        error_kind("def f() { return [a]; }"),
        ErrorImpl::UnexpectedToken { .. }
    ));
}

#[test]
fn test_error_unclosed_block() {
    assert_eq!(
        error_kind("def f() { return;"),
        ErrorImpl::UnexpectedToken {
            expected: "`}` in block".to_string(),
            found: "end of input".to_string(),
        }
    );
}

#[test]
fn test_error_top_level_statement() {
    assert_eq!(
        error_kind("var a = 1;"),
        ErrorImpl::UnexpectedToken {
            expected: "`def` in prototype".to_string(),
            found: "`var`".to_string(),
        }
    );
}

#[test]
fn test_error_in_later_definition_fails_module() {
    let source = "def good() { return 1; }\ndef bad() { return 1 + ; }";
    let error = parse_source(source).unwrap_err();

    assert_eq!(error.get_location().line, 2);
}

#[test]
fn test_parser_consumes_all_tokens() {
    let lexer = Lexer::new(
        "def f(x) { var y<2, 2> = [[1, 2], [3, 4]]; return f(y * x); }".to_string(),
        None,
    );
    let mut parser = Parser::new(lexer, ParserConfig::quiet());

    assert!(parser.parse_module().is_ok());
    assert_eq!(
        parser.current_token_kind(),
        crate::lexer::tokens::TokenKind::EOF
    );
}

#[test]
fn test_deep_parentheses_are_rejected() {
    let source = format!("def f() {{ return {}", "(".repeat(10_000));

    assert_eq!(
        error_kind(&source),
        ErrorImpl::NestingTooDeep {
            limit: MAX_NESTING_DEPTH
        }
    );
}

#[test]
fn test_deep_tensor_literal_is_rejected() {
    let source = format!("def f() {{ var a = {}", "[".repeat(10_000));

    assert_eq!(
        error_kind(&source),
        ErrorImpl::NestingTooDeep {
            limit: MAX_NESTING_DEPTH
        }
    );
}

#[test]
fn test_deep_calls_are_rejected() {
    let source = format!("def f() {{ return {}", "g(".repeat(10_000));
    let error = parse_source(&source).unwrap_err();

    assert_eq!(error.get_error_name(), "NestingTooDeep");
}

#[test]
fn test_nesting_below_limit_parses() {
    let depth = 200;
    let source = format!(
        "def f() {{ return {}1{}; var a = {}1{}; }}",
        "(".repeat(depth),
        ")".repeat(depth),
        "[".repeat(depth),
        "]".repeat(depth)
    );
    let lexer = Lexer::new(source, None);
    let mut parser = Parser::new(lexer, ParserConfig::quiet());

    assert!(parser.parse_module().is_ok());
    assert_eq!(parser.nesting_depth(), 0);
}

#[test]
fn test_nesting_depth_restored_after_error() {
    let lexer = Lexer::new("def f() { return ((1 + ; }".to_string(), None);
    let mut parser = Parser::new(lexer, ParserConfig::quiet());

    assert!(parser.parse_module().is_err());
    assert_eq!(parser.nesting_depth(), 0);
}

#[test]
fn test_operator_precedence_table() {
    use crate::lexer::tokens::TokenKind;

    assert_eq!(get_token_precedence(TokenKind::Less), 10);
    assert_eq!(get_token_precedence(TokenKind::Plus), 20);
    assert_eq!(get_token_precedence(TokenKind::Dash), 20);
    assert_eq!(get_token_precedence(TokenKind::Star), 40);
    assert_eq!(get_token_precedence(TokenKind::Slash), 40);
    assert_eq!(get_token_precedence(TokenKind::Greater), -1);
    assert_eq!(get_token_precedence(TokenKind::Semicolon), -1);
}
