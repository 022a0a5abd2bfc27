use tracing::{debug, trace};

use crate::{
    ast::{
        ast::{Expr, FunctionAST},
        statements::{Param, PrototypeAST, ReturnExpr, VarDeclExpr},
        types::VarType,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::expr::parse_expr,
};

use super::parser::Parser;

/// statement ::= varDecl | returnStmt | expression
pub fn parse_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    trace!(token = %parser.current_token(), "statement");

    if let Some(handler) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return handler(parser);
    }

    parse_expr(parser)
}

/// varDecl ::= 'var' identifier ('<' number ',' number '>')? '=' expression
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    let location = parser.expect(TokenKind::Var, "`var`")?.location;

    let name = parser
        .expect(TokenKind::Identifier, "an identifier after `var`")?
        .value;

    let var_type = if parser.current_token_kind() == TokenKind::Less {
        parse_shape(parser)?
    } else {
        VarType::default()
    };

    parser.expect(TokenKind::Assignment, "`=` in variable declaration")?;
    let value = parse_expr(parser)?;

    Ok(Expr::VarDecl(VarDeclExpr {
        name,
        var_type,
        value: Box::new(value),
        location,
    }))
}

/// '<' number (',' number)* '>', which must name exactly two dimensions
fn parse_shape(parser: &mut Parser) -> Result<VarType, Error> {
    let location = parser.expect(TokenKind::Less, "`<`")?.location;

    let mut shape = vec![];
    loop {
        if parser.current_token_kind() != TokenKind::Number {
            return Err(parser.unexpected("a dimension in shape"));
        }
        match parser.current_token().value.parse::<usize>() {
            Ok(dim) => shape.push(dim),
            Err(_) => {
                return Err(parser.error(ErrorImpl::NumberParseError {
                    token: parser.current_token().value.clone(),
                }))
            }
        }
        parser.advance();

        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();
    }

    parser.expect(TokenKind::Greater, "`>` after shape")?;

    if shape.len() != 2 {
        return Err(parser.error_at(ErrorImpl::InvalidShape { found: shape.len() }, location));
    }

    Ok(VarType::new(shape))
}

/// returnStmt ::= 'return' expression?
pub fn parse_return_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    let location = parser.expect(TokenKind::Return, "`return`")?.location;

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(Box::new(parse_expr(parser)?))
    } else {
        None
    };

    Ok(Expr::Return(ReturnExpr { value, location }))
}

/// block ::= '{' (statement ';')* '}'
pub fn parse_block(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    parser.expect(TokenKind::OpenCurly, "`{` in block")?;

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly
        && parser.current_token_kind() != TokenKind::EOF
    {
        statements.push(parse_stmt(parser)?);
        parser.expect(TokenKind::Semicolon, "`;` after expression")?;
    }

    parser.expect(TokenKind::CloseCurly, "`}` in block")?;

    Ok(statements)
}

/// prototype ::= 'def' identifier '(' (identifier (',' identifier)*)? ')'
pub fn parse_prototype(parser: &mut Parser) -> Result<PrototypeAST, Error> {
    let location = parser
        .expect(TokenKind::Def, "`def` in prototype")?
        .location;

    let name = parser
        .expect(TokenKind::Identifier, "function name in prototype")?
        .value;

    parser.expect(TokenKind::OpenParen, "`(` in prototype")?;

    let mut params = Vec::new();
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            let token = parser.expect(TokenKind::Identifier, "a parameter name in prototype")?;
            params.push(Param {
                name: token.value,
                location: token.location,
            });

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseParen, "`)` in prototype")?;

    Ok(PrototypeAST {
        name,
        params,
        location,
    })
}

/// definition ::= prototype block
pub fn parse_definition(parser: &mut Parser) -> Result<FunctionAST, Error> {
    let location = parser.get_location();
    let prototype = parse_prototype(parser)?;
    let body = parse_block(parser)?;

    debug!(
        name = %prototype.name,
        params = prototype.params.len(),
        statements = body.len(),
        "parsed definition"
    );

    Ok(FunctionAST {
        prototype,
        body,
        location,
    })
}
