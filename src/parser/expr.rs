use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, BinaryOperator, CallExpr, LiteralExpr, NumberExpr, VariableExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binding_power, get_token_precedence},
    parser::Parser,
};

/// expression ::= primary (binop primary)*
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let _nesting = parser.enter_nesting()?;
    let left = parse_primary(parser)?;
    parse_bin_op_rhs(parser, 0, left)
}

pub fn parse_primary(parser: &mut Parser) -> Result<Expr, Error> {
    let token_kind = parser.current_token_kind();
    match parser.get_nud_lookup().get(&token_kind).copied() {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("an expression")),
    }
}

/// Folds `(binop primary)*` onto `left` for every operator binding at least
/// as tightly as `min_precedence`.
pub fn parse_bin_op_rhs(
    parser: &mut Parser,
    min_precedence: i32,
    mut left: Expr,
) -> Result<Expr, Error> {
    loop {
        let Some(operator) = BinaryOperator::from_token(parser.current_token_kind()) else {
            return Ok(left);
        };
        let precedence = binding_power(operator) as i32;
        if precedence < min_precedence {
            return Ok(left);
        }

        let location = parser.advance().location;
        let mut right = parse_primary(parser)?;

        // A tighter operator after `right` takes `right` as its own lhs first
        if precedence < get_token_precedence(parser.current_token_kind()) {
            right = parse_bin_op_rhs(parser, precedence + 1, right)?;
        }

        left = Expr::Binary(BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            location,
        });
    }
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let value = match parser.current_token().value.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            return Err(parser.error(ErrorImpl::NumberParseError {
                token: parser.current_token().value.clone(),
            }))
        }
    };

    Ok(Expr::Number(NumberExpr {
        value,
        location: parser.advance().location,
    }))
}

/// identifier | identifier '(' (expression (',' expression)*)? ')'
pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect(TokenKind::Identifier, "an identifier")?;

    if parser.current_token_kind() != TokenKind::OpenParen {
        return Ok(Expr::Variable(VariableExpr {
            name: token.value,
            location: token.location,
        }));
    }
    parser.advance();

    let mut arguments = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            arguments.push(parse_expr(parser)?);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseParen, "`)` in function call")?;

    Ok(Expr::Call(CallExpr {
        callee: token.value,
        arguments,
        location: token.location,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen, "`(`")?;
    let expr = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen, "`)` in expression")?;

    Ok(expr)
}

/// '[' (number | literal) (',' (number | literal))* ']'
pub fn parse_literal_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let _nesting = parser.enter_nesting()?;
    let location = parser.expect(TokenKind::OpenBracket, "`[`")?.location;

    let mut values = vec![];
    loop {
        match parser.current_token_kind() {
            TokenKind::OpenBracket => values.push(parse_literal_expr(parser)?),
            TokenKind::Number => values.push(parse_number_expr(parser)?),
            _ => return Err(parser.unexpected("a number or `[` in tensor literal")),
        }

        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();
    }

    parser.expect(TokenKind::CloseBracket, "`]` in tensor literal")?;

    Ok(Expr::Literal(LiteralExpr::new(values, location)))
}
