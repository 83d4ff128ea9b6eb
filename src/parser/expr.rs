use crate::{
    ast::{
        ast::Expr,
        expressions::{
            AssignmentExpr, BinaryExpr, CallExpr, GroupingExpr, LiteralExpr, LogicalExpr,
            UnaryExpr, VariableExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Literal, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(parse_assignment_expr)
}

pub fn parse_assignment_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_binary_expr(parser, BindingPower::Assignment)?;

    if !parser.match_any(&[TokenKind::Assignment]) {
        return Ok(left);
    }

    let equals = parser.previous().clone();
    let value = parse_expr(parser)?;

    match left {
        Expr::Variable(VariableExpr { name }) => Ok(Expr::from(AssignmentExpr {
            name,
            value: Box::new(value),
        })),
        other => {
            // Reported but not raised: the statement still parses.
            parser.error(&equals, "Invalid assignment target");
            Ok(other)
        }
    }
}

/// Parses binary operators binding tighter than `bp`.
///
/// While the current token is an operator stronger than `bp`, its right
/// operand is parsed at the operator's own power, so equal levels
/// associate to the left.
pub fn parse_binary_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let mut left = parse_unary_expr(parser)?;

    while let Some(operator_bp) = parser
        .get_bp_lookup()
        .get(&parser.current_token_kind())
        .copied()
        .filter(|operator_bp| *operator_bp > bp)
    {
        let operator = parser.advance().clone();
        let right = parse_binary_expr(parser, operator_bp)?;

        left = if operator_bp.is_logical() {
            Expr::from(LogicalExpr {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            })
        } else {
            Expr::from(BinaryExpr {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            })
        };
    }

    Ok(left)
}

pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.match_any(&[TokenKind::Not, TokenKind::Dash]) {
        let operator = parser.previous().clone();
        let right = parser.nested(parse_unary_expr)?;

        return Ok(Expr::from(UnaryExpr {
            operator,
            right: Box::new(right),
        }));
    }

    parse_call_expr(parser)
}

pub fn parse_call_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_primary_expr(parser)?;

    while parser.match_any(&[TokenKind::OpenParen]) {
        expr = finish_call_expr(parser, expr)?;
    }

    Ok(expr)
}

fn finish_call_expr(parser: &mut Parser, callee: Expr) -> Result<Expr, Error> {
    let mut arguments = vec![];

    if !parser.check(TokenKind::CloseParen) {
        loop {
            let limit = parser.get_config().max_arity;
            if arguments.len() >= limit {
                let line = parser.current_token().line;
                parser.report(Error::new(ErrorImpl::TooManyArguments { limit }, line));
            }

            arguments.push(parse_expr(parser)?);

            if !parser.match_any(&[TokenKind::Comma]) {
                break;
            }
        }
    }

    let paren = parser.expect(TokenKind::CloseParen, "Expect ')' after arguments.")?;

    Ok(Expr::from(CallExpr {
        callee: Box::new(callee),
        paren,
        arguments,
    }))
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let value = match parser.current_token_kind() {
        TokenKind::False => Literal::Bool(false),
        TokenKind::True => Literal::Bool(true),
        TokenKind::Nil => Literal::Nil,
        TokenKind::Number | TokenKind::String => parser
            .current_token()
            .literal
            .clone()
            .unwrap_or(Literal::Nil),
        TokenKind::Identifier => {
            let name = parser.advance().clone();
            return Ok(Expr::from(VariableExpr { name }));
        }
        TokenKind::OpenParen => {
            parser.advance();
            let expression = parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen, "Expect ')' after expression.")?;

            return Ok(Expr::from(GroupingExpr {
                expression: Box::new(expression),
            }));
        }
        _ => return Err(parser.error_at_current("Expect Expression.")),
    };

    parser.advance();
    Ok(Expr::from(LiteralExpr { value }))
}
