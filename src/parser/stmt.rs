use crate::{
    ast::{
        ast::Stmt,
        statements::{
            BlockStmt, ExpressionStmt, FnDeclStmt, IfStmt, PrintStmt, ReturnStmt, VarDeclStmt,
            WhileStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// Parses one declaration, recovering from any syntax error inside it.
///
/// A failed declaration yields `None`: its diagnostic is already recorded
/// and the parser has been resynchronized.
pub fn parse_declaration(parser: &mut Parser) -> Option<Stmt> {
    let handler = parser
        .get_decl_lookup()
        .get(&parser.current_token_kind())
        .copied();

    let result = match handler {
        Some(handler) => parser.nested(handler),
        None => parse_stmt(parser),
    };

    match result {
        Ok(stmt) => Some(stmt),
        Err(_) => {
            parser.synchronize();
            None
        }
    }
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.nested(|parser| {
        let handler = parser
            .get_stmt_lookup()
            .get(&parser.current_token_kind())
            .copied();

        if let Some(handler) = handler {
            return handler(parser);
        }

        let expression = parse_expr(parser)?;
        parser.expect(TokenKind::Semicolon, "Expect ';' after expression.")?;

        Ok(Stmt::from(ExpressionStmt { expression }))
    })
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let name = parser.expect(TokenKind::Identifier, "Expect variable name.")?;

    let initializer = if parser.match_any(&[TokenKind::Assignment]) {
        Some(parse_expr(parser)?)
    } else {
        None
    };

    parser.expect(
        TokenKind::Semicolon,
        "Expect ';' after variable declaration.",
    )?;

    Ok(Stmt::from(VarDeclStmt { name, initializer }))
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let name = parser.expect(TokenKind::Identifier, "Expect function name.")?;
    parser.expect(TokenKind::OpenParen, "Expect '(' after function name.")?;

    let mut parameters = Vec::new();
    if !parser.check(TokenKind::CloseParen) {
        loop {
            let limit = parser.get_config().max_arity;
            if parameters.len() >= limit {
                let line = parser.current_token().line;
                parser.report(Error::new(ErrorImpl::TooManyParameters { limit }, line));
            }

            parameters.push(parser.expect(TokenKind::Identifier, "Expect parameter name.")?);

            if !parser.match_any(&[TokenKind::Comma]) {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseParen, "Expect ')' after parameters.")?;
    parser.expect(TokenKind::OpenCurly, "Expect '{' before function body.")?;

    let body = parse_block_body(parser)?;

    Ok(Stmt::from(FnDeclStmt {
        name,
        parameters,
        body,
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    parser.expect(TokenKind::OpenParen, "Expect '(' after 'if'.")?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen, "Expect ')' after if condition.")?;

    let then_body = parse_stmt(parser)?;

    // The innermost `if` claims a dangling `else`.
    let else_body = if parser.match_any(&[TokenKind::Else]) {
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::from(IfStmt {
        condition,
        then_body: Box::new(then_body),
        else_body,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    parser.expect(TokenKind::OpenParen, "Expect '(' after 'while'.")?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen, "Expect ')' after condition.")?;

    let body = parse_stmt(parser)?;

    Ok(Stmt::from(WhileStmt {
        condition,
        body: Box::new(body),
    }))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let expression = parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon, "Expect ';' after value.")?;

    Ok(Stmt::from(PrintStmt { expression }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let keyword = parser.advance().clone();

    let value = if !parser.check(TokenKind::Semicolon) {
        Some(parse_expr(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon, "Expect ';' after return value.")?;

    Ok(Stmt::from(ReturnStmt { keyword, value }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let body = parse_block_body(parser)?;

    Ok(Stmt::from(BlockStmt { body }))
}

/// Parses declarations up to and including the closing `}`.
///
/// Errors inside the block are recovered per declaration; only a missing
/// `}` fails the block itself.
fn parse_block_body(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    let mut statements = Vec::new();

    while !parser.check(TokenKind::CloseCurly) && parser.has_tokens() {
        if let Some(stmt) = parse_declaration(parser) {
            statements.push(stmt);
        }
    }

    parser.expect(TokenKind::CloseCurly, "Expect '}' after block.")?;

    Ok(statements)
}
