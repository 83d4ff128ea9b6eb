//! Unit tests for the AST printer.

use super::{
    ast::{Expr, Stmt},
    expressions::{BinaryExpr, CallExpr, GroupingExpr, LiteralExpr, UnaryExpr, VariableExpr},
    statements::{BlockStmt, FnDeclStmt, PrintStmt, ReturnStmt, VarDeclStmt},
};
use crate::lexer::tokens::{Literal, Token, TokenKind};

fn token(kind: TokenKind, lexeme: &str) -> Token {
    Token {
        kind,
        lexeme: lexeme.to_string(),
        literal: None,
        line: 1,
    }
}

fn number(value: f64) -> Expr {
    LiteralExpr {
        value: Literal::Number(value),
    }
    .into()
}

fn variable(name: &str) -> Expr {
    VariableExpr {
        name: token(TokenKind::Identifier, name),
    }
    .into()
}

#[test]
fn test_print_binary_expression() {
    let expr: Expr = BinaryExpr {
        left: Box::new(UnaryExpr {
            operator: token(TokenKind::Dash, "-"),
            right: Box::new(number(123.0)),
        }
        .into()),
        operator: token(TokenKind::Star, "*"),
        right: Box::new(GroupingExpr {
            expression: Box::new(number(45.67)),
        }
        .into()),
    }
    .into();

    assert_eq!(expr.to_string(), "(* (- 123) (group 45.67))");
}

#[test]
fn test_print_literals() {
    let string: Expr = LiteralExpr {
        value: Literal::String("hi".to_string()),
    }
    .into();
    let boolean: Expr = LiteralExpr {
        value: Literal::Bool(false),
    }
    .into();
    let nil: Expr = LiteralExpr {
        value: Literal::Nil,
    }
    .into();

    assert_eq!(string.to_string(), "\"hi\"");
    assert_eq!(boolean.to_string(), "false");
    assert_eq!(nil.to_string(), "nil");
}

#[test]
fn test_print_call_expression() {
    let expr: Expr = CallExpr {
        callee: Box::new(variable("f")),
        paren: token(TokenKind::CloseParen, ")"),
        arguments: vec![number(1.0), variable("x")],
    }
    .into();

    assert_eq!(expr.to_string(), "(call f 1 x)");
}

#[test]
fn test_print_function_declaration() {
    let stmt: Stmt = FnDeclStmt {
        name: token(TokenKind::Identifier, "add"),
        parameters: vec![
            token(TokenKind::Identifier, "a"),
            token(TokenKind::Identifier, "b"),
        ],
        body: vec![ReturnStmt {
            keyword: token(TokenKind::Return, "return"),
            value: Some(variable("a")),
        }
        .into()],
    }
    .into();

    assert_eq!(stmt.to_string(), "(fun add (a b) (return a))");
}

#[test]
fn test_print_block_and_var() {
    let stmt: Stmt = BlockStmt {
        body: vec![
            VarDeclStmt {
                name: token(TokenKind::Identifier, "x"),
                initializer: None,
            }
            .into(),
            PrintStmt {
                expression: variable("x"),
            }
            .into(),
        ],
    }
    .into();

    assert_eq!(stmt.to_string(), "(block (var x) (print x))");
}
