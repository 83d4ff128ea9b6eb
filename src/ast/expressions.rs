use crate::lexer::tokens::{Literal, Token};

use super::ast::Expr;

// LITERALS

/// Literal Expression
/// Represents a constant value in the AST: a number, string, boolean or nil.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Literal,
}

/// Variable Expression
/// Represents a reference to a named variable in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: Token,
}

// COMPLEX

/// Binary Expression
/// Represents an arithmetic, comparison or equality operation in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Logical Expression
/// Represents a short-circuiting `and` / `or` in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Grouping Expression
/// Represents a parenthesized expression in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingExpr {
    pub expression: Box<Expr>,
}

/// Unary Expression
/// Represents a prefix `!` or `-` applied to an operand.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Assignment Expression
/// Represents storing a value into a named variable.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub name: Token,
    pub value: Box<Expr>,
}

/// Call Expression
/// Represents a function call in the AST.
///
/// `paren` is the closing parenthesis, kept for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub paren: Token,
    pub arguments: Vec<Expr>,
}
