use std::fmt::{Display, Formatter, Result};

use super::{
    expressions::{
        AssignmentExpr, BinaryExpr, CallExpr, GroupingExpr, LiteralExpr, LogicalExpr, UnaryExpr,
        VariableExpr,
    },
    statements::{
        BlockStmt, ExpressionStmt, FnDeclStmt, IfStmt, PrintStmt, ReturnStmt, VarDeclStmt,
        WhileStmt,
    },
};

/// Statement
///
/// The closed set of statement kinds. Every consumer matches exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    Print(PrintStmt),
    VarDecl(VarDeclStmt),
    Block(BlockStmt),
    If(IfStmt),
    While(WhileStmt),
    FnDecl(FnDeclStmt),
    Return(ReturnStmt),
}

/// Expression
///
/// The closed set of expression kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpr),
    Grouping(GroupingExpr),
    Literal(LiteralExpr),
    Unary(UnaryExpr),
    Variable(VariableExpr),
    Assignment(AssignmentExpr),
    Logical(LogicalExpr),
    Call(CallExpr),
}

macro_rules! impl_from_node {
    ($family:ident, $($variant:ident($node:ty)),* $(,)?) => {
        $(
            impl From<$node> for $family {
                fn from(node: $node) -> Self {
                    $family::$variant(node)
                }
            }
        )*
    };
}

impl_from_node!(
    Stmt,
    Expression(ExpressionStmt),
    Print(PrintStmt),
    VarDecl(VarDeclStmt),
    Block(BlockStmt),
    If(IfStmt),
    While(WhileStmt),
    FnDecl(FnDeclStmt),
    Return(ReturnStmt),
);

impl_from_node!(
    Expr,
    Binary(BinaryExpr),
    Grouping(GroupingExpr),
    Literal(LiteralExpr),
    Unary(UnaryExpr),
    Variable(VariableExpr),
    Assignment(AssignmentExpr),
    Logical(LogicalExpr),
    Call(CallExpr),
);

/// Writes each of `items` preceded by a single space.
fn write_spaced<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> Result {
    for item in items {
        write!(f, " {}", item)?;
    }
    Ok(())
}

// Prefix form used by `--ast` and the tests, e.g. `(+ 1 (* 2 3))`.
impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expr::Binary(BinaryExpr {
                left,
                operator,
                right,
            })
            | Expr::Logical(LogicalExpr {
                left,
                operator,
                right,
            }) => write!(f, "({} {} {})", operator.lexeme, left, right),
            Expr::Grouping(GroupingExpr { expression }) => write!(f, "(group {})", expression),
            Expr::Literal(LiteralExpr { value }) => write!(f, "{}", value),
            Expr::Unary(UnaryExpr { operator, right }) => {
                write!(f, "({} {})", operator.lexeme, right)
            }
            Expr::Variable(VariableExpr { name }) => write!(f, "{}", name.lexeme),
            Expr::Assignment(AssignmentExpr { name, value }) => {
                write!(f, "(= {} {})", name.lexeme, value)
            }
            Expr::Call(CallExpr {
                callee, arguments, ..
            }) => {
                write!(f, "(call {}", callee)?;
                write_spaced(f, arguments)?;
                write!(f, ")")
            }
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Stmt::Expression(ExpressionStmt { expression }) => write!(f, "(; {})", expression),
            Stmt::Print(PrintStmt { expression }) => write!(f, "(print {})", expression),
            Stmt::VarDecl(VarDeclStmt { name, initializer }) => match initializer {
                Some(initializer) => write!(f, "(var {} {})", name.lexeme, initializer),
                None => write!(f, "(var {})", name.lexeme),
            },
            Stmt::Block(BlockStmt { body }) => {
                write!(f, "(block")?;
                write_spaced(f, body)?;
                write!(f, ")")
            }
            Stmt::If(IfStmt {
                condition,
                then_body,
                else_body,
            }) => match else_body {
                Some(else_body) => write!(f, "(if {} {} {})", condition, then_body, else_body),
                None => write!(f, "(if {} {})", condition, then_body),
            },
            Stmt::While(WhileStmt { condition, body }) => {
                write!(f, "(while {} {})", condition, body)
            }
            Stmt::FnDecl(FnDeclStmt {
                name,
                parameters,
                body,
            }) => {
                let parameters = parameters
                    .iter()
                    .map(|parameter| parameter.lexeme.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                write!(f, "(fun {} ({})", name.lexeme, parameters)?;
                write_spaced(f, body)?;
                write!(f, ")")
            }
            Stmt::Return(ReturnStmt { value, .. }) => match value {
                Some(value) => write!(f, "(return {})", value),
                None => write!(f, "(return)"),
            },
        }
    }
}
