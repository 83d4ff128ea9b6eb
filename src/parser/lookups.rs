use std::collections::HashMap;

use crate::{ast::ast::Stmt, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

/// Binary operator levels, weakest binding first.
///
/// `Assignment` is the floor: every registered operator binds tighter.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Assignment,
    LogicalOr,
    LogicalAnd,
    Equality,
    Comparison,
    Term,
    Factor,
}

impl BindingPower {
    pub fn is_logical(self) -> bool {
        matches!(self, BindingPower::LogicalOr | BindingPower::LogicalAnd)
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical
    parser.led(TokenKind::Or, BindingPower::LogicalOr);
    parser.led(TokenKind::And, BindingPower::LogicalAnd);

    // Equality and comparison
    parser.led(TokenKind::NotEquals, BindingPower::Equality);
    parser.led(TokenKind::Equals, BindingPower::Equality);
    parser.led(TokenKind::Greater, BindingPower::Comparison);
    parser.led(TokenKind::GreaterEquals, BindingPower::Comparison);
    parser.led(TokenKind::Less, BindingPower::Comparison);
    parser.led(TokenKind::LessEquals, BindingPower::Comparison);

    // Additive and multiplicative
    parser.led(TokenKind::Dash, BindingPower::Term);
    parser.led(TokenKind::Plus, BindingPower::Term);
    parser.led(TokenKind::Slash, BindingPower::Factor);
    parser.led(TokenKind::Star, BindingPower::Factor);

    // Declarations
    parser.decl(TokenKind::Fun, parse_fn_decl_stmt);
    parser.decl(TokenKind::Var, parse_var_decl_stmt);

    // Statements
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::Print, parse_print_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
