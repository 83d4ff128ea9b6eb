//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into an Abstract Syntax Tree. It handles:
//!
//! - Declaration and statement parsing (functions, variables, control flow)
//! - Expression parsing by precedence climbing over binding powers
//! - Panic-mode error recovery, so one pass reports every syntax error
//!
//! Binary operators are registered in a binding power table; each level is a
//! left-associative loop over the next stronger level.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
