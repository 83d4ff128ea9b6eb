//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics produced while tokenizing and
//! parsing. It includes:
//!
//! - Error structures carrying the source line
//! - Specific error variants for the lexical and syntax stages
//! - The stable `[line N] Error : ...` rendering used by tools and tests

pub mod errors;
