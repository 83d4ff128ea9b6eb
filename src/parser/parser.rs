//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry point.
//! The parser is a recursive-descent parser: statements are dispatched
//! through lookup tables keyed by their leading token, and binary
//! expressions climb a fixed ladder of binding powers.
//!
//! It maintains lookup tables for:
//! - Declaration handlers (`fun`, `var`)
//! - Statement handlers
//! - Binding powers for binary operators
//!
//! Syntax errors are recorded as soon as they are found and returned as
//! `Err` up to the enclosing declaration, which resynchronizes.

use std::collections::HashMap;

use crate::{
    ast::ast::Stmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    MK_TOKEN,
};

use super::{
    lookups::{create_token_lookups, BPLookup, BindingPower, StmtHandler, StmtLookup},
    stmt::parse_declaration,
};

/// Tunable limits for a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Parameters or arguments beyond this count produce a soft diagnostic.
    pub max_arity: usize,
    /// Maximum nesting of statements, expressions and unary operators.
    ///
    /// Each level costs a handful of parser frames, so the default stays
    /// well inside a 2 MiB thread stack in unoptimized builds.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_arity: 255,
            max_depth: 64,
        }
    }
}

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and maintains lookup tables for
/// parsing declarations, statements, and binary operators. It tracks the
/// current position in the token stream and collects every diagnostic.
pub struct Parser {
    /// The list of tokens to parse, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Diagnostics recorded so far
    errors: Vec<Error>,
    /// Current nesting depth
    depth: usize,
    config: ParserConfig,
    /// Lookup table for declaration handlers
    decl_lookup: StmtLookup,
    /// Lookup table for statement handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for binary operator binding powers
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse
    /// * `config` - Limits applied while parsing
    ///
    /// # Returns
    ///
    /// A new Parser instance ready to parse the token stream. A missing
    /// trailing `EOF` token is supplied.
    pub fn new(mut tokens: Vec<Token>, config: ParserConfig) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let line = tokens.last().map_or(1, |token| token.line);
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::new(), None, line));
        }

        Parser {
            tokens,
            pos: 0,
            errors: vec![],
            depth: 0,
            config,
            decl_lookup: HashMap::new(),
            stmt_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the most recently consumed token.
    pub fn previous(&self) -> &Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    /// Advances to the next token and returns the consumed one.
    ///
    /// Never moves past `EOF`.
    pub fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.previous()
    }

    pub fn is_at_end(&self) -> bool {
        self.current_token_kind() == TokenKind::EOF
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        !self.is_at_end()
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.current_token_kind() == kind
    }

    /// Consumes the current token if it is any of `kinds`.
    pub fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|kind| self.check(*kind)) {
            self.advance();
            return true;
        }

        false
    }

    /// Expects a token of the specified kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `message` - The diagnostic recorded if the expectation fails
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise records
    /// and returns an Error located at the current token.
    pub fn expect(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.check(expected_kind) {
            return Ok(self.advance().clone());
        }

        Err(self.error_at_current(message))
    }

    /// Records a syntax error located at `token` and returns it.
    pub fn error(&mut self, token: &Token, message: &str) -> Error {
        let error_impl = if token.kind == TokenKind::EOF {
            ErrorImpl::UnexpectedEnd {
                message: message.to_string(),
            }
        } else {
            ErrorImpl::UnexpectedToken {
                lexeme: token.lexeme.clone(),
                message: message.to_string(),
            }
        };

        let error = Error::new(error_impl, token.line);
        self.report(error.clone());
        error
    }

    pub fn error_at_current(&mut self, message: &str) -> Error {
        let token = self.current_token().clone();
        self.error(&token, message)
    }

    /// Records a diagnostic without interrupting the parse.
    pub fn report(&mut self, error: Error) {
        tracing::debug!(line = error.get_line(), name = error.get_error_name(), "syntax error");
        self.errors.push(error);
    }

    /// Discards tokens until a likely statement boundary.
    ///
    /// Stops after a `;`, before a keyword that starts a statement, or at
    /// `EOF`.
    pub fn synchronize(&mut self) {
        let start = self.pos;
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon
                || self.current_token_kind().starts_statement()
            {
                break;
            }

            self.advance();
        }

        tracing::debug!(skipped = self.pos - start, "synchronized after syntax error");
    }

    /// Runs `parse_fn` one nesting level deeper, failing once the depth
    /// budget is exhausted.
    pub fn nested<T>(
        &mut self,
        parse_fn: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= self.config.max_depth {
            return Err(self.error_at_current("Nesting too deep."));
        }

        self.depth += 1;
        let result = parse_fn(self);
        self.depth -= 1;
        result
    }

    pub fn get_config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns a reference to the declaration lookup table.
    pub fn get_decl_lookup(&self) -> &StmtLookup {
        &self.decl_lookup
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a binary operator at the given binding power.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower) {
        self.binding_power_lookup.insert(kind, binding_power);
    }

    /// Registers a declaration handler for a token.
    pub fn decl(&mut self, kind: TokenKind, decl_fn: StmtHandler) {
        self.decl_lookup.insert(kind, decl_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, and parses declarations until EOF.
///
/// # Returns
///
/// A tuple containing:
/// - The top-level statements that parsed successfully
/// - Every diagnostic recorded, in source order
pub fn parse(tokens: Vec<Token>) -> (Vec<Stmt>, Vec<Error>) {
    parse_with_config(tokens, ParserConfig::default())
}

/// Same as [`parse`], with explicit limits.
pub fn parse_with_config(tokens: Vec<Token>, config: ParserConfig) -> (Vec<Stmt>, Vec<Error>) {
    let mut parser = Parser::new(tokens, config);
    create_token_lookups(&mut parser);

    let mut body = vec![];

    while parser.has_tokens() {
        if let Some(stmt) = parse_declaration(&mut parser) {
            body.push(stmt);
        }
    }

    tracing::debug!(
        statements = body.len(),
        errors = parser.errors.len(),
        "parsed"
    );

    (body, parser.errors)
}
