use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, String);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).unwrap(),
            handler,
        }
    }
}

lazy_static! {
    // Patterns are anchored and tried in order; the first match wins, so
    // two-character operators must precede their one-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("^[ \r\t\n]+", skip_handler),
        RegexPattern::new("^//[^\n]*", skip_handler),
        RegexPattern::new("^\"[^\"]*\"", string_handler),
        RegexPattern::new("^\"", unterminated_string_handler),
        RegexPattern::new("^[0-9]+(\\.[0-9]+)?", number_handler),
        RegexPattern::new("^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new("^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals)),
        RegexPattern::new("^==", MK_DEFAULT_HANDLER!(TokenKind::Equals)),
        RegexPattern::new("^<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals)),
        RegexPattern::new("^>=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals)),
        RegexPattern::new("^!", MK_DEFAULT_HANDLER!(TokenKind::Not)),
        RegexPattern::new("^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment)),
        RegexPattern::new("^<", MK_DEFAULT_HANDLER!(TokenKind::Less)),
        RegexPattern::new("^>", MK_DEFAULT_HANDLER!(TokenKind::Greater)),
        RegexPattern::new("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen)),
        RegexPattern::new("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen)),
        RegexPattern::new("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly)),
        RegexPattern::new("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly)),
        RegexPattern::new("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
        RegexPattern::new("^\\.", MK_DEFAULT_HANDLER!(TokenKind::Dot)),
        RegexPattern::new("^-", MK_DEFAULT_HANDLER!(TokenKind::Dash)),
        RegexPattern::new("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus)),
        RegexPattern::new("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon)),
        RegexPattern::new("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash)),
        RegexPattern::new("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Star)),
    ];
}

/// Scanner state for a single `tokenize` run.
pub struct Lexer {
    tokens: Vec<Token>,
    errors: Vec<Error>,
    source: String,
    pos: usize,
    line: u32,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            tokens: vec![],
            errors: vec![],
            source,
            pos: 0,
            line: 1,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        tracing::trace!(kind = %token.kind, lexeme = %token.lexeme, line = token.line, "token");
        self.tokens.push(token);
    }

    fn report(&mut self, error: Error) {
        tracing::debug!(line = error.get_line(), name = error.get_error_name(), "lexical error");
        self.errors.push(error);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Scans the whole source, then appends the single end-of-input token.
    pub fn scan(mut self) -> (Vec<Token>, Vec<Error>) {
        while !self.at_eof() {
            self.scan_token();
        }

        let line = self.line;
        self.push(MK_TOKEN!(TokenKind::EOF, String::new(), None, line));

        tracing::debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            "tokenized"
        );
        (self.tokens, self.errors)
    }

    fn scan_token(&mut self) {
        let remainder = self.remainder();
        let found = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(remainder)
                .map(|matched| (pattern.handler, matched.as_str().to_string()))
        });

        if let Some((handler, matched)) = found {
            handler(self, matched);
        } else if let Some(character) = remainder.chars().next() {
            let line = self.line;
            self.report(Error::new(ErrorImpl::UnexpectedCharacter { character }, line));
            self.advance_n(character.len_utf8());
        }
    }

    fn count_lines(&mut self, text: &str) {
        self.line += text.matches('\n').count() as u32;
    }
}

fn skip_handler(lexer: &mut Lexer, matched: String) {
    lexer.count_lines(&matched);
    lexer.advance_n(matched.len());
}

fn string_handler(lexer: &mut Lexer, matched: String) {
    let start_line = lexer.line;
    let value = matched[1..matched.len() - 1].to_string();

    lexer.count_lines(&value);
    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(
        TokenKind::String,
        matched,
        Some(Literal::String(value)),
        start_line
    ));
}

fn unterminated_string_handler(lexer: &mut Lexer, _matched: String) {
    // Only reached when no closing quote exists, so the rest of the input is
    // swallowed by the open string.
    let start_line = lexer.line;
    let rest = lexer.remainder().to_string();

    lexer.count_lines(&rest);
    lexer.advance_n(rest.len());
    lexer.report(Error::new(ErrorImpl::UnterminatedString, start_line));
}

fn number_handler(lexer: &mut Lexer, matched: String) {
    let literal = matched.parse::<f64>().ok().map(Literal::Number);
    let length = matched.len();

    lexer.push(MK_TOKEN!(TokenKind::Number, matched, literal, lexer.line));
    lexer.advance_n(length);
}

fn symbol_handler(lexer: &mut Lexer, matched: String) {
    let length = matched.len();

    if let Some(kind) = RESERVED_LOOKUP.get(matched.as_str()) {
        lexer.push(MK_TOKEN!(*kind, matched, None, lexer.line));
    } else {
        lexer.push(MK_TOKEN!(TokenKind::Identifier, matched, None, lexer.line));
    }

    lexer.advance_n(length);
}

/// Converts source text into tokens, collecting every lexical error.
///
/// The returned token list always ends with exactly one `EOF` token, even
/// when errors were reported.
pub fn tokenize(source: String) -> (Vec<Token>, Vec<Error>) {
    Lexer::new(source).scan()
}
