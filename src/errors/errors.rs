use std::fmt::Display;

use thiserror::Error;

/// The pipeline stage an error was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lexical,
    Syntax,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: u32,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: u32) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEnd { .. } => "UnexpectedEnd",
            ErrorImpl::TooManyParameters { .. } => "TooManyParameters",
            ErrorImpl::TooManyArguments { .. } => "TooManyArguments",
        }
    }

    pub fn get_stage(&self) -> Stage {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } | ErrorImpl::UnterminatedString => {
                Stage::Lexical
            }
            _ => Stage::Syntax,
        }
    }

    /// Soft limits are reported but never interrupt parsing.
    pub fn is_soft_limit(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::TooManyParameters { .. } | ErrorImpl::TooManyArguments { .. }
        )
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[line {}] Error : {}", self.line, self.internal_error)
    }
}

impl std::error::Error for Error {}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unexpected character '{character}'.")]
    UnexpectedCharacter { character: char },
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error(" at '{lexeme}' {message}")]
    UnexpectedToken { lexeme: String, message: String },
    #[error(" at end: {message}")]
    UnexpectedEnd { message: String },
    #[error("Can't have more than {limit} parameters.")]
    TooManyParameters { limit: usize },
    #[error("Can't have more than {limit} arguments.")]
    TooManyArguments { limit: usize },
}
