//! Front-end driver.
//!
//! Runs the lexer and then the parser over one source text, stopping at the
//! first stage that reports diagnostics.

use thiserror::Error;

use crate::{
    ast::ast::Stmt,
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::parser::{parse_with_config, ParserConfig},
};

/// How soft-limit diagnostics (too many parameters or arguments) affect the
/// outcome of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SoftLimitPolicy {
    /// Any diagnostic fails the run.
    #[default]
    Blocking,
    /// Soft-limit diagnostics become warnings on the returned program.
    Advisory,
}

#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    #[error("{} error(s) found during tokenization", .0.len())]
    Lexical(Vec<Error>),
    #[error("{} error(s) found during parsing", .0.len())]
    Syntax(Vec<Error>),
}

impl PipelineError {
    pub fn diagnostics(&self) -> &[Error] {
        match self {
            PipelineError::Lexical(errors) | PipelineError::Syntax(errors) => errors,
        }
    }
}

/// A successfully parsed program.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
    /// Soft-limit diagnostics tolerated under [`SoftLimitPolicy::Advisory`].
    pub warnings: Vec<Error>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pipeline {
    pub parser: ParserConfig,
    pub policy: SoftLimitPolicy,
}

impl Pipeline {
    pub fn new(parser: ParserConfig, policy: SoftLimitPolicy) -> Self {
        Pipeline { parser, policy }
    }

    pub fn run(&self, source: String) -> Result<Program, PipelineError> {
        let (tokens, errors) = tokenize(source);
        if !errors.is_empty() {
            tracing::debug!(errors = errors.len(), "tokenization failed");
            return Err(PipelineError::Lexical(errors));
        }

        let (statements, errors) = parse_with_config(tokens, self.parser);

        let tolerated = self.policy == SoftLimitPolicy::Advisory
            && errors.iter().all(|error| error.is_soft_limit());

        if !errors.is_empty() && !tolerated {
            tracing::debug!(errors = errors.len(), "parsing failed");
            return Err(PipelineError::Syntax(errors));
        }

        Ok(Program {
            statements,
            warnings: errors,
        })
    }
}

/// Runs the front end with the default configuration.
pub fn run(source: String) -> Result<Program, PipelineError> {
    Pipeline::default().run(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn many_parameters(count: usize) -> String {
        let parameters = (0..count)
            .map(|i| format!("p{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        format!("fun f({}) {{}}", parameters)
    }

    #[test]
    fn test_run_success() {
        let program = run("var a = 1;\nprint a;".to_string()).unwrap();

        assert_eq!(program.statements.len(), 2);
        assert!(program.warnings.is_empty());
    }

    #[test]
    fn test_lexical_errors_stop_before_parsing() {
        // `print` alone would also be a syntax error.
        let error = run("print #;\nprint".to_string()).unwrap_err();

        assert!(matches!(error, PipelineError::Lexical(_)));
        assert_eq!(error.diagnostics().len(), 1);
        assert_eq!(error.to_string(), "1 error(s) found during tokenization");
    }

    #[test]
    fn test_syntax_errors() {
        let error = run("var = 1;\nprint (;".to_string()).unwrap_err();

        assert!(matches!(error, PipelineError::Syntax(_)));
        assert_eq!(error.diagnostics().len(), 2);
    }

    #[test]
    fn test_soft_limit_blocks_by_default() {
        let error = run(many_parameters(256)).unwrap_err();

        assert!(matches!(error, PipelineError::Syntax(_)));
        assert!(error.diagnostics()[0].is_soft_limit());
    }

    #[test]
    fn test_soft_limit_advisory() {
        let pipeline = Pipeline::new(ParserConfig::default(), SoftLimitPolicy::Advisory);
        let program = pipeline.run(many_parameters(256)).unwrap();

        assert_eq!(program.statements.len(), 1);
        assert_eq!(program.warnings.len(), 1);
    }

    #[test]
    fn test_advisory_still_fails_on_hard_errors() {
        let pipeline = Pipeline::new(ParserConfig::default(), SoftLimitPolicy::Advisory);
        let source = format!("{}\nprint ;", many_parameters(256));
        let error = pipeline.run(source).unwrap_err();

        assert_eq!(error.diagnostics().len(), 2);
    }

    #[test]
    fn test_empty_program_is_accepted() {
        let program = run(String::new()).unwrap();

        assert!(program.statements.is_empty());
    }
}
