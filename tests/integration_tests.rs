//! Integration tests for the front end.
//!
//! These tests drive the public API end to end: source text through
//! tokenization and parsing, both directly and through the pipeline.

use lang::{
    ast::ast::Stmt,
    errors::errors::Stage,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::{parse, parse_with_config, ParserConfig},
    pipeline::{Pipeline, PipelineError, SoftLimitPolicy},
};

const FIBONACCI: &str = r#"
// Prints the first few Fibonacci numbers.
fun fib(n) {
    if (n <= 1) return n;
    return fib(n - 2) + fib(n - 1);
}

var i = 0;
while (i < 10) {
    print fib(i);
    i = i + 1;
}

if (i == 10 and !false) print "done"; else print nil;
"#;

#[test]
fn test_tokenize_and_parse_program() {
    let (tokens, errors) = tokenize(FIBONACCI.to_string());
    assert!(errors.is_empty());
    assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));

    let (statements, errors) = parse(tokens);
    assert!(errors.is_empty());
    assert_eq!(statements.len(), 4);

    assert_eq!(
        statements[0].to_string(),
        "(fun fib (n) (if (<= n 1) (return n)) (return (+ (call fib (- n 2)) (call fib (- n 1)))))"
    );
    assert_eq!(statements[1].to_string(), "(var i 0)");
    assert_eq!(
        statements[2].to_string(),
        "(while (< i 10) (block (print (call fib i)) (; (= i (+ i 1)))))"
    );
    assert_eq!(
        statements[3].to_string(),
        "(if (and (== i 10) (! false)) (print \"done\") (print nil))"
    );
}

#[test]
fn test_pipeline_runs_program() {
    let program = Pipeline::default().run(FIBONACCI.to_string()).unwrap();

    assert_eq!(program.statements.len(), 4);
    assert!(matches!(program.statements[0], Stmt::FnDecl(_)));
    assert!(program.warnings.is_empty());
}

#[test]
fn test_pipeline_reports_lexical_errors_with_lines() {
    let source = "var a = 1;\nvar b = @;\nprint \"open";
    let error = Pipeline::default().run(source.to_string()).unwrap_err();

    let diagnostics = error
        .diagnostics()
        .iter()
        .map(|error| error.to_string())
        .collect::<Vec<_>>();
    assert_eq!(
        diagnostics,
        vec![
            "[line 2] Error : Unexpected character '@'.\n",
            "[line 3] Error : Unterminated string.\n",
        ]
    );
    assert!(error
        .diagnostics()
        .iter()
        .all(|error| error.get_stage() == Stage::Lexical));
}

#[test]
fn test_pipeline_reports_every_syntax_error() {
    let source = "var a = 1;\nprint a\nprint b;\nfun (x) {}\nvar c = 3;";
    let error = Pipeline::default().run(source.to_string()).unwrap_err();

    assert!(matches!(error, PipelineError::Syntax(_)));
    let diagnostics = error
        .diagnostics()
        .iter()
        .map(|error| error.to_string())
        .collect::<Vec<_>>();
    assert_eq!(
        diagnostics,
        vec![
            "[line 3] Error :  at 'print' Expect ';' after value.\n",
            "[line 4] Error :  at '(' Expect function name.\n",
        ]
    );
}

#[test]
fn test_advisory_policy_keeps_tree() {
    let arguments = (0..300)
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let source = format!("print f({});", arguments);

    let blocking = Pipeline::default().run(source.clone());
    assert!(blocking.is_err());

    let advisory = Pipeline::new(ParserConfig::default(), SoftLimitPolicy::Advisory)
        .run(source)
        .unwrap();
    assert_eq!(advisory.statements.len(), 1);
    assert_eq!(advisory.warnings.len(), 1);
}

#[test]
fn test_depth_budget_is_configurable() {
    let source = format!("print {}1{};", "(".repeat(20), ")".repeat(20));
    let (tokens, _) = tokenize(source);

    let config = ParserConfig {
        max_depth: 10,
        ..ParserConfig::default()
    };
    let (statements, errors) = parse_with_config(tokens.clone(), config);
    assert!(statements.is_empty());
    assert_eq!(errors.len(), 1);

    let (statements, errors) = parse(tokens);
    assert_eq!(statements.len(), 1);
    assert!(errors.is_empty());
}
