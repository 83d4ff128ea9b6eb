use std::{env, fs::read_to_string, process::ExitCode, time::Instant};

use lang::{
    errors::errors::Error,
    pipeline::{Pipeline, PipelineError},
    source_line,
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Silent unless LANG_LOG is set, e.g. LANG_LOG=lang=debug
    if let Ok(filter) = EnvFilter::try_from_env("LANG_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .with_writer(std::io::stderr)
            .init();
        tracing::debug!("tracing initialized");
    }

    let args: Vec<String> = env::args().skip(1).collect();

    let (print_ast, file_path) = match args.as_slice() {
        [file] if file != "--ast" => (false, file),
        [flag, file] if flag == "--ast" => (true, file),
        _ => {
            eprintln!("usage: lang [--ast] <file>");
            return ExitCode::from(64);
        }
    };

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            return ExitCode::from(66);
        }
    };

    let start = Instant::now();

    match Pipeline::default().run(source.clone()) {
        Ok(program) => {
            println!("Successfully tokenized");
            println!("Successfully parsed");
            tracing::debug!(elapsed = ?start.elapsed(), "front end finished");

            for warning in &program.warnings {
                display_error(warning, &source);
            }

            if print_ast {
                for stmt in &program.statements {
                    println!("{}", stmt);
                }
            }

            ExitCode::SUCCESS
        }
        Err(error) => {
            match &error {
                PipelineError::Lexical(_) => println!("\nERROR FOUND DURING TOKENIZATION:"),
                PipelineError::Syntax(_) => {
                    println!("Successfully tokenized");
                    println!("\nERROR FOUND DURING PARSING:");
                }
            }

            for diagnostic in error.diagnostics() {
                display_error(diagnostic, &source);
            }

            ExitCode::from(65)
        }
    }
}

/*
    [line 2] Error :  at 'print' Expect ';' after value.
       |
     2 | print a
*/
fn display_error(error: &Error, source: &str) {
    print!("{}", error);

    if let Some(text) = source_line(source, error.get_line()) {
        let line = error.get_line().to_string();
        let padding = line.len() + 2;

        println!("{:>padding$}", "|");
        println!("{:>width$} | {}", line, text.trim(), width = padding - 1);
    }
}
