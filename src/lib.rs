#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::{ast::printer::AstPrinter, lexer::lexer::tokenize, parser::parser::parse};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Exit status for input that failed to scan or parse.
pub const EXIT_DATA_ERROR: i32 = 65;

/// What a driver command writes and the status it exits with.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Output {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl Output {
    fn diagnostics<T: std::fmt::Display>(errors: &[T]) -> Self {
        let mut output = Output {
            exit_code: if errors.is_empty() { 0 } else { EXIT_DATA_ERROR },
            ..Default::default()
        };
        for error in errors {
            let _ = writeln!(output.stderr, "{}", error);
        }
        output
    }
}

/// Scans `source` and renders one line per token, diagnostics first.
pub fn run_tokenize(source: impl AsRef<[u8]>) -> Output {
    let (tokens, diagnostics) = tokenize(source);

    let mut output = Output::diagnostics(&diagnostics);
    for token in &tokens {
        let _ = writeln!(output.stdout, "{}", token);
    }
    output
}

/// Scans `source` and prints the expression it forms.
///
/// Lexical diagnostics stop before building; parse failures are reported
/// on stderr with the same exit status.
pub fn run_parse(source: impl AsRef<[u8]>) -> Output {
    let (tokens, diagnostics) = tokenize(source);
    if !diagnostics.is_empty() {
        return Output::diagnostics(&diagnostics);
    }

    match parse(&tokens) {
        Ok(expr) => Output {
            stdout: format!("{}\n", AstPrinter.print(&expr)),
            ..Default::default()
        },
        Err(error) => Output {
            stderr: format!("Error: {}\n", error),
            exit_code: EXIT_DATA_ERROR,
            ..Default::default()
        },
    }
}
