use std::fmt::Display;

use thiserror::Error;

/// A lexical error together with the line it was found on.
///
/// Diagnostics are collected in arrival order while scanning and never stop
/// the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    line: usize,
    error: LexError,
}

impl Diagnostic {
    pub fn new(error: LexError, line: usize) -> Self {
        Diagnostic { line, error }
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_error(&self) -> &LexError {
        &self.error
    }
}

/// Renders `[line <n>] Error: <message>`.
impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.error)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("Unterminated string.")]
    UnterminatedString,
    /// Rendered as the byte's Latin-1 character.
    #[error("Unexpected character: {}", char::from(*.byte))]
    UnexpectedCharacter { byte: u8 },
}

/// Token sequences the expression builder does not accept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unable to parse: expected 1 or 3 tokens, found {count}")]
    UnsupportedShape { count: usize },
    #[error("Unable to parse: unexpected token `{token}` at line {line}")]
    UnexpectedToken { token: String, line: usize },
    #[error("Unable to parse: invalid number `{token}`")]
    NumberParseError { token: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Operands of `{operator}` must be numbers.")]
    OperandsMustBeNumbers { operator: String },
}
