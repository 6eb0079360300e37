//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Diagnostic, EvalError, LexError, ParseError};

#[test]
fn test_diagnostic_creation() {
    let error = Diagnostic::new(LexError::UnexpectedCharacter { byte: b'@' }, 10);

    assert_eq!(error.get_line(), 10);
    assert_eq!(error.get_error(), &LexError::UnexpectedCharacter { byte: b'@' });
}

#[test]
fn test_unexpected_character_display() {
    let error = Diagnostic::new(LexError::UnexpectedCharacter { byte: b'@' }, 1);

    assert_eq!(error.to_string(), "[line 1] Error: Unexpected character: @");
}

#[test]
fn test_unexpected_high_byte_display() {
    let error = LexError::UnexpectedCharacter { byte: 0xff };

    assert_eq!(error.to_string(), "Unexpected character: \u{ff}");
}

#[test]
fn test_unterminated_string_display() {
    let error = Diagnostic::new(LexError::UnterminatedString, 3);

    assert_eq!(error.to_string(), "[line 3] Error: Unterminated string.");
}

#[test]
fn test_parse_error_messages() {
    let error = ParseError::UnsupportedShape { count: 2 };
    assert_eq!(
        error.to_string(),
        "Unable to parse: expected 1 or 3 tokens, found 2"
    );

    let error = ParseError::UnexpectedToken {
        token: "-".to_string(),
        line: 4,
    };
    assert_eq!(
        error.to_string(),
        "Unable to parse: unexpected token `-` at line 4"
    );
}

#[test]
fn test_eval_error_message() {
    let error = EvalError::OperandsMustBeNumbers {
        operator: "+".to_string(),
    };

    assert_eq!(error.to_string(), "Operands of `+` must be numbers.");
}
