//! Lexical analysis module.
//!
//! This module contains the lexer (scanner) that converts source text
//! into a stream of tokens. It handles:
//!
//! - Single and two character punctuation with one byte of lookahead
//! - Keywords, identifiers and numbers by maximal munch
//! - String literals, including multi-line strings
//! - Line comments and whitespace
//! - Collecting lexical diagnostics without stopping the scan

pub mod lexer;
pub mod tokens;
