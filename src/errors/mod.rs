//! Error types and error handling for the scanner and expression builder.
//!
//! This module defines:
//!
//! - Lexical diagnostics with the line they were found on
//! - Parse failures for token sequences outside the supported grammar
//! - Evaluation failures for the literal evaluator
//! - Helpful error names and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
