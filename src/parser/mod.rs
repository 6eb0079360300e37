//! Parser module for building expression trees from tokens.
//!
//! The supported grammar is deliberately narrow:
//!
//! - a single literal (`true`, `false`, `nil` or a number)
//! - `<literal> + <literal>`
//!
//! Anything else is reported as a `ParseError`. A trailing `EOF` token is
//! ignored so the scanner's output can be passed in unchanged.

pub mod expr;
pub mod parser;
