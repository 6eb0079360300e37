//! Parser implementation for building expression trees.
//!
//! This module contains the Parser struct, a cursor over a token slice,
//! and the `parse` entry point that checks the accepted shapes.

use crate::{
    ast::ast::Expr,
    errors::errors::ParseError,
    lexer::tokens::{Token, TokenKind},
};

use super::expr::{parse_binary_expr, parse_primary_expr};

/// Cursor over the tokens of one expression.
pub struct Parser<'a> {
    /// The tokens to parse, without the trailing EOF
    tokens: &'a [Token],
    /// Current position in the token slice
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let tokens = match tokens.split_last() {
            Some((last, rest)) if last.kind == TokenKind::EOF => rest,
            _ => tokens,
        };

        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Expects a token of the specified kind and consumes it.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `UnexpectedToken` error describing what was found.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<&'a Token, ParseError> {
        match self.current_token() {
            Some(token) if token.kind == expected_kind => {
                self.pos += 1;
                Ok(token)
            }
            Some(token) => Err(ParseError::UnexpectedToken {
                token: token.lexeme.clone(),
                line: token.line,
            }),
            None => Err(ParseError::UnsupportedShape { count: self.token_count() }),
        }
    }

    /// Number of tokens, excluding EOF.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }
}

/// Builds an expression from a token sequence.
///
/// Accepts exactly one literal token, or a `<literal> + <literal>` triple.
/// A trailing `EOF` token is ignored.
pub fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(tokens);

    let expr = match parser.token_count() {
        1 => parse_primary_expr(&mut parser)?,
        3 => {
            let left = parse_primary_expr(&mut parser)?;
            parse_binary_expr(&mut parser, left)?
        }
        count => return Err(ParseError::UnsupportedShape { count }),
    };

    debug_assert!(!parser.has_tokens());
    Ok(expr)
}
