use crate::{
    ast::ast::{Expr, LiteralValue},
    errors::errors::ParseError,
    lexer::tokens::{Literal, TokenKind},
};

use super::parser::Parser;

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let Some(token) = parser.advance() else {
        return Err(ParseError::UnsupportedShape { count: parser.token_count() });
    };

    match (token.kind, &token.literal) {
        (TokenKind::True, _) => Ok(Expr::Literal(LiteralValue::Bool(true))),
        (TokenKind::False, _) => Ok(Expr::Literal(LiteralValue::Bool(false))),
        (TokenKind::Nil, _) => Ok(Expr::Literal(LiteralValue::Nil)),
        (TokenKind::Number, Some(Literal::Number(text))) => match text.parse::<f64>() {
            Ok(value) => Ok(Expr::Literal(LiteralValue::Number {
                value,
                text: text.clone(),
            })),
            Err(_) => Err(ParseError::NumberParseError {
                token: token.lexeme.clone(),
            }),
        },
        (TokenKind::Number, _) => Err(ParseError::NumberParseError {
            token: token.lexeme.clone(),
        }),
        _ => Err(ParseError::UnexpectedToken {
            token: token.lexeme.clone(),
            line: token.line,
        }),
    }
}

/// Parses `+ <literal>` after an already parsed left operand.
pub fn parse_binary_expr(parser: &mut Parser, left: Expr) -> Result<Expr, ParseError> {
    let operator = parser.expect(TokenKind::Plus)?.clone();
    let right = parse_primary_expr(parser)?;

    Ok(Expr::Binary {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    })
}
