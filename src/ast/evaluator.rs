use crate::{
    errors::errors::EvalError,
    lexer::tokens::{Token, TokenKind},
};

use super::ast::{Expr, ExprVisitor, LiteralValue};

/// Folds an expression tree into a single literal value.
#[derive(Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn evaluate(&mut self, expr: &Expr) -> Result<LiteralValue, EvalError> {
        expr.accept(self)
    }
}

impl ExprVisitor for Evaluator {
    type Output = Result<LiteralValue, EvalError>;

    fn visit_literal(&mut self, value: &LiteralValue) -> Self::Output {
        Ok(value.clone())
    }

    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> Self::Output {
        let left = left.accept(self)?;
        let right = right.accept(self)?;

        match (operator.kind, left, right) {
            (
                TokenKind::Plus,
                LiteralValue::Number { value: left, .. },
                LiteralValue::Number { value: right, .. },
            ) => Ok(LiteralValue::number(left + right)),
            _ => Err(EvalError::OperandsMustBeNumbers {
                operator: operator.lexeme.clone(),
            }),
        }
    }
}
