use crate::lexer::tokens::Token;

use super::ast::{Expr, ExprVisitor, LiteralValue};

/// Renders expressions in fully parenthesized prefix form, e.g. `(+ 1.0 2.0)`.
#[derive(Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }
}

impl ExprVisitor for AstPrinter {
    type Output = String;

    fn visit_literal(&mut self, value: &LiteralValue) -> String {
        value.to_string()
    }

    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        format!(
            "({} {} {})",
            operator.lexeme,
            left.accept(self),
            right.accept(self)
        )
    }
}
