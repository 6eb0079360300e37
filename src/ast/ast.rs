use std::fmt::Display;

use crate::lexer::tokens::Token;

/// Decoded value of a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Bool(bool),
    Nil,
    /// `text` is the canonical decimal form the value was decoded from.
    Number { value: f64, text: String },
}

impl LiteralValue {
    /// A number computed at runtime, rendered with at least one fractional
    /// digit (`1.0`, `2.5`).
    pub fn number(value: f64) -> Self {
        let text = if value.is_finite() && value.fract() == 0.0 {
            format!("{:.1}", value)
        } else {
            format!("{}", value)
        };
        LiteralValue::Number { value, text }
    }
}

/// Canonical text: `nil`, `true`/`false`, and a number's canonical
/// decimal form.
impl Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralValue::Bool(value) => write!(f, "{}", value),
            LiteralValue::Nil => write!(f, "nil"),
            LiteralValue::Number { text, .. } => write!(f, "{}", text),
        }
    }
}

/// Expression Types
///
/// Operands of a `Binary` node are owned by it; trees are never shared.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralValue),
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
}

impl Expr {
    /// Dispatches to the visitor method for this node.
    pub fn accept<V: ExprVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Literal(value) => visitor.visit_literal(value),
            Expr::Binary {
                left,
                operator,
                right,
            } => visitor.visit_binary(left, operator, right),
        }
    }
}

/// Expression Visitor
///
/// One implementor per rendering of a tree. Adding an `Expr` variant forces
/// every visitor to handle it.
pub trait ExprVisitor {
    type Output;

    fn visit_literal(&mut self, value: &LiteralValue) -> Self::Output;
    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> Self::Output;
}
