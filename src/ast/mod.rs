/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to expression trees
///
/// Submodules:
/// - ast: Expression nodes, literal values and the visitor trait
/// - printer: Parenthesized prefix rendering of an expression
/// - evaluator: Folds literal expressions into a value
pub mod ast;
pub mod evaluator;
pub mod printer;
