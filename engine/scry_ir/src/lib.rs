//! Shared IR for the scry engine.
//!
//! Home of the types every pipeline stage agrees on: source spans, lexer
//! tokens, and the expression/statement AST. Keeping them in one leaf crate
//! lets the lexer, parser, and evaluator depend on the same definitions
//! without depending on each other.

mod ast;
mod span;
mod token;

pub use ast::{BinaryOp, Expr, ExprKind, Stmt, UnaryOp};
pub use span::Span;
pub use token::{Token, TokenKind};
