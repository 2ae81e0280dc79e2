//! Parse error types.

use scry_ir::{Span, TokenKind};
use std::fmt;

/// A parse error: WHERE it happened and WHAT went wrong.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseError {
    /// WHERE the error occurred, as a byte span into the line.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: ParseErrorKind,
}

impl ParseError {
    #[inline]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { span, kind }
    }
}

/// What kind of parse error occurred.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseErrorKind {
    /// A token that cannot start or continue an expression here.
    UnexpectedToken(TokenKind),
    /// The line ended where an expression operand was still expected.
    UnexpectedEnd,
    /// A `(` was never closed.
    UnclosedParen,
    /// The expression parsed, but tokens remain (e.g. `1 2`).
    TrailingTokens(TokenKind),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnexpectedToken(kind) => {
                write!(f, "unexpected {}", kind.describe())
            }
            ParseErrorKind::UnexpectedEnd => write!(f, "expected an expression"),
            ParseErrorKind::UnclosedParen => write!(f, "missing closing `)`"),
            ParseErrorKind::TrailingTokens(kind) => {
                write!(f, "unexpected {} after expression", kind.describe())
            }
        }
    }
}
