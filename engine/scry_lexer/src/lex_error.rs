//! Lexer error types.

use scry_ir::Span;
use std::fmt;

/// A lexer error: WHERE it happened and WHAT went wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexError {
    /// WHERE the error occurred, as a byte span into the line.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

impl LexError {
    #[inline]
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { span, kind }
    }
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character the grammar has no use for (including `$` left behind
    /// by an unmatched reference token).
    UnknownChar(char),
    /// Missing closing `"` for a string literal.
    UnterminatedString,
    /// Invalid escape in a string literal (e.g., `\q`).
    InvalidEscape(char),
    /// Integer literal overflowed `i64`.
    IntOverflow,
    /// Float literal could not be parsed.
    InvalidFloat,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LexErrorKind::UnknownChar(c) => write!(f, "unexpected character `{c}`"),
            LexErrorKind::UnterminatedString => write!(f, "unterminated string literal"),
            LexErrorKind::InvalidEscape(c) => write!(f, "invalid escape `\\{c}` in string"),
            LexErrorKind::IntOverflow => write!(f, "integer literal too large"),
            LexErrorKind::InvalidFloat => write!(f, "malformed float literal"),
        }
    }
}
