//! Token cursor for the parser.

use scry_ir::{Span, Token, TokenKind};

/// A forward-only cursor over a lexed line.
pub(crate) struct Cursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Cursor<'t> {
    pub(crate) fn new(tokens: &'t [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// The current token, if any.
    #[inline]
    pub(crate) fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    /// Advance past the current token and return it.
    #[inline]
    pub(crate) fn bump(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Consume the current token if it matches `kind`.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek().is_some_and(|t| &t.kind == kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume the current token if it matches `kind`, returning its span.
    pub(crate) fn eat_span(&mut self, kind: &TokenKind) -> Option<Span> {
        let span = self.peek().filter(|t| &t.kind == kind)?.span;
        self.pos += 1;
        Some(span)
    }

    /// Span at the current position; after the last token this is the
    /// zero-width span just past it, so errors still point somewhere useful.
    pub(crate) fn span(&self) -> Span {
        match self.peek() {
            Some(token) => token.span,
            None => match self.tokens.last() {
                Some(last) => Span::new(last.span.end, last.span.end),
                None => Span::DUMMY,
            },
        }
    }
}
