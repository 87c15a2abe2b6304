//! Tokens consumed by the parser driver.
//!
//! The lexer is an external collaborator: the driver only pattern-matches on
//! token kinds and re-slices spans, it never re-reads source text.

mod kind;
mod tag;

pub use kind::TokenKind;
pub use tag::TokenTag;

use std::fmt;

use super::Span;

/// A token with its span in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Create a token at explicit byte offsets.
    #[inline]
    pub fn at(kind: TokenKind, start: u32, end: u32) -> Self {
        Token {
            kind,
            span: Span::new(start, end),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}
