//! Driver-level parse errors.
//!
//! There is exactly one way for the driver itself to fail: the automaton
//! rejected a token and none of the recovery heuristics could rescue it.
//! `Incomplete` only comes from the whole-stream convenience
//! [`Driver::parse`](crate::Driver::parse).

use reed_diagnostic::{unexpected_eof, unexpected_token, Diagnostic};
use reed_ir::{Span, TokenKind};

use crate::docstrings::InvalidDocstring;

/// Error returned once a parse has failed for good.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum ParseError {
    /// The automaton rejected `token` and every recovery attempt failed.
    #[error("syntax error at {span}: unexpected {token}")]
    SyntaxRejected {
        token: TokenKind,
        span: Span,
        /// Doc comments diverted before the failure point.
        docstrings: Vec<InvalidDocstring>,
    },

    /// The token stream ran out while the parse still needed input.
    #[error("unexpected end of input at offset {at}")]
    Incomplete { at: u32 },
}

impl ParseError {
    /// Primary location of the error.
    pub fn span(&self) -> Span {
        match self {
            ParseError::SyntaxRejected { span, .. } => *span,
            ParseError::Incomplete { at } => Span::point(*at),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ParseError::SyntaxRejected {
                token: TokenKind::Eof,
                span,
                ..
            } => unexpected_eof(span.start),
            ParseError::SyntaxRejected { token, span, .. } => unexpected_token(*span, token),
            ParseError::Incomplete { at } => unexpected_eof(*at),
        }
    }
}
