//! Parser states and step outcomes.
//!
//! A [`ParserState`] only ever wraps an automaton environment that was
//! waiting for input, so "offer a token" is always a legal next move.

use std::num::NonZeroU32;

use reed_diagnostic::{unexpected_eof, unexpected_token, Diagnostic};
use reed_ir::{Span, Token, TokenKind};

use crate::docstrings::{InvalidDocstring, InvalidDocstrings};
use crate::ParseError;

/// An in-progress parse.
#[derive(Clone, Debug)]
pub enum ParserState<E> {
    /// Nothing speculative outstanding.
    Normal {
        env: E,
        docstrings: InvalidDocstrings,
    },
    /// The last token was a marker-only operator, read as infix; the
    /// postfix reading can still be replayed from `fallback`.
    PostfixPending(PostfixPending<E>),
}

/// A marker-only operator that was offered as infix and may still turn out
/// to be a run of postfix operators.
///
/// Invariant: `env` is what offering exactly that one operator token to
/// `fallback` produced.
#[derive(Clone, Debug)]
pub struct PostfixPending<E> {
    pub(crate) env: E,
    pub(crate) docstrings: InvalidDocstrings,
    pub(crate) fallback: E,
    pub(crate) count: NonZeroU32,
    pub(crate) position: u32,
}

impl<E> PostfixPending<E> {
    /// Environment before the operator was offered.
    pub fn fallback(&self) -> &E {
        &self.fallback
    }

    /// Number of marker characters, i.e. postfix operators to replay.
    pub fn count(&self) -> NonZeroU32 {
        self.count
    }

    /// Offset of the first marker character.
    pub fn position(&self) -> u32 {
        self.position
    }
}

impl<E> ParserState<E> {
    pub(crate) fn normal(env: E, docstrings: InvalidDocstrings) -> Self {
        ParserState::Normal { env, docstrings }
    }

    /// The environment the next token will be offered to.
    pub fn env(&self) -> &E {
        match self {
            ParserState::Normal { env, .. } => env,
            ParserState::PostfixPending(pending) => &pending.env,
        }
    }

    pub fn docstrings(&self) -> &InvalidDocstrings {
        match self {
            ParserState::Normal { docstrings, .. } => docstrings,
            ParserState::PostfixPending(pending) => &pending.docstrings,
        }
    }

    pub fn is_postfix_pending(&self) -> bool {
        matches!(self, ParserState::PostfixPending(_))
    }
}

impl<E: Clone> ParserState<E> {
    /// Record a detached doc comment, leaving everything else as is.
    #[must_use]
    pub fn add_docstring(&self, docstring: InvalidDocstring) -> Self {
        match self {
            ParserState::Normal { env, docstrings } => ParserState::Normal {
                env: env.clone(),
                docstrings: docstrings.with(docstring),
            },
            ParserState::PostfixPending(pending) => ParserState::PostfixPending(PostfixPending {
                docstrings: pending.docstrings.with(docstring),
                ..pending.clone()
            }),
        }
    }
}

/// The automaton checkpoint a failed parse stopped on.
#[derive(Clone, Debug)]
pub enum FailedCheckpoint<E> {
    HandlingError(E),
    Rejected,
}

/// Terminal snapshot of a failed parse, kept for diagnostics.
///
/// Nothing can be offered to it. All accessors are pure, so extracting a
/// report twice yields the same report.
#[derive(Clone, Debug)]
pub struct ErroneousState<E> {
    checkpoint: FailedCheckpoint<E>,
    docstrings: InvalidDocstrings,
    token: Token,
}

impl<E> ErroneousState<E> {
    pub(crate) fn new(
        checkpoint: FailedCheckpoint<E>,
        docstrings: InvalidDocstrings,
        token: Token,
    ) -> Self {
        ErroneousState {
            checkpoint,
            docstrings,
            token,
        }
    }

    pub fn checkpoint(&self) -> &FailedCheckpoint<E> {
        &self.checkpoint
    }

    /// Doc comments diverted before the failure.
    pub fn docstrings(&self) -> &InvalidDocstrings {
        &self.docstrings
    }

    /// The real (never synthetic) token whose offer failed.
    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn span(&self) -> Span {
        self.token.span
    }

    pub fn to_error(&self) -> ParseError {
        ParseError::SyntaxRejected {
            token: self.token.kind.clone(),
            span: self.token.span,
            docstrings: self.docstrings.to_vec(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self.token.kind {
            TokenKind::Eof => unexpected_eof(self.token.span.start),
            ref kind => unexpected_token(self.token.span, kind),
        }
    }
}

/// A finished parse: the automaton's value plus the detached doc comments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parsed<V> {
    pub value: V,
    pub docstrings: InvalidDocstrings,
}

/// What one offer produced.
///
/// A parse is a run of `Intermediate`s ended by exactly one `Success` or
/// `Error`.
#[derive(Clone, Debug)]
#[must_use]
pub enum StepOutcome<E, V> {
    Intermediate(ParserState<E>),
    Success(Parsed<V>),
    Error(ErroneousState<E>),
}

impl<E, V> StepOutcome<E, V> {
    #[inline]
    pub fn is_intermediate(&self) -> bool {
        matches!(self, StepOutcome::Intermediate(_))
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, StepOutcome::Success(_))
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, StepOutcome::Error(_))
    }

    /// Map the accepted value, preserving the outcome variant.
    pub fn map_value<U, F: FnOnce(V) -> U>(self, f: F) -> StepOutcome<E, U> {
        match self {
            StepOutcome::Intermediate(state) => StepOutcome::Intermediate(state),
            StepOutcome::Success(Parsed { value, docstrings }) => StepOutcome::Success(Parsed {
                value: f(value),
                docstrings,
            }),
            StepOutcome::Error(err) => StepOutcome::Error(err),
        }
    }

    /// Convert a terminal outcome into a `Result`. Returns `None` while
    /// the parse is still in progress.
    pub fn into_result(self) -> Option<Result<Parsed<V>, ParseError>> {
        match self {
            StepOutcome::Intermediate(_) => None,
            StepOutcome::Success(parsed) => Some(Ok(parsed)),
            StepOutcome::Error(err) => Some(Err(err.to_error())),
        }
    }
}
