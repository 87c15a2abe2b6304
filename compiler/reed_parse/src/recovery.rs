//! Error recovery for the driver.
//!
//! Runs only after a step has failed, against the state from *before* the
//! failing token. Strategies are tried in a fixed order and are mutually
//! exclusive: the first one whose trigger matches the token is the only
//! one attempted, and if it fails the original error stands.
//!
//! 1. Doc comments: diverted into the docstring list, never fatal.
//! 2. Statement starters: retried as `;` followed by the token.
//! 3. `=`-prefixed infix operators: split into `=`, optional `?`, and a
//!    unary operator.

use reed_ir::{Span, Token, TokenKind, TokenTag};
use smallvec::{smallvec, SmallVec};
use tracing::debug;

use crate::automaton::Automaton;
use crate::docstrings::InvalidDocstring;
use crate::driver::{Driver, Outcome, State};
use crate::state::{ErroneousState, StepOutcome};
use crate::Heuristics;

/// Replacement tokens for one rejected token. Never more than three.
pub type Alternative = SmallVec<[Token; 3]>;

// Every tag must index a bit of the u64 below.
const _: () = assert!(
    TokenTag::MAX_DISCRIMINANT < 64,
    "TokenSet is a u64 bitset; token tags must stay below 64"
);

/// Constant-time membership over token kinds, one bit per [`TokenTag`].
///
/// Payloads are ignored: `LIdent("a")` and `LIdent("b")` are the same
/// member.
///
/// ```ignore
/// const OPENERS: TokenSet = TokenSet::new()
///     .with(TokenTag::Let)
///     .with(TokenTag::Open);
///
/// assert!(OPENERS.contains(&token.kind));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Builder for `const` sets.
    #[inline]
    #[must_use]
    pub const fn with(self, tag: TokenTag) -> Self {
        Self(self.0 | (1u64 << tag as u8))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(&self, kind: &TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of member kinds.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

/// Tokens that can only begin a new statement. Rejected after a complete
/// statement, they are retried with a `;` in front.
pub const STATEMENT_STARTERS: TokenSet = TokenSet::new()
    .with(TokenTag::Let)
    .with(TokenTag::Type)
    .with(TokenTag::Module)
    .with(TokenTag::Open)
    .with(TokenTag::Exception)
    .with(TokenTag::Include)
    .with(TokenTag::DocString)
    .with(TokenTag::LIdent)
    .with(TokenTag::UIdent)
    .with(TokenTag::If)
    .with(TokenTag::While)
    .with(TokenTag::For)
    .with(TokenTag::Switch)
    .with(TokenTag::Try)
    .with(TokenTag::Assert)
    .with(TokenTag::Lazy)
    .with(TokenTag::LBracketAt);

/// Unary operator that can trail a fused label operator like `=?-`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LabelOperator {
    Minus,
    MinusDot,
    Plus,
    PlusDot,
    Bang,
}

impl LabelOperator {
    /// Look up the operator spelled `text`. The table is closed: anything
    /// else means the token is not a fused label operator.
    pub fn from_text(text: &str) -> Option<Self> {
        match text {
            "-" => Some(LabelOperator::Minus),
            "-." => Some(LabelOperator::MinusDot),
            "+" => Some(LabelOperator::Plus),
            "+." => Some(LabelOperator::PlusDot),
            "!" => Some(LabelOperator::Bang),
            _ => None,
        }
    }

    pub fn token_kind(self) -> TokenKind {
        match self {
            LabelOperator::Minus => TokenKind::Minus,
            LabelOperator::MinusDot => TokenKind::MinusDot,
            LabelOperator::Plus => TokenKind::Plus,
            LabelOperator::PlusDot => TokenKind::PlusDot,
            LabelOperator::Bang => TokenKind::Bang,
        }
    }
}

/// Split a fused `=`-prefixed operator into its grammar tokens.
///
/// `=?-` at `p..p+3` becomes `=` at `p..p+1`, `?` at `p+1..p+2` and `-` at
/// `p+2..p+3`; `=+.` becomes `=` and `+.`. Returns `None` when the text
/// after `=` (and the optional `?`) is not in the operator table.
pub fn split_label_operator(text: &str, span: Span) -> Option<Alternative> {
    let rest = text.strip_prefix('=')?;
    let (optional, operator) = match rest.strip_prefix('?') {
        Some(operator) => (true, operator),
        None => (false, rest),
    };
    let operator = LabelOperator::from_text(operator)?;

    let mut tokens = Alternative::new();
    tokens.push(Token::new(TokenKind::Equal, span.sub_span(0, Some(1))));
    let operator_offset = if optional {
        tokens.push(Token::new(TokenKind::Question, span.sub_span(1, Some(2))));
        2
    } else {
        1
    };
    tokens.push(Token::new(
        operator.token_kind(),
        span.sub_span(operator_offset, None),
    ));
    Some(tokens)
}

impl<A: Automaton> Driver<A> {
    /// Try each applicable strategy for `token`, which just failed against
    /// `state` with `error`.
    pub(crate) fn recover(
        &self,
        state: &State<A>,
        token: Token,
        error: ErroneousState<A::Env>,
    ) -> Outcome<A> {
        let enabled = self.heuristics;

        if let TokenKind::DocString(text) = &token.kind {
            if enabled.contains(Heuristics::DOCSTRINGS) {
                debug!(span = %token.span, "doc comment diverted");
                let docstring = InvalidDocstring::new(text.clone(), token.span);
                return StepOutcome::Intermediate(state.add_docstring(docstring));
            }
        }

        if STATEMENT_STARTERS.contains(&token.kind) {
            if !enabled.contains(Heuristics::SEMICOLON) {
                return StepOutcome::Error(error);
            }
            let semi = Token::new(TokenKind::Semi, Span::point(token.span.start));
            let span = token.span;
            return match self.try_alternative(state, smallvec![semi, token]) {
                Some(outcome) => {
                    debug!(%span, "inserted `;` before statement");
                    outcome
                }
                None => StepOutcome::Error(error),
            };
        }

        if let TokenKind::InfixOp0(text) = &token.kind {
            if !enabled.contains(Heuristics::LABEL_SPLIT) {
                return StepOutcome::Error(error);
            }
            if let Some(parts) = split_label_operator(text, token.span) {
                return match self.try_alternative(state, parts) {
                    Some(outcome) => {
                        debug!(span = %token.span, text = %text, "split label operator");
                        outcome
                    }
                    None => StepOutcome::Error(error),
                };
            }
        }

        StepOutcome::Error(error)
    }

    /// Step `tokens` in order from `state`. The alternative counts only if
    /// every token is consumed and the last step does not fail; an
    /// acceptance that would leave tokens unconsumed is a failure too.
    fn try_alternative(&self, state: &State<A>, tokens: Alternative) -> Option<Outcome<A>> {
        let mut tokens = tokens.into_iter().peekable();
        let mut current = state.clone();
        while let Some(token) = tokens.next() {
            match self.step(&current, token) {
                StepOutcome::Intermediate(next) => current = next,
                StepOutcome::Success(parsed) if tokens.peek().is_none() => {
                    return Some(StepOutcome::Success(parsed));
                }
                StepOutcome::Success(_) | StepOutcome::Error(_) => return None,
            }
        }
        Some(StepOutcome::Intermediate(current))
    }
}
