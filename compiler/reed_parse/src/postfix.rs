//! Postfix disambiguation.
//!
//! The lexer produces `^^` as one infix operator token, but the grammar may
//! mean two postfix `^` applications instead. Which one only becomes clear
//! with the next token, so the driver:
//!
//! 1. offers the token as infix and remembers the environment from before
//!    the offer (`ParserState::PostfixPending`);
//! 2. if the *next* token fails against the infix reading, replays from the
//!    saved environment with one synthetic one-character `Postfix` token per
//!    marker, then offers the next token again;
//! 3. adopts the replay if it does not fail, else reports the infix error.
//!
//! One token of lookahead, one level of backtracking. A newer marker
//! operator simply replaces the pending one.

use std::num::NonZeroU32;

use reed_ir::{Token, TokenKind};
use tracing::debug;

use crate::automaton::Automaton;
use crate::driver::{Driver, Outcome};
use crate::state::{PostfixPending, StepOutcome};
use crate::step::Settled;

/// The character a marker-only operator is made of.
pub const POSTFIX_MARKER: char = '^';

/// Number of postfix operators `kind` could stand for, if it is a
/// marker-only infix operator.
pub fn marker_count(kind: &TokenKind) -> Option<NonZeroU32> {
    match kind {
        TokenKind::InfixOp1(text) if text.chars().all(|c| c == POSTFIX_MARKER) => {
            NonZeroU32::new(u32::try_from(text.len()).ok()?)
        }
        _ => None,
    }
}

/// The synthetic tokens standing in for `count` postfix operators starting
/// at `position`, each one character wide.
pub fn postfix_tokens(count: NonZeroU32, position: u32) -> impl Iterator<Item = Token> {
    (0..count.get()).map(move |i| {
        let start = position.saturating_add(i);
        Token::at(
            TokenKind::Postfix(POSTFIX_MARKER.to_string()),
            start,
            start.saturating_add(1),
        )
    })
}

impl<A: Automaton> Driver<A> {
    pub(crate) fn step_pending(
        &self,
        pending: &PostfixPending<A::Env>,
        token: Token,
    ) -> Outcome<A> {
        match self.step_normal(&pending.env, &pending.docstrings, token.clone()) {
            StepOutcome::Error(infix_error) => match self.replay_postfix(pending, token) {
                Some(outcome) => outcome,
                None => StepOutcome::Error(infix_error),
            },
            outcome => outcome,
        }
    }

    /// Re-read the pending operator as postfix operators and offer `token`
    /// after them. `None` if any part of the replay fails.
    fn replay_postfix(
        &self,
        pending: &PostfixPending<A::Env>,
        token: Token,
    ) -> Option<Outcome<A>> {
        let mut env = pending.fallback.clone();
        for synthetic in postfix_tokens(pending.count, pending.position) {
            match self.offer_settled(&env, synthetic) {
                Settled::NeedsInput(next) => env = next,
                Settled::Accepted(_) | Settled::Failed(_) => {
                    debug!(position = pending.position, "postfix replay abandoned");
                    return None;
                }
            }
        }

        match self.step_normal(&env, &pending.docstrings, token) {
            StepOutcome::Error(_) => {
                debug!(position = pending.position, "postfix replay rejected next token");
                None
            }
            outcome => {
                debug!(
                    count = pending.count.get(),
                    position = pending.position,
                    "marker operator re-read as postfix"
                );
                Some(outcome)
            }
        }
    }
}
