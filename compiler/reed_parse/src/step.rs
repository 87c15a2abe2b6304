//! The stepping engine.
//!
//! Offers one token to the automaton, trampolines through its internal
//! states, and classifies where it lands. Postfix disambiguation is part of
//! stepping: it is attempted on every marker-only operator, whereas the
//! recovery heuristics only run once a step has already failed.

use reed_ir::Token;
use tracing::trace;

use crate::automaton::{Automaton, Checkpoint};
use crate::docstrings::InvalidDocstrings;
use crate::driver::{Driver, Outcome, State};
use crate::postfix;
use crate::state::{
    ErroneousState, FailedCheckpoint, Parsed, ParserState, PostfixPending, StepOutcome,
};
use crate::Heuristics;

/// A checkpoint with no internal steps left to take.
pub(crate) enum Settled<E, V> {
    NeedsInput(E),
    Accepted(V),
    Failed(FailedCheckpoint<E>),
}

impl<A: Automaton> Driver<A> {
    /// Resume through `Shifting`/`AboutToReduce` until the automaton needs
    /// input, accepts, or fails.
    pub(crate) fn settle(
        &self,
        mut checkpoint: Checkpoint<A::Env, A::Value>,
    ) -> Settled<A::Env, A::Value> {
        let mut resumed = 0usize;
        loop {
            checkpoint = match checkpoint {
                Checkpoint::InputNeeded(env) => {
                    trace!(resumed, "input needed");
                    return Settled::NeedsInput(env);
                }
                Checkpoint::Accepted(value) => {
                    trace!(resumed, "accepted");
                    return Settled::Accepted(value);
                }
                Checkpoint::HandlingError(env) => {
                    trace!(resumed, "handling error");
                    return Settled::Failed(FailedCheckpoint::HandlingError(env));
                }
                Checkpoint::Rejected => {
                    trace!(resumed, "rejected");
                    return Settled::Failed(FailedCheckpoint::Rejected);
                }
                internal @ (Checkpoint::Shifting(_) | Checkpoint::AboutToReduce(_)) => {
                    resumed += 1;
                    self.automaton.resume(internal)
                }
            };
        }
    }

    /// Offer `token` to `env` and settle the result.
    pub(crate) fn offer_settled(&self, env: &A::Env, token: Token) -> Settled<A::Env, A::Value> {
        self.settle(self.automaton.offer(env, token))
    }

    /// Advance `state` by one token, with postfix disambiguation but
    /// without any recovery heuristics.
    pub(crate) fn step(&self, state: &State<A>, token: Token) -> Outcome<A> {
        match state {
            ParserState::Normal { env, docstrings } => self.step_normal(env, docstrings, token),
            ParserState::PostfixPending(pending) => self.step_pending(pending, token),
        }
    }

    pub(crate) fn step_normal(
        &self,
        env: &A::Env,
        docstrings: &InvalidDocstrings,
        token: Token,
    ) -> Outcome<A> {
        trace!(token = ?token, "offer");
        let marker = if self.heuristics.contains(Heuristics::POSTFIX) {
            postfix::marker_count(&token.kind)
        } else {
            None
        };
        let position = token.span.start;

        match self.offer_settled(env, token.clone()) {
            Settled::NeedsInput(next) => match marker {
                Some(count) => {
                    trace!(count = count.get(), position, "marker operator read as infix");
                    StepOutcome::Intermediate(ParserState::PostfixPending(PostfixPending {
                        env: next,
                        docstrings: docstrings.clone(),
                        fallback: env.clone(),
                        count,
                        position,
                    }))
                }
                None => StepOutcome::Intermediate(ParserState::normal(next, docstrings.clone())),
            },
            Settled::Accepted(value) => StepOutcome::Success(Parsed {
                value,
                docstrings: docstrings.clone(),
            }),
            Settled::Failed(checkpoint) => {
                StepOutcome::Error(ErroneousState::new(checkpoint, docstrings.clone(), token))
            }
        }
    }
}
