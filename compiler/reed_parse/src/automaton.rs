//! The seam between the driver and the LR automaton.
//!
//! The automaton (tables, shift/reduce decisions, semantic actions) lives
//! outside this crate. The driver only sees [`Checkpoint`] values: immutable
//! snapshots it may clone, retain, and resume from at will.
//!
//! # Checkpoint lifecycle
//!
//! ```text
//! start ──► InputNeeded ──offer──► Shifting / AboutToReduce ──resume──► ...
//!                ▲                                                    │
//!                └──────────────────── InputNeeded ◄──────────────────┘
//!                                      Accepted(value)
//!                                      HandlingError ──resume──► Rejected
//! ```
//!
//! `Shifting` and `AboutToReduce` are internal: they must be resumed with no
//! new input. The adapter guarantees that a finite number of resumptions
//! reaches a non-internal checkpoint.

use reed_ir::Token;

use crate::EntryPoint;

/// A snapshot of the automaton.
///
/// `E` is the adapter's environment (stack, current state, pending
/// lookahead). It must be cheap to clone: backtracking keeps old
/// environments alive next to new ones and never deep-copies them.
#[derive(Clone, Debug)]
pub enum Checkpoint<E, V> {
    /// Waiting for the next token.
    InputNeeded(E),
    /// About to push the offered token. Internal.
    Shifting(E),
    /// About to perform a reduction. Internal.
    AboutToReduce(E),
    /// The offered token cannot be shifted.
    HandlingError(E),
    /// The goal symbol was recognised.
    Accepted(V),
    /// The automaton gave up.
    Rejected,
}

/// Coarse classification of a checkpoint.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Status {
    NeedsInput,
    InternalOnly,
    Accepted,
    Failed,
}

impl<E, V> Checkpoint<E, V> {
    /// Classify this checkpoint.
    pub fn status(&self) -> Status {
        match self {
            Checkpoint::InputNeeded(_) => Status::NeedsInput,
            Checkpoint::Shifting(_) | Checkpoint::AboutToReduce(_) => Status::InternalOnly,
            Checkpoint::Accepted(_) => Status::Accepted,
            Checkpoint::HandlingError(_) | Checkpoint::Rejected => Status::Failed,
        }
    }

    /// Returns `true` for states that must be resumed without input.
    #[inline]
    pub fn is_internal(&self) -> bool {
        self.status() == Status::InternalOnly
    }
}

/// An LR automaton driven one token at a time.
pub trait Automaton {
    /// Opaque automaton environment carried by checkpoints.
    type Env: Clone;
    /// Semantic value produced on acceptance.
    type Value;

    /// Start state for `entry`, positioned at byte offset `at`.
    fn start(&self, entry: EntryPoint, at: u32) -> Checkpoint<Self::Env, Self::Value>;

    /// Offer `token` to an environment that was `InputNeeded`.
    fn offer(&self, env: &Self::Env, token: Token) -> Checkpoint<Self::Env, Self::Value>;

    /// Take one internal step. Only meaningful on `Shifting`,
    /// `AboutToReduce` and `HandlingError`; other checkpoints are returned
    /// unchanged.
    fn resume(
        &self,
        checkpoint: Checkpoint<Self::Env, Self::Value>,
    ) -> Checkpoint<Self::Env, Self::Value>;
}

impl<A: Automaton + ?Sized> Automaton for &A {
    type Env = A::Env;
    type Value = A::Value;

    #[inline]
    fn start(&self, entry: EntryPoint, at: u32) -> Checkpoint<Self::Env, Self::Value> {
        (**self).start(entry, at)
    }

    #[inline]
    fn offer(&self, env: &Self::Env, token: Token) -> Checkpoint<Self::Env, Self::Value> {
        (**self).offer(env, token)
    }

    #[inline]
    fn resume(
        &self,
        checkpoint: Checkpoint<Self::Env, Self::Value>,
    ) -> Checkpoint<Self::Env, Self::Value> {
        (**self).resume(checkpoint)
    }
}
