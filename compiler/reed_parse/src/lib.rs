//! Streaming parser driver for Reed.
//!
//! Sits on top of a table-driven LR automaton (consumed through the
//! [`Automaton`] trait) and feeds it one token at a time. Where the grammar
//! alone would reject input that only looks wrong because of a lexical
//! ambiguity, the driver retries from saved checkpoints:
//!
//! - `^^`-style marker operators are read as infix first and replayed as a
//!   run of postfix operators if the next token proves that wrong
//!   ([`postfix`]).
//! - Misplaced doc comments are diverted into a diagnostics list, a `;` is
//!   inserted at statement boundaries, and fused `=?-`-style label operators
//!   are split into their parts ([`recovery`]).
//!
//! Every transition produces a new state value; old states stay valid, so
//! callers may keep them around and re-offer tokens from any of them.
//!
//! ```text
//! let driver = Driver::new(automaton);
//! let mut state = driver.implementation(0);
//! for token in lexer {
//!     match driver.offer(&state, token) {
//!         StepOutcome::Intermediate(next) => state = next,
//!         StepOutcome::Success(parsed) => return Ok(parsed),
//!         StepOutcome::Error(err) => return Err(err.to_error()),
//!     }
//! }
//! ```

pub mod automaton;
mod docstrings;
mod driver;
mod entry;
mod error;
mod heuristics;
pub mod postfix;
pub mod recovery;
mod state;
mod step;

#[cfg(test)]
mod testing;

pub use automaton::{Automaton, Checkpoint, Status};
pub use docstrings::{InvalidDocstring, InvalidDocstrings};
pub use driver::{Driver, Outcome, State};
pub use entry::EntryPoint;
pub use error::ParseError;
pub use heuristics::Heuristics;
pub use recovery::TokenSet;
pub use state::{
    ErroneousState, FailedCheckpoint, Parsed, ParserState, PostfixPending, StepOutcome,
};
