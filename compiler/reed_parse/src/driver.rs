//! The public face of the driver.

use reed_ir::Token;
use tracing::trace;

use crate::automaton::Automaton;
use crate::docstrings::{InvalidDocstring, InvalidDocstrings};
use crate::entry::EntryPoint;
use crate::error::ParseError;
use crate::heuristics::Heuristics;
use crate::state::{Parsed, ParserState, StepOutcome};
use crate::step::Settled;

/// Parser state for automaton `A`.
pub type State<A> = ParserState<<A as Automaton>::Env>;

/// Step outcome for automaton `A`.
pub type Outcome<A> = StepOutcome<<A as Automaton>::Env, <A as Automaton>::Value>;

/// Drives an [`Automaton`] one token at a time.
///
/// The driver holds no per-parse state: all of it lives in the
/// [`ParserState`] values it hands out, so one driver can run any number of
/// interleaved parses.
pub struct Driver<A> {
    pub(crate) automaton: A,
    pub(crate) heuristics: Heuristics,
}

impl<A: Automaton> Driver<A> {
    /// Create a driver with every heuristic enabled.
    pub fn new(automaton: A) -> Self {
        Driver {
            automaton,
            heuristics: Heuristics::default(),
        }
    }

    /// Restrict the driver to `heuristics`.
    #[must_use]
    pub fn with_heuristics(mut self, heuristics: Heuristics) -> Self {
        self.heuristics = heuristics;
        self
    }

    pub fn heuristics(&self) -> Heuristics {
        self.heuristics
    }

    pub fn automaton(&self) -> &A {
        &self.automaton
    }

    /// Start a parse of `entry` at byte offset `at`.
    ///
    /// # Panics
    ///
    /// Panics if the automaton does not start `entry` in a state that waits
    /// for input. That is a defect in the automaton, not a syntax error.
    pub fn initialize(&self, entry: EntryPoint, at: u32) -> State<A> {
        match self.settle(self.automaton.start(entry, at)) {
            Settled::NeedsInput(env) => ParserState::normal(env, InvalidDocstrings::new()),
            Settled::Accepted(_) | Settled::Failed(_) => {
                panic!("automaton must start entry point `{entry}` waiting for input")
            }
        }
    }

    /// Start a parse of a whole implementation file.
    pub fn implementation(&self, at: u32) -> State<A> {
        self.initialize(EntryPoint::Implementation, at)
    }

    /// Start a parse of a whole interface file.
    pub fn interface(&self, at: u32) -> State<A> {
        self.initialize(EntryPoint::Interface, at)
    }

    /// Start a parse of a single expression.
    pub fn expression(&self, at: u32) -> State<A> {
        self.initialize(EntryPoint::Expression, at)
    }

    /// Start a parse of a single type expression.
    pub fn core_type(&self, at: u32) -> State<A> {
        self.initialize(EntryPoint::CoreType, at)
    }

    /// Start a parse of one top-level phrase.
    pub fn toplevel_phrase(&self, at: u32) -> State<A> {
        self.initialize(EntryPoint::ToplevelPhrase, at)
    }

    /// Start a parse of a sequence of top-level phrases.
    pub fn use_file(&self, at: u32) -> State<A> {
        self.initialize(EntryPoint::UseFile, at)
    }

    /// Offer the next token.
    ///
    /// Steps the automaton (including postfix disambiguation); if that
    /// fails, the recovery heuristics get one try each before the failure
    /// is reported. `state` stays valid either way.
    pub fn offer(&self, state: &State<A>, token: Token) -> Outcome<A> {
        match self.step(state, token.clone()) {
            StepOutcome::Error(error) => self.recover(state, token, error),
            outcome => outcome,
        }
    }

    /// Offer tokens in order until they run out or the parse finishes.
    ///
    /// Tokens after a terminal outcome are not pulled from the iterator.
    pub fn offer_many<I>(&self, state: &State<A>, tokens: I) -> Outcome<A>
    where
        I: IntoIterator<Item = Token>,
    {
        let mut current = state.clone();
        for token in tokens {
            match self.offer(&current, token) {
                StepOutcome::Intermediate(next) => current = next,
                terminal => return terminal,
            }
        }
        StepOutcome::Intermediate(current)
    }

    /// Record a detached doc comment on `state`.
    #[must_use]
    pub fn add_docstring(&self, state: &State<A>, docstring: InvalidDocstring) -> State<A> {
        state.add_docstring(docstring)
    }

    /// Parse a complete token stream for `entry`.
    ///
    /// # Errors
    ///
    /// `SyntaxRejected` if the automaton rejects a token that no heuristic
    /// can rescue; `Incomplete` if the stream ends before the parse does.
    pub fn parse<I>(
        &self,
        entry: EntryPoint,
        at: u32,
        tokens: I,
    ) -> Result<Parsed<A::Value>, ParseError>
    where
        I: IntoIterator<Item = Token>,
    {
        let mut state = self.initialize(entry, at);
        let mut end = at;
        for token in tokens {
            end = token.span.end;
            match self.offer(&state, token) {
                StepOutcome::Intermediate(next) => state = next,
                StepOutcome::Success(parsed) => return Ok(parsed),
                StepOutcome::Error(error) => return Err(error.to_error()),
            }
        }
        trace!(entry = %entry, end, "token stream ended early");
        Err(ParseError::Incomplete { at: end })
    }
}
