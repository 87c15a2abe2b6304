//! Test support: a reference automaton and a word lexer.
//!
//! The reference automaton is a hand-written shift/reduce machine for a
//! miniature Reason-flavoured grammar. It follows the checkpoint protocol
//! faithfully (internal `Shifting`/`AboutToReduce` states, error detection
//! on the first token that cannot continue a viable prefix), which is all
//! the driver cares about.
//!
//! ```text
//! items    ::= (item (';' item)*)? ';'?
//! item     ::= DOC item | 'let' LIDENT '=' expr | 'let' LIDENT ':' type
//!            | 'open' UIDENT | expr
//! expr     ::= expr binop expr | prefix expr | expr POSTFIX
//!            | INT | LIDENT | UIDENT | '(' expr ')' | LIDENT '(' args ')'
//! args     ::= (arg (',' arg)*)?
//! arg      ::= expr | '~' LIDENT | '~' LIDENT '=' '?'? expr
//! type     ::= LIDENT | UIDENT | type LIDENT
//! binop    ::= INFIXOP0 | '=' < INFIXOP1 (right) < '+' | '-' | '+.' | '-.'
//! prefix   ::= '-' | '-.' | '+' | '+.' | '!'
//! ```
//!
//! Interface files only admit `let x: t` and `open` items.

mod lex;
mod node;

pub(crate) use lex::lex;
pub(crate) use machine::Reference;
pub(crate) use node::Node;

use crate::{Driver, EntryPoint, Heuristics, ParseError, Parsed};

/// A driver over the reference automaton with every heuristic enabled.
pub(crate) fn driver() -> Driver<Reference> {
    Driver::new(Reference)
}

/// Parse `src` as `entry` with the given heuristics.
pub(crate) fn parse_with(
    heuristics: Heuristics,
    entry: EntryPoint,
    src: &str,
) -> Result<Parsed<Node>, ParseError> {
    driver()
        .with_heuristics(heuristics)
        .parse(entry, 0, lex(src))
}

/// Parse `src` as `entry` with every heuristic enabled.
pub(crate) fn parse(entry: EntryPoint, src: &str) -> Result<Parsed<Node>, ParseError> {
    parse_with(Heuristics::all(), entry, src)
}

/// Render the tree for `src`, or `error@start` on failure.
pub(crate) fn tree(entry: EntryPoint, src: &str) -> String {
    match parse(entry, src) {
        Ok(parsed) => parsed.value.to_string(),
        Err(err) => format!("error@{}", err.span().start),
    }
}
