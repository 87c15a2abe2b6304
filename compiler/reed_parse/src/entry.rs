//! Parse goals.

use std::fmt;

/// The grammar goal an automaton is started on.
///
/// All six share the same driver; they differ only in which start state
/// the automaton is asked for.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum EntryPoint {
    /// A whole implementation file.
    Implementation,
    /// A whole interface file.
    Interface,
    /// A single expression.
    Expression,
    /// A single type expression.
    CoreType,
    /// One top-level phrase, as typed into a toplevel.
    ToplevelPhrase,
    /// A sequence of top-level phrases, as in a script.
    UseFile,
}

impl EntryPoint {
    /// Every entry point, in declaration order.
    pub const ALL: [EntryPoint; 6] = [
        EntryPoint::Implementation,
        EntryPoint::Interface,
        EntryPoint::Expression,
        EntryPoint::CoreType,
        EntryPoint::ToplevelPhrase,
        EntryPoint::UseFile,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EntryPoint::Implementation => "implementation",
            EntryPoint::Interface => "interface",
            EntryPoint::Expression => "expression",
            EntryPoint::CoreType => "core_type",
            EntryPoint::ToplevelPhrase => "toplevel_phrase",
            EntryPoint::UseFile => "use_file",
        }
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
