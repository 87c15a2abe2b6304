//! Which speculative strategies the driver may use.

use bitflags::bitflags;

bitflags! {
    /// Enabled driver heuristics.
    ///
    /// Disabling a flag skips that strategy; the priority order of the
    /// remaining ones does not change. The default enables everything.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Heuristics: u8 {
        /// Replay marker-only infix operators as postfix operators.
        const POSTFIX = 1 << 0;
        /// Divert rejected doc comments into the docstring list.
        const DOCSTRINGS = 1 << 1;
        /// Insert `;` before a rejected statement-starting token.
        const SEMICOLON = 1 << 2;
        /// Split fused `=`-prefixed label operators.
        const LABEL_SPLIT = 1 << 3;

        /// The three error-triggered recovery strategies.
        const RECOVERY = Self::DOCSTRINGS.bits() | Self::SEMICOLON.bits() | Self::LABEL_SPLIT.bits();
    }
}

impl Default for Heuristics {
    fn default() -> Self {
        Heuristics::all()
    }
}
