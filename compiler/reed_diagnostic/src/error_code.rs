//! Error codes for parse diagnostics.
//!
//! Each code is a unique identifier (e.g., `E1001`). The first letter tells
//! errors (`E`) from warnings (`W`); the first digit the phase.

use std::fmt;

/// Error codes for all parse diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Unexpected end of input
    E1002,

    // Warnings
    /// Detached doc comment
    W1001,
}

impl ErrorCode {
    /// Get the string representation of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::W1001 => "W1001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
