//! Diagnostic system for parse reports.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes (what the driver tried before giving up)

mod diagnostic;
mod error_code;

pub use diagnostic::{
    detached_doc_comment, unexpected_eof, unexpected_token, Diagnostic, Label, Severity,
};
pub use error_code::ErrorCode;
