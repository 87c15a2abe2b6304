//! Structured reports for rejected input and detached docstrings.
//!
//! A parse report always points at exactly one place: the token the
//! automaton refused, the end of input, or a stray doc comment. So a
//! [`Diagnostic`] carries one [`Label`] rather than a list.

use reed_ir::{Span, TokenKind};
use std::fmt;

use crate::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        })
    }
}

/// The highlighted source location of a report.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

/// A single parse report.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub label: Label,
    /// Extra context, rendered after the label.
    pub notes: Vec<String>,
}

impl Diagnostic {
    #[cold]
    fn report(
        code: ErrorCode,
        severity: Severity,
        message: impl Into<String>,
        span: Span,
        label: impl Into<String>,
    ) -> Self {
        Diagnostic {
            code,
            severity,
            message: message.into(),
            label: Label {
                span,
                message: label.into(),
            },
            notes: Vec::new(),
        }
    }

    /// Attach a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.label.span
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;
        write!(f, "\n  --> {}: {}", self.label.span, self.label.message)?;
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        Ok(())
    }
}

/// The automaton refused `found` at `span`.
pub fn unexpected_token(span: Span, found: &TokenKind) -> Diagnostic {
    Diagnostic::report(
        ErrorCode::E1001,
        Severity::Error,
        format!("syntax error: unexpected {found}"),
        span,
        "the parser cannot continue from here",
    )
}

/// Input ended at `at` while a phrase was still open.
pub fn unexpected_eof(at: u32) -> Diagnostic {
    Diagnostic::report(
        ErrorCode::E1002,
        Severity::Error,
        "syntax error: input ended in the middle of a phrase",
        Span::point(at),
        "more input expected here",
    )
}

/// A doc comment the grammar had no slot for.
pub fn detached_doc_comment(span: Span) -> Diagnostic {
    Diagnostic::report(
        ErrorCode::W1001,
        Severity::Warning,
        "doc comment is not attached to anything",
        span,
        "this comment is ignored",
    )
    .with_note("doc comments must precede the item they document")
}
