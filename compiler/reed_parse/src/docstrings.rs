//! Doc comments found where the grammar does not accept them.
//!
//! The list is persistent: pushing returns a new list that shares its
//! prefix with the old one, so every parser state can carry its own copy
//! for the price of a reference count.

use std::fmt;
use std::rc::Rc;

use reed_diagnostic::{detached_doc_comment, Diagnostic};
use reed_ir::Span;

/// A doc comment the grammar had no place for.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct InvalidDocstring {
    pub text: String,
    pub span: Span,
}

impl InvalidDocstring {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        InvalidDocstring {
            text: text.into(),
            span,
        }
    }
}

struct Cell {
    docstring: InvalidDocstring,
    prev: Option<Rc<Cell>>,
}

/// Append-only, structurally shared list of [`InvalidDocstring`]s.
///
/// Iteration yields entries in the order they were pushed.
#[derive(Clone, Default)]
pub struct InvalidDocstrings {
    last: Option<Rc<Cell>>,
    len: usize,
}

impl InvalidDocstrings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a list with `docstring` appended. `self` is left untouched.
    #[must_use]
    pub fn with(&self, docstring: InvalidDocstring) -> Self {
        InvalidDocstrings {
            last: Some(Rc::new(Cell {
                docstring,
                prev: self.last.clone(),
            })),
            len: self.len + 1,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entries in original order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &InvalidDocstring> + ExactSizeIterator {
        let mut newest_first = Vec::with_capacity(self.len);
        let mut cursor = self.last.as_deref();
        while let Some(cell) = cursor {
            newest_first.push(&cell.docstring);
            cursor = cell.prev.as_deref();
        }
        newest_first.into_iter().rev()
    }

    pub fn to_vec(&self) -> Vec<InvalidDocstring> {
        self.iter().cloned().collect()
    }

    /// One warning per detached doc comment, in source order.
    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        self.iter().map(|doc| detached_doc_comment(doc.span)).collect()
    }
}

// Unlinks the chain iteratively; the default recursive drop would overflow
// the stack on files with very many detached comments.
impl Drop for InvalidDocstrings {
    fn drop(&mut self) {
        let mut next = self.last.take();
        while let Some(cell) = next {
            match Rc::try_unwrap(cell) {
                Ok(mut cell) => next = cell.prev.take(),
                Err(_) => break,
            }
        }
    }
}

impl PartialEq for InvalidDocstrings {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for InvalidDocstrings {}

impl fmt::Debug for InvalidDocstrings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<InvalidDocstring> for InvalidDocstrings {
    fn from_iter<I: IntoIterator<Item = InvalidDocstring>>(iter: I) -> Self {
        iter.into_iter()
            .fold(InvalidDocstrings::new(), |docs, doc| docs.with(doc))
    }
}
