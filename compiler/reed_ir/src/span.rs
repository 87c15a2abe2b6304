//! Byte spans into the source file.

use std::fmt;

/// Half-open byte range `start..end`.
///
/// Two `u32` offsets; sources past 4 GiB are the lexer's problem.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-width span, used for inserted tokens and end-of-input reports.
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Slice this span by offsets relative to its start.
    ///
    /// `to = None` runs to the end. Both bounds are clamped to `self`, so a
    /// piece of a split token never reaches outside the original.
    #[inline]
    #[must_use]
    pub fn sub_span(self, from: u32, to: Option<u32>) -> Span {
        let start = self.start.saturating_add(from).min(self.end);
        let end = match to {
            Some(to) => self.start.saturating_add(to).min(self.end),
            None => self.end,
        };
        Span {
            start,
            end: end.max(start),
        }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}
