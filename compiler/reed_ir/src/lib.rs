//! Reed IR - shared vocabulary types.
//!
//! This crate contains the small set of types every Reed crate agrees on:
//! - Spans for source locations
//! - Tokens as produced by the lexer and consumed by the parser driver
//!
//! Everything here is `Clone + Eq + Hash + Debug` so parser states that
//! embed tokens can be compared and retained freely.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::Span;
pub use token::{Token, TokenKind, TokenTag};
