//! Compact discriminant tag for `TokenKind`.

/// Payload-free discriminant of a `TokenKind`.
///
/// | Range | Category |
/// |-------|----------|
/// | 0-6   | Text-carrying tokens |
/// | 7-20  | Statement keywords and attribute-open |
/// | 21-33 | Punctuation and operators |
/// | 34    | End of file |
///
/// This enum is the single source of truth for discriminant values;
/// `TokenKind::discriminant_index()` and `TokenSet` both derive from it.
/// Being `Copy`, tags can be used in `const` token sets where the
/// string-carrying `TokenKind` cannot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenTag {
    // === Text-carrying (0-6) ===
    Int = 0,
    LIdent = 1,
    UIdent = 2,
    DocString = 3,
    InfixOp0 = 4,
    InfixOp1 = 5,
    Postfix = 6,

    // === Keywords (7-20) ===
    Let = 7,
    Type = 8,
    Module = 9,
    Open = 10,
    Exception = 11,
    Include = 12,
    While = 13,
    For = 14,
    If = 15,
    Switch = 16,
    Try = 17,
    Assert = 18,
    Lazy = 19,
    LBracketAt = 20,

    // === Punctuation and operators (21-33) ===
    LParen = 21,
    RParen = 22,
    Colon = 23,
    Comma = 24,
    Semi = 25,
    Tilde = 26,
    Question = 27,
    Equal = 28,
    Minus = 29,
    MinusDot = 30,
    Plus = 31,
    PlusDot = 32,
    Bang = 33,

    // === Special ===
    Eof = 34,
}

impl TokenTag {
    /// Highest discriminant value. Bitsets over tags must cover it.
    pub const MAX_DISCRIMINANT: u8 = TokenTag::Eof as u8;
}
