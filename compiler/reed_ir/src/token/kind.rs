//! Token kinds.

use std::fmt;

use super::tag::TokenTag;

/// Token kinds the driver and its automata understand.
///
/// Payload-carrying variants keep their source text: operator tokens are
/// re-split by the recovery heuristics, so the text must survive lexing.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Integer literal, kept as written.
    Int(String),
    /// Lowercase identifier.
    LIdent(String),
    /// Capitalised identifier (modules, constructors).
    UIdent(String),
    /// Documentation comment.
    DocString(String),
    /// Infix operator starting with `=`, `<`, `>`, `|`, `&`, `$`.
    InfixOp0(String),
    /// Infix operator starting with `@` or `^`. Right associative.
    InfixOp1(String),
    /// Postfix operator. Never produced by the lexer, only synthesised by
    /// the postfix disambiguator.
    Postfix(String),

    Let,
    Type,
    Module,
    Open,
    Exception,
    Include,
    While,
    For,
    If,
    Switch,
    Try,
    Assert,
    Lazy,

    LBracketAt, // [@
    LParen,     // (
    RParen,     // )
    Colon,      // :
    Comma,      // ,
    Semi,       // ;
    Tilde,      // ~
    Question,   // ?
    Equal,      // =
    Minus,      // -
    MinusDot,   // -.
    Plus,       // +
    PlusDot,    // +.
    Bang,       // !

    Eof,
}

impl TokenKind {
    /// Payload-free discriminant tag.
    #[inline]
    pub const fn tag(&self) -> TokenTag {
        match self {
            TokenKind::Int(_) => TokenTag::Int,
            TokenKind::LIdent(_) => TokenTag::LIdent,
            TokenKind::UIdent(_) => TokenTag::UIdent,
            TokenKind::DocString(_) => TokenTag::DocString,
            TokenKind::InfixOp0(_) => TokenTag::InfixOp0,
            TokenKind::InfixOp1(_) => TokenTag::InfixOp1,
            TokenKind::Postfix(_) => TokenTag::Postfix,
            TokenKind::Let => TokenTag::Let,
            TokenKind::Type => TokenTag::Type,
            TokenKind::Module => TokenTag::Module,
            TokenKind::Open => TokenTag::Open,
            TokenKind::Exception => TokenTag::Exception,
            TokenKind::Include => TokenTag::Include,
            TokenKind::While => TokenTag::While,
            TokenKind::For => TokenTag::For,
            TokenKind::If => TokenTag::If,
            TokenKind::Switch => TokenTag::Switch,
            TokenKind::Try => TokenTag::Try,
            TokenKind::Assert => TokenTag::Assert,
            TokenKind::Lazy => TokenTag::Lazy,
            TokenKind::LBracketAt => TokenTag::LBracketAt,
            TokenKind::LParen => TokenTag::LParen,
            TokenKind::RParen => TokenTag::RParen,
            TokenKind::Colon => TokenTag::Colon,
            TokenKind::Comma => TokenTag::Comma,
            TokenKind::Semi => TokenTag::Semi,
            TokenKind::Tilde => TokenTag::Tilde,
            TokenKind::Question => TokenTag::Question,
            TokenKind::Equal => TokenTag::Equal,
            TokenKind::Minus => TokenTag::Minus,
            TokenKind::MinusDot => TokenTag::MinusDot,
            TokenKind::Plus => TokenTag::Plus,
            TokenKind::PlusDot => TokenTag::PlusDot,
            TokenKind::Bang => TokenTag::Bang,
            TokenKind::Eof => TokenTag::Eof,
        }
    }

    /// Stable discriminant index, ignoring payloads.
    ///
    /// Used by `TokenSet` for O(1) membership tests.
    #[inline]
    pub const fn discriminant_index(&self) -> u8 {
        self.tag() as u8
    }

    /// Source text carried by the token, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            TokenKind::Int(s)
            | TokenKind::LIdent(s)
            | TokenKind::UIdent(s)
            | TokenKind::DocString(s)
            | TokenKind::InfixOp0(s)
            | TokenKind::InfixOp1(s)
            | TokenKind::Postfix(s) => Some(s),
            _ => None,
        }
    }

    /// Human-readable name for error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Int(_) => "integer",
            TokenKind::LIdent(_) => "identifier",
            TokenKind::UIdent(_) => "capitalised identifier",
            TokenKind::DocString(_) => "doc comment",
            TokenKind::InfixOp0(_) | TokenKind::InfixOp1(_) => "infix operator",
            TokenKind::Postfix(_) => "postfix operator",
            TokenKind::Let => "let",
            TokenKind::Type => "type",
            TokenKind::Module => "module",
            TokenKind::Open => "open",
            TokenKind::Exception => "exception",
            TokenKind::Include => "include",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::If => "if",
            TokenKind::Switch => "switch",
            TokenKind::Try => "try",
            TokenKind::Assert => "assert",
            TokenKind::Lazy => "lazy",
            TokenKind::LBracketAt => "[@",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Semi => ";",
            TokenKind::Tilde => "~",
            TokenKind::Question => "?",
            TokenKind::Equal => "=",
            TokenKind::Minus => "-",
            TokenKind::MinusDot => "-.",
            TokenKind::Plus => "+",
            TokenKind::PlusDot => "+.",
            TokenKind::Bang => "!",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(s) => write!(f, "Int({s})"),
            TokenKind::LIdent(s) => write!(f, "LIdent({s:?})"),
            TokenKind::UIdent(s) => write!(f, "UIdent({s:?})"),
            TokenKind::DocString(s) => write!(f, "DocString({s:?})"),
            TokenKind::InfixOp0(s) => write!(f, "InfixOp0({s:?})"),
            TokenKind::InfixOp1(s) => write!(f, "InfixOp1({s:?})"),
            TokenKind::Postfix(s) => write!(f, "Postfix({s:?})"),
            _ => write!(f, "{}", self.display_name()),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text() {
            Some(text) => write!(f, "`{text}`"),
            None => write!(f, "`{}`", self.display_name()),
        }
    }
}
