//! Whitespace-separated word lexer for tests.
//!
//! Every word becomes one token spanning its exact byte range, and an `Eof`
//! token is appended at the end of the input. Doc comments are written
//! `/**text*/` (no spaces inside).

use reed_ir::{Span, Token, TokenKind};

fn keyword_or_punct(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "let" => TokenKind::Let,
        "type" => TokenKind::Type,
        "module" => TokenKind::Module,
        "open" => TokenKind::Open,
        "exception" => TokenKind::Exception,
        "include" => TokenKind::Include,
        "while" => TokenKind::While,
        "for" => TokenKind::For,
        "if" => TokenKind::If,
        "switch" => TokenKind::Switch,
        "try" => TokenKind::Try,
        "assert" => TokenKind::Assert,
        "lazy" => TokenKind::Lazy,
        "[@" => TokenKind::LBracketAt,
        "(" => TokenKind::LParen,
        ")" => TokenKind::RParen,
        ":" => TokenKind::Colon,
        "," => TokenKind::Comma,
        ";" => TokenKind::Semi,
        "~" => TokenKind::Tilde,
        "?" => TokenKind::Question,
        "=" => TokenKind::Equal,
        "-" => TokenKind::Minus,
        "-." => TokenKind::MinusDot,
        "+" => TokenKind::Plus,
        "+." => TokenKind::PlusDot,
        "!" => TokenKind::Bang,
        _ => return None,
    };
    Some(kind)
}

fn classify(word: &str) -> TokenKind {
    if let Some(kind) = keyword_or_punct(word) {
        return kind;
    }
    if let Some(doc) = word.strip_prefix("/**").and_then(|w| w.strip_suffix("*/")) {
        return TokenKind::DocString(doc.to_string());
    }
    let text = word.to_string();
    match word.chars().next() {
        Some(c) if c.is_ascii_digit() => TokenKind::Int(text),
        Some(c) if c.is_ascii_uppercase() => TokenKind::UIdent(text),
        Some('=' | '<' | '>' | '|' | '&' | '$') => TokenKind::InfixOp0(text),
        Some('@' | '^') => TokenKind::InfixOp1(text),
        _ => TokenKind::LIdent(text),
    }
}

fn offset(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Lex `src` into tokens, ending with `Eof`.
pub(crate) fn lex(src: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (i, c) in src.char_indices().chain(std::iter::once((src.len(), ' '))) {
        match (start, c.is_whitespace()) {
            (None, false) => start = Some(i),
            (Some(s), true) => {
                let word = &src[s..i];
                tokens.push(Token::new(classify(word), Span::new(offset(s), offset(i))));
                start = None;
            }
            _ => {}
        }
    }
    tokens.push(Token::new(TokenKind::Eof, Span::point(offset(src.len()))));
    tokens
}
