//! Special symbol table.
//!
//! Two-character symbols are tried before single characters, so `:=` never
//! scans as `:` followed by `=`.

use pas_ir::TokenKind;

/// Two-character symbol formed by `first` and `second`.
pub(crate) fn lookup_double(first: char, second: char) -> Option<TokenKind> {
    let kind = match (first, second) {
        ('<', '>') => TokenKind::NotEqual,
        ('<', '=') => TokenKind::LessEqual,
        ('>', '=') => TokenKind::GreaterEqual,
        (':', '=') => TokenKind::Assign,
        ('.', '.') => TokenKind::DotDot,
        _ => return None,
    };
    Some(kind)
}

/// Single-character symbol.
pub(crate) fn lookup_single(c: char) -> Option<TokenKind> {
    let kind = match c {
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Star,
        '/' => TokenKind::Slash,
        '=' => TokenKind::Equal,
        '<' => TokenKind::Less,
        '>' => TokenKind::Greater,
        ':' => TokenKind::Colon,
        '.' => TokenKind::Dot,
        ';' => TokenKind::Semicolon,
        ',' => TokenKind::Comma,
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '[' => TokenKind::LBracket,
        ']' => TokenKind::RBracket,
        _ => return None,
    };
    Some(kind)
}
