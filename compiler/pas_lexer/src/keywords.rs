//! Reserved word table.
//!
//! Lookup expects already-lowercased text. Length bucketing rejects most
//! identifiers before any string comparison (keywords are 2-9 chars).

use pas_ir::TokenKind;

/// Look up a lowercased identifier. `None` means a plain identifier.
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let kind = match text.len() {
        2 => match text {
            "do" => TokenKind::Do,
            "if" => TokenKind::If,
            "in" => TokenKind::In,
            "of" => TokenKind::Of,
            "or" => TokenKind::Or,
            "to" => TokenKind::To,
            _ => return None,
        },
        3 => match text {
            "and" => TokenKind::And,
            "div" => TokenKind::Div,
            "end" => TokenKind::End,
            "for" => TokenKind::For,
            "mod" => TokenKind::Mod,
            "nil" => TokenKind::Nil,
            "not" => TokenKind::Not,
            "set" => TokenKind::Set,
            "var" => TokenKind::Var,
            _ => return None,
        },
        4 => match text {
            "case" => TokenKind::Case,
            "char" => TokenKind::Char,
            "else" => TokenKind::Else,
            "file" => TokenKind::File,
            "goto" => TokenKind::Goto,
            "real" => TokenKind::Real,
            "then" => TokenKind::Then,
            "type" => TokenKind::Type,
            "with" => TokenKind::With,
            _ => return None,
        },
        5 => match text {
            "array" => TokenKind::Array,
            "begin" => TokenKind::Begin,
            "const" => TokenKind::Const,
            "label" => TokenKind::Label,
            "until" => TokenKind::Until,
            "while" => TokenKind::While,
            _ => return None,
        },
        6 => match text {
            "downto" => TokenKind::Downto,
            "packed" => TokenKind::Packed,
            "record" => TokenKind::Record,
            "repeat" => TokenKind::Repeat,
            _ => return None,
        },
        7 => match text {
            "boolean" => TokenKind::Boolean,
            "integer" => TokenKind::Integer,
            "program" => TokenKind::Program,
            "writeln" => TokenKind::Writeln,
            _ => return None,
        },
        8 => match text {
            "function" => TokenKind::Function,
            _ => return None,
        },
        9 => match text {
            "procedure" => TokenKind::Procedure,
            _ => return None,
        },
        _ => return None,
    };
    Some(kind)
}
