//! Token types for the Pascal lexer.
//!
//! Every [`TokenKind`] carries a fixed numeric code (its discriminant). The
//! codes are the token-file output format and must not be renumbered; see
//! [`TokenKind::code`].

use super::Position;
use std::fmt;

/// A token: what was scanned and where the lexeme starts.
///
/// Tokens carry no lexeme text. Two identifiers are indistinguishable apart
/// from their positions.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Token { kind, position }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.position)
    }
}

/// Token kinds for the Pascal subset.
///
/// The discriminant of each variant is its output code. `Eof` (code 0) is
/// never produced by the scanner; the parser's cursor synthesizes it past the
/// last token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    Eof = 0,

    // Generic classes
    Ident = 2,
    Number = 15,
    String = 84,

    // Symbols
    Colon = 5,
    LParen = 9,
    RParen = 10,
    LBracket = 11,
    RBracket = 12,
    Semicolon = 14,
    Equal = 16,
    Plus = 17,
    Minus = 18,
    Star = 19,
    Comma = 20,
    DotDot = 21,
    NotEqual = 38,
    Less = 39,
    LessEqual = 40,
    Greater = 41,
    GreaterEqual = 42,
    Slash = 50,
    Assign = 51,
    Dot = 61,

    // Keywords
    Case = 31,
    Else = 32,
    Goto = 33,
    Type = 34,
    With = 37,
    Then = 52,
    Until = 53,
    Do = 54,
    If = 56,
    File = 57,
    In = 100,
    Of = 101,
    Or = 102,
    To = 103,
    End = 104,
    Var = 105,
    Div = 106,
    And = 107,
    Not = 108,
    For = 109,
    Mod = 110,
    Nil = 111,
    Set = 112,
    Begin = 113,
    While = 114,
    Array = 115,
    Const = 116,
    Label = 117,
    Downto = 118,
    Packed = 119,
    Record = 120,
    Repeat = 121,
    Program = 122,
    Function = 123,
    Procedure = 124,
    Writeln = 125,

    // Built-in type names
    Integer = 126,
    Real = 127,
    Boolean = 128,
    Char = 129,
}

impl TokenKind {
    /// The numeric code written to token files.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// How the token is spelled in messages like "expected ';'".
    ///
    /// Generic classes render as their category name.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "end of file",
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Colon => ":",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Semicolon => ";",
            TokenKind::Equal => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Comma => ",",
            TokenKind::DotDot => "..",
            TokenKind::NotEqual => "<>",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Slash => "/",
            TokenKind::Assign => ":=",
            TokenKind::Dot => ".",
            TokenKind::Case => "case",
            TokenKind::Else => "else",
            TokenKind::Goto => "goto",
            TokenKind::Type => "type",
            TokenKind::With => "with",
            TokenKind::Then => "then",
            TokenKind::Until => "until",
            TokenKind::Do => "do",
            TokenKind::If => "if",
            TokenKind::File => "file",
            TokenKind::In => "in",
            TokenKind::Of => "of",
            TokenKind::Or => "or",
            TokenKind::To => "to",
            TokenKind::End => "end",
            TokenKind::Var => "var",
            TokenKind::Div => "div",
            TokenKind::And => "and",
            TokenKind::Not => "not",
            TokenKind::For => "for",
            TokenKind::Mod => "mod",
            TokenKind::Nil => "nil",
            TokenKind::Set => "set",
            TokenKind::Begin => "begin",
            TokenKind::While => "while",
            TokenKind::Array => "array",
            TokenKind::Const => "const",
            TokenKind::Label => "label",
            TokenKind::Downto => "downto",
            TokenKind::Packed => "packed",
            TokenKind::Record => "record",
            TokenKind::Repeat => "repeat",
            TokenKind::Program => "program",
            TokenKind::Function => "function",
            TokenKind::Procedure => "procedure",
            TokenKind::Writeln => "writeln",
            TokenKind::Integer => "integer",
            TokenKind::Real => "real",
            TokenKind::Boolean => "boolean",
            TokenKind::Char => "char",
        }
    }

    /// Accepted where a standard type is expected: the built-in type
    /// keywords, or a plain identifier naming a type.
    #[inline]
    pub const fn is_standard_type(self) -> bool {
        matches!(
            self,
            TokenKind::Ident
                | TokenKind::Integer
                | TokenKind::Real
                | TokenKind::Boolean
                | TokenKind::Char
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Ordered lexer output.
///
/// Stored as one sequence of `(kind, position)` pairs, so the code view and
/// the position view always have the same length.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Token kinds in source order.
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(|t| t.kind)
    }

    /// Output codes in source order.
    pub fn codes(&self) -> impl Iterator<Item = u8> + '_ {
        self.tokens.iter().map(|t| t.kind.code())
    }

    /// Lexeme start positions in source order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.tokens.iter().map(|t| t.position)
    }

    /// Codes joined by single spaces, the token-file format.
    pub fn render_codes(&self) -> String {
        let mut out = String::with_capacity(self.tokens.len() * 4);
        for (i, code) in self.codes().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&code.to_string());
        }
        out
    }
}

impl From<Vec<Token>> for TokenList {
    fn from(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
