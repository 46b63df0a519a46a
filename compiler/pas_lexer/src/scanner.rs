//! Single-pass scanner producing the complete token sequence.
//!
//! Malformed lexemes are reported to the sink and skipped; scanning never
//! stops before end of input. Every dispatch arm consumes at least one
//! character, so [`Scanner::scan_all`] always terminates.

use pas_diagnostic::{DiagnosticSink, ErrorCode};
use pas_ir::{Position, Token, TokenKind, TokenList};
use tracing::trace;

use crate::cursor::Cursor;
use crate::{keywords, symbols};

/// Largest integer constant the language accepts.
const MAX_INTEGER: i32 = 32_767;

/// Scanner state for one source text.
///
/// Borrows the diagnostic sink for its lifetime; the caller gets it back
/// once the scanner is consumed.
pub struct Scanner<'s, S: DiagnosticSink + ?Sized> {
    cursor: Cursor,
    sink: &'s mut S,
    tokens: TokenList,
}

impl<'s, S: DiagnosticSink + ?Sized> Scanner<'s, S> {
    pub fn new(source: &str, sink: &'s mut S) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            sink,
            tokens: TokenList::with_capacity(source.len() / 4),
        }
    }

    /// Scan until end of input.
    pub fn scan_all(&mut self) {
        while !self.cursor.is_eof() {
            self.scan_token();
        }
    }

    /// Tokens produced so far.
    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    pub fn into_tokens(self) -> TokenList {
        self.tokens
    }

    /// The cursor, for checking where scanning stopped.
    pub fn into_cursor(self) -> Cursor {
        self.cursor
    }

    /// Tokens and cursor together. The driver needs both: the tokens for
    /// parsing and the cursor for the listing's source lines.
    pub fn into_parts(self) -> (TokenList, Cursor) {
        (self.tokens, self.cursor)
    }

    fn scan_token(&mut self) {
        match self.cursor.current() {
            c if c.is_whitespace() => self.cursor.eat_while(char::is_whitespace),
            '{' => self.brace_comment(),
            '(' if self.cursor.peek() == '*' => self.paren_comment(),
            '0'..='9' => self.number(),
            '\'' => self.string(),
            c if c.is_alphabetic() => self.identifier(),
            _ => self.symbol(),
        }
    }

    fn push(&mut self, kind: TokenKind, position: Position) {
        trace!(?kind, %position, "token");
        self.tokens.push(Token::new(kind, position));
    }

    fn report(&mut self, code: ErrorCode, message: Option<String>, at: Position) {
        let _ = self.cursor.record_error(&mut *self.sink, code, message, Some(at));
    }

    // ─── Comments ───────────────────────────────────────────────────────

    /// `{ ... }`
    fn brace_comment(&mut self) {
        let start = self.cursor.position();
        self.cursor.advance();
        self.cursor.eat_while(|c| c != '}');
        if self.cursor.is_eof() {
            self.report(ErrorCode::UNTERMINATED_COMMENT, None, start);
        } else {
            self.cursor.advance();
        }
    }

    /// `(* ... *)`. The closer is matched as two separate characters.
    fn paren_comment(&mut self) {
        let start = self.cursor.position();
        self.cursor.advance();
        self.cursor.advance();
        loop {
            if self.cursor.is_eof() {
                self.report(ErrorCode::UNTERMINATED_COMMENT, None, start);
                return;
            }
            if self.cursor.current() == '*' && self.cursor.peek() == ')' {
                self.cursor.advance();
                self.cursor.advance();
                return;
            }
            self.cursor.advance();
        }
    }

    // ─── Literals ───────────────────────────────────────────────────────

    fn number(&mut self) {
        let start = self.cursor.position();
        let mut digits = String::new();
        while !self.cursor.is_eof() && self.cursor.current().is_ascii_digit() {
            digits.push(self.cursor.current());
            self.cursor.advance();
        }
        match digits.parse::<i32>() {
            Ok(value) => {
                if value > MAX_INTEGER {
                    self.report(ErrorCode::NUMBER_TOO_LARGE, None, start);
                }
                self.push(TokenKind::Number, start);
            }
            Err(_) => {
                let message = format!("integer constant {digits} cannot be represented");
                self.report(ErrorCode::NUMBER_TOO_LARGE, Some(message), start);
            }
        }
    }

    /// Quoted string. Ends at the closing quote, a line break or end of input.
    fn string(&mut self) {
        let start = self.cursor.position();
        self.cursor.advance();
        loop {
            if self.cursor.is_eof() || self.cursor.current() == '\n' {
                self.report(ErrorCode::UNTERMINATED_STRING, None, start);
                break;
            }
            let c = self.cursor.current();
            self.cursor.advance();
            if c == '\'' {
                break;
            }
        }
        self.push(TokenKind::String, start);
    }

    // ─── Words and symbols ──────────────────────────────────────────────

    fn identifier(&mut self) {
        let start = self.cursor.position();
        let mut lexeme = String::new();
        while !self.cursor.is_eof() && self.cursor.current().is_alphanumeric() {
            lexeme.push(self.cursor.current());
            self.cursor.advance();
        }
        let kind = keywords::lookup(&lexeme.to_lowercase()).unwrap_or(TokenKind::Ident);
        self.push(kind, start);
    }

    fn symbol(&mut self) {
        let start = self.cursor.position();
        let c = self.cursor.current();
        if let Some(kind) = symbols::lookup_double(c, self.cursor.peek()) {
            self.cursor.advance();
            self.cursor.advance();
            self.push(kind, start);
        } else if let Some(kind) = symbols::lookup_single(c) {
            self.cursor.advance();
            self.push(kind, start);
        } else {
            let message = format!("invalid character '{}'", c.escape_debug());
            self.report(ErrorCode::INVALID_CHARACTER, Some(message), start);
            self.cursor.advance();
        }
    }
}
