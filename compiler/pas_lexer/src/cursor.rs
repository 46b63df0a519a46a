//! Character cursor over normalized source text.
//!
//! Line terminators are normalized once at construction (`\r\n` and lone
//! `\r` become `\n`), so [`Cursor::advance`] only ever sees single-character
//! line breaks.
//!
//! # End of input
//!
//! Past the last character, [`Cursor::current`] returns [`EOF_CHAR`]. Source
//! text may itself contain `'\0'`; use [`Cursor::is_eof`] to tell the two
//! apart.

use pas_diagnostic::{Diagnostic, DiagnosticSink, ErrorCode, ErrorGuaranteed};
use pas_ir::Position;

/// Sentinel returned by [`Cursor::current`] and [`Cursor::peek`] at end of input.
pub const EOF_CHAR: char = '\0';

/// Replace `\r\n` and lone `\r` with `\n`.
pub fn normalize_line_endings(source: &str) -> String {
    if !source.contains('\r') {
        return source.to_owned();
    }
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    out
}

/// Forward-only cursor tracking the 0-based line and column of the current
/// character.
#[derive(Clone, Debug)]
pub struct Cursor {
    text: String,
    chars: Vec<char>,
    offset: usize,
    line: u32,
    column: u32,
    /// Position of the most recently consumed character.
    previous: Position,
}

impl Cursor {
    pub fn new(source: &str) -> Self {
        let text = normalize_line_endings(source);
        let chars = text.chars().collect();
        Cursor {
            text,
            chars,
            offset: 0,
            line: 0,
            column: 0,
            previous: Position::START,
        }
    }

    /// The character at the current offset, or [`EOF_CHAR`] at end of input.
    #[inline]
    pub fn current(&self) -> char {
        self.chars.get(self.offset).copied().unwrap_or(EOF_CHAR)
    }

    /// The character after the current one, or [`EOF_CHAR`].
    #[inline]
    pub fn peek(&self) -> char {
        self.chars.get(self.offset + 1).copied().unwrap_or(EOF_CHAR)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.chars.len()
    }

    /// Move one character forward. No-op at end of input.
    pub fn advance(&mut self) {
        let Some(&c) = self.chars.get(self.offset) else {
            return;
        };
        self.previous = self.position();
        self.offset += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    /// Advance while `pred` holds for the current character.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// 0-based position of the current character.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Current position, or the last character's position once past the end.
    pub fn clamped_position(&self) -> Position {
        if self.is_eof() && self.offset > 0 {
            self.previous
        } else {
            self.position()
        }
    }

    /// Character offset into the normalized text.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The normalized source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Normalized source split into lines, for the listing.
    pub fn lines(&self) -> Vec<String> {
        self.text.split('\n').map(str::to_owned).collect()
    }

    /// Record a diagnostic into `sink`.
    ///
    /// Without `at`, the current (clamped) position is used. Without
    /// `message`, the error-code table supplies one.
    pub fn record_error<S: DiagnosticSink + ?Sized>(
        &self,
        sink: &mut S,
        code: ErrorCode,
        message: Option<String>,
        at: Option<Position>,
    ) -> ErrorGuaranteed {
        let at = at.unwrap_or_else(|| self.clamped_position());
        let mut diagnostic = Diagnostic::new(code, at);
        if let Some(message) = message {
            diagnostic = diagnostic.with_message(message);
        }
        sink.report(diagnostic)
    }
}

#[cfg(test)]
mod tests;
