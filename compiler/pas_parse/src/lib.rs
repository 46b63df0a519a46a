//! Recursive-descent parser for the Pascal subset.
//!
//! The parser validates structure only; it builds no tree. Every grammar
//! mismatch is reported into the caller's [`DiagnosticSink`] (codes 4xx)
//! and followed by panic-mode recovery (see [`recovery`]), so a single pass
//! reports as many independent problems as it can.
//!
//! Productions return `Result<(), ErrorGuaranteed>`. `Err` means a
//! diagnostic was recorded and recovery already ran; the enclosing
//! production abandons its current construct and carries on.

mod cursor;
mod grammar;
mod outcome;
pub mod recovery;

pub use cursor::Cursor;
pub use outcome::ParseOutcome;

use pas_diagnostic::{Diagnostic, DiagnosticSink, ErrorCode, ErrorGuaranteed};
use pas_ir::{TokenKind, TokenList};
use recovery::{synchronize, STATEMENT_SYNC};

/// Parser state for one token sequence.
pub struct Parser<'a, S: DiagnosticSink + ?Sized> {
    cursor: Cursor<'a>,
    sink: &'a mut S,
}

impl<'a, S: DiagnosticSink + ?Sized> Parser<'a, S> {
    pub fn new(tokens: &'a TokenList, sink: &'a mut S) -> Self {
        Parser {
            cursor: Cursor::new(tokens.as_slice()),
            sink,
        }
    }

    // Cursor delegation

    #[inline]
    fn current(&self) -> TokenKind {
        self.cursor.current()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) {
        self.cursor.advance();
    }

    /// Consume `kind`, or report "expected '<kind>'" and recover.
    fn expect(&mut self, kind: TokenKind) -> Result<(), ErrorGuaranteed> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.expected_token(kind))
        }
    }

    #[cold]
    #[inline(never)]
    fn expected_token(&mut self, kind: TokenKind) -> ErrorGuaranteed {
        let at = self.cursor.previous_position();
        let guar = self
            .sink
            .report(Diagnostic::expected(kind.display_name(), at));
        self.recover();
        guar
    }

    /// Report `code` just after the last consumed token, then recover.
    #[cold]
    fn error_after_previous(&mut self, code: ErrorCode) -> ErrorGuaranteed {
        let guar = self.report_after_previous(code);
        self.recover();
        guar
    }

    /// Report `code` at the offending current token, then recover.
    #[cold]
    fn error_at_current(&mut self, code: ErrorCode) -> ErrorGuaranteed {
        let at = self.cursor.current_position();
        let guar = self.sink.report(Diagnostic::new(code, at));
        self.recover();
        guar
    }

    /// Report `code` just after the last consumed token, without recovery.
    fn report_after_previous(&mut self, code: ErrorCode) -> ErrorGuaranteed {
        let at = self.cursor.previous_position();
        self.sink.report(Diagnostic::new(code, at))
    }

    fn recover(&mut self) {
        synchronize(&mut self.cursor, STATEMENT_SYNC);
    }
}

/// Parse a complete program.
///
/// Best effort: never fails, always terminates. Diagnostics go to `sink`
/// in the order they are found.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse<S: DiagnosticSink + ?Sized>(tokens: &TokenList, sink: &mut S) -> ParseOutcome {
    Parser::new(tokens, sink).parse_program()
}

#[cfg(test)]
mod tests;
