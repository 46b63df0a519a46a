//! Statements: assignments and procedure calls.

use pas_diagnostic::{DiagnosticSink, ErrorCode, ErrorGuaranteed};
use pas_ir::TokenKind;

use crate::Parser;

impl<S: DiagnosticSink + ?Sized> Parser<'_, S> {
    /// `(Ident | 'writeln') [ '[' Number ']' | '.' Ident ] [ ':=' Expression | '(' ArgList ')' ]`
    pub(crate) fn statement(&mut self) -> Result<(), ErrorGuaranteed> {
        if !matches!(self.current(), TokenKind::Ident | TokenKind::Writeln) {
            return Err(self.error_at_current(ErrorCode::EXPECTED_STATEMENT));
        }
        self.advance();

        // Selector
        match self.current() {
            TokenKind::LBracket => {
                self.advance();
                self.expect(TokenKind::Number)?;
                self.expect(TokenKind::RBracket)?;
            }
            // `.` followed by anything else is the program's closing dot.
            TokenKind::Dot if self.cursor.peek(1) == TokenKind::Ident => {
                self.advance();
                self.advance();
            }
            _ => {}
        }

        match self.current() {
            TokenKind::Assign => {
                self.advance();
                self.expression()
            }
            TokenKind::LParen => {
                self.advance();
                self.arg_list()?;
                self.expect(TokenKind::RParen)
            }
            _ => Ok(()),
        }
    }

    /// `[ Arg { ',' Arg } ]`, where `Arg := String | Expression`.
    fn arg_list(&mut self) -> Result<(), ErrorGuaranteed> {
        if self.check(TokenKind::RParen) {
            return Ok(());
        }
        loop {
            if self.check(TokenKind::String) {
                self.advance();
            } else {
                self.expression()?;
            }
            if !self.check(TokenKind::Comma) {
                return Ok(());
            }
            self.advance();
        }
    }
}
