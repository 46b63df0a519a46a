//! Flat arithmetic expressions.
//!
//! No precedence: operators only separate operands, since nothing is
//! evaluated.

use pas_diagnostic::{DiagnosticSink, ErrorCode, ErrorGuaranteed};
use pas_ir::TokenKind;

use crate::Parser;

impl<S: DiagnosticSink + ?Sized> Parser<'_, S> {
    /// `Term { ('+' | '-' | '*' | '/') Term }`
    pub(crate) fn expression(&mut self) -> Result<(), ErrorGuaranteed> {
        self.term()?;
        while matches!(
            self.current(),
            TokenKind::Plus | TokenKind::Minus | TokenKind::Star | TokenKind::Slash
        ) {
            self.advance();
            self.term()?;
        }
        Ok(())
    }

    /// `Ident | Number`
    fn term(&mut self) -> Result<(), ErrorGuaranteed> {
        if matches!(self.current(), TokenKind::Ident | TokenKind::Number) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_at_current(ErrorCode::EXPECTED_OPERAND))
        }
    }
}
