//! `var` and `const` sections and the types they declare.

use pas_diagnostic::{DiagnosticSink, ErrorCode, ErrorGuaranteed};
use pas_ir::TokenKind;

use crate::Parser;

impl<S: DiagnosticSink + ?Sized> Parser<'_, S> {
    /// `'var' { IdentList ':' Type ';' }`
    pub(crate) fn var_section(&mut self) {
        self.advance();
        while self.check(TokenKind::Ident) {
            let _ = self.var_declaration();
        }
    }

    fn var_declaration(&mut self) -> Result<(), ErrorGuaranteed> {
        self.ident_list()?;
        self.expect(TokenKind::Colon)?;
        self.type_spec()?;
        self.expect(TokenKind::Semicolon)
    }

    /// `'const' { Ident '=' Number ';' }`
    pub(crate) fn const_section(&mut self) {
        self.advance();
        while self.check(TokenKind::Ident) {
            let _ = self.const_declaration();
        }
    }

    fn const_declaration(&mut self) -> Result<(), ErrorGuaranteed> {
        self.advance();
        self.expect(TokenKind::Equal)?;
        self.expect(TokenKind::Number)?;
        self.expect(TokenKind::Semicolon)
    }

    /// `Ident { ',' Ident }`
    fn ident_list(&mut self) -> Result<(), ErrorGuaranteed> {
        self.expect(TokenKind::Ident)?;
        while self.check(TokenKind::Comma) {
            self.advance();
            self.expect(TokenKind::Ident)?;
        }
        Ok(())
    }

    /// `ArrayType | RecordType | StandardType`
    fn type_spec(&mut self) -> Result<(), ErrorGuaranteed> {
        match self.current() {
            TokenKind::Array => self.array_type(),
            TokenKind::Record => self.record_type(),
            kind if kind.is_standard_type() => {
                self.advance();
                Ok(())
            }
            _ => Err(self.error_at_current(ErrorCode::EXPECTED_TYPE)),
        }
    }

    /// `'array' '[' Number '..' Number ']' 'of' StandardType`
    fn array_type(&mut self) -> Result<(), ErrorGuaranteed> {
        self.advance();
        self.expect(TokenKind::LBracket)?;
        self.expect(TokenKind::Number)?;
        self.expect(TokenKind::DotDot)?;
        self.expect(TokenKind::Number)?;
        self.expect(TokenKind::RBracket)?;
        self.expect(TokenKind::Of)?;
        self.standard_type()
    }

    /// `'record' { IdentList ':' StandardType ';' } 'end'`
    fn record_type(&mut self) -> Result<(), ErrorGuaranteed> {
        self.advance();
        while self.check(TokenKind::Ident) {
            let _ = self.field_declaration();
        }
        if self.check(TokenKind::End) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_after_previous(ErrorCode::EXPECTED_RECORD_END))
        }
    }

    fn field_declaration(&mut self) -> Result<(), ErrorGuaranteed> {
        self.ident_list()?;
        self.expect(TokenKind::Colon)?;
        self.standard_type()?;
        self.expect(TokenKind::Semicolon)
    }

    fn standard_type(&mut self) -> Result<(), ErrorGuaranteed> {
        if self.current().is_standard_type() {
            self.advance();
            Ok(())
        } else {
            Err(self.error_at_current(ErrorCode::EXPECTED_STANDARD_TYPE))
        }
    }
}
