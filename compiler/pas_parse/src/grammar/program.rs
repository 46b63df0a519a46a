//! Program structure: header, declaration sections, body, final `.`.

use pas_diagnostic::{DiagnosticSink, ErrorCode, ErrorGuaranteed};
use pas_ir::TokenKind;
use tracing::debug;

use crate::{ParseOutcome, Parser};

impl<S: DiagnosticSink + ?Sized> Parser<'_, S> {
    /// Parse the whole token sequence as one program.
    pub fn parse_program(mut self) -> ParseOutcome {
        let before = self.sink.error_count();

        if self.check(TokenKind::Program) {
            let _ = self.program_header();
        }
        self.declaration_sections();

        if self.check(TokenKind::Begin) {
            let _ = self.compound_statement();
        } else {
            let _ = self.error_after_previous(ErrorCode::EXPECTED_BEGIN);
            // Recovery stops before a body's closing `end`.
            if self.check(TokenKind::End) {
                self.advance();
            }
        }

        let reached_end = if self.check(TokenKind::Dot) {
            self.advance();
            true
        } else {
            let _ = self.report_after_previous(ErrorCode::EXPECTED_DOT);
            false
        };

        let outcome = ParseOutcome {
            consumed: self.cursor.position(),
            total: self.cursor.token_count(),
            reached_end,
            diagnostics: self.sink.error_count().saturating_sub(before),
        };
        debug!(%outcome, "parsed program");
        outcome
    }

    /// `'program' Ident ';'`
    fn program_header(&mut self) -> Result<(), ErrorGuaranteed> {
        self.advance();
        if !self.check(TokenKind::Ident) {
            return Err(self.error_after_previous(ErrorCode::EXPECTED_PROGRAM_NAME));
        }
        self.advance();
        self.expect(TokenKind::Semicolon)
    }

    /// `{ VarSection | ConstSection }`
    fn declaration_sections(&mut self) {
        loop {
            match self.current() {
                TokenKind::Var => self.var_section(),
                TokenKind::Const => self.const_section(),
                _ => return,
            }
        }
    }

    /// `'begin' { Statement [';'] } 'end'`
    ///
    /// A lone `;` is an empty statement. The loop stops at `end`, `.` or the
    /// end of the tokens, so every iteration consumes something.
    fn compound_statement(&mut self) -> Result<(), ErrorGuaranteed> {
        self.advance();
        while !matches!(
            self.current(),
            TokenKind::End | TokenKind::Dot | TokenKind::Eof
        ) {
            if self.check(TokenKind::Semicolon) {
                self.advance();
                continue;
            }
            let _ = self.statement();
            if self.check(TokenKind::Semicolon) {
                self.advance();
            }
        }
        if self.check(TokenKind::End) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_after_previous(ErrorCode::EXPECTED_END))
        }
    }
}
