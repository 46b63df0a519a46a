//! Parser tests.
//!
//! - `parser`: programs, declarations and statements, clean and broken
//! - `properties`: termination and determinism over arbitrary input


use pas_diagnostic::Diagnostic;

use crate::{parse, ParseOutcome};

/// Lex and parse `source`. The source must lex cleanly.
fn parse_source(source: &str) -> (ParseOutcome, Vec<Diagnostic>) {
    let mut lexical: Vec<Diagnostic> = Vec::new();
    let tokens = pas_lexer::lex(source, &mut lexical);
    assert!(lexical.is_empty(), "unexpected lexical diagnostics: {lexical:?}");
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let outcome = parse(&tokens, &mut diagnostics);
    (outcome, diagnostics)
}

fn codes(diagnostics: &[Diagnostic]) -> Vec<u16> {
    diagnostics.iter().map(|d| d.code.as_u16()).collect()
}

fn at(diagnostic: &Diagnostic) -> (u32, u32) {
    (diagnostic.line, diagnostic.column)
}
