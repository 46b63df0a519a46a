//! Scanner for the Pascal front end.
//!
//! [`lex`] turns source text into a [`TokenList`], reporting malformed
//! lexemes (codes 2xx/3xx) into the caller's [`DiagnosticSink`]. Keywords
//! are case-insensitive; identifiers, numbers and strings carry no lexeme
//! text, only their start position.

mod cursor;
mod keywords;
mod scanner;
mod symbols;

pub use cursor::{normalize_line_endings, Cursor, EOF_CHAR};
pub use scanner::Scanner;

use pas_diagnostic::DiagnosticSink;
use pas_ir::TokenList;
use tracing::debug;

/// Scan `source` to completion.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex<S: DiagnosticSink + ?Sized>(source: &str, sink: &mut S) -> TokenList {
    let mut scanner = Scanner::new(source, sink);
    scanner.scan_all();
    let tokens = scanner.into_tokens();
    debug!(count = tokens.len(), "scanned");
    tokens
}
