//! Driver for the Pascal front end.
//!
//! [`compile`] runs the scanner and then the parser over one source text,
//! both reporting into a single [`DiagnosticQueue`], and returns the tokens
//! with the sorted, numbered diagnostics. The remaining functions move the
//! results in and out of files.

mod error;

pub use error::DriverError;

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Once;

use pas_diagnostic::emitter::{ColorMode, DiagnosticEmitter, ListingEmitter, ShortEmitter};
use pas_diagnostic::{Diagnostic, DiagnosticQueue};
use pas_ir::TokenList;
use pas_lexer::Scanner;
use pas_parse::ParseOutcome;
use tracing::debug;

/// Everything one compilation produced.
#[derive(Clone, Debug)]
pub struct Compilation {
    pub tokens: TokenList,
    /// Sorted by `(line, column)` and numbered `1..=N`.
    pub diagnostics: Vec<Diagnostic>,
    /// Normalized source lines, for the listing.
    pub lines: Vec<String>,
    pub outcome: ParseOutcome,
}

impl Compilation {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Scan and parse `source` with a fresh diagnostic queue.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn compile(source: &str) -> Compilation {
    let mut queue = DiagnosticQueue::new();

    let mut scanner = Scanner::new(source, &mut queue);
    scanner.scan_all();
    let (tokens, cursor) = scanner.into_parts();

    let outcome = pas_parse::parse(&tokens, &mut queue);
    let diagnostics = queue.flush();
    debug!(
        tokens = tokens.len(),
        diagnostics = diagnostics.len(),
        %outcome,
        "compiled"
    );

    Compilation {
        tokens,
        diagnostics,
        lines: cursor.lines(),
        outcome,
    }
}

/// Read a source file.
pub fn read_source(path: &Path) -> Result<String, DriverError> {
    fs::read_to_string(path).map_err(|e| DriverError::read_source(path, e))
}

/// Write the token file: codes separated by single spaces.
pub fn write_tokens(path: &Path, tokens: &TokenList) -> Result<(), DriverError> {
    let mut contents = tokens.render_codes();
    contents.push('\n');
    fs::write(path, contents).map_err(|source| DriverError::WriteTokens {
        path: path.to_owned(),
        source,
    })
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Source listing with carets under each error.
    #[default]
    Listing,
    /// One line per diagnostic.
    Short,
}

/// Write the diagnostics of `compilation` in `format`.
///
/// `file_path` prefixes short-format lines; the listing ignores it.
pub fn write_report<W: Write>(
    writer: W,
    compilation: &Compilation,
    format: OutputFormat,
    colors: ColorMode,
    is_tty: bool,
    file_path: Option<&str>,
) -> Result<(), DriverError> {
    let result = match format {
        OutputFormat::Listing => {
            let emitter = ListingEmitter::new(writer, &compilation.lines, colors, is_tty);
            emit(emitter, &compilation.diagnostics)
        }
        OutputFormat::Short => {
            let mut emitter = ShortEmitter::new(writer);
            if let Some(path) = file_path {
                emitter = emitter.with_file_path(path);
            }
            emit(emitter, &compilation.diagnostics)
        }
    };
    result.map_err(DriverError::WriteListing)
}

fn emit<E: DiagnosticEmitter>(mut emitter: E, diagnostics: &[Diagnostic]) -> io::Result<()> {
    emitter.emit_all(diagnostics)?;
    emitter.emit_summary(diagnostics.len())?;
    emitter.flush()
}

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, once.
///
/// Does nothing unless `RUST_LOG` is set. With `tree`, spans render as an
/// indented call tree instead of flat lines.
pub fn init_tracing(tree: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if tree {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(io::stderr),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
