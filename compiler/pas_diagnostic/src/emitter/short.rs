//! One line per diagnostic.

use std::io::{self, Write};

use crate::Diagnostic;

use super::DiagnosticEmitter;

/// Writes `line:column: error code: message` lines.
pub struct ShortEmitter<W: Write> {
    writer: W,
    file_path: Option<String>,
}

impl<W: Write> ShortEmitter<W> {
    pub fn new(writer: W) -> Self {
        ShortEmitter {
            writer,
            file_path: None,
        }
    }

    /// Prefix every line with `path:`.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticEmitter for ShortEmitter<W> {
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) -> io::Result<()> {
        for diagnostic in diagnostics {
            match &self.file_path {
                Some(path) => writeln!(self.writer, "{path}:{diagnostic}")?,
                None => writeln!(self.writer, "{diagnostic}")?,
            }
        }
        Ok(())
    }

    fn emit_summary(&mut self, error_count: usize) -> io::Result<()> {
        let plural = if error_count == 1 { "" } else { "s" };
        writeln!(self.writer, "{error_count} error{plural}")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
