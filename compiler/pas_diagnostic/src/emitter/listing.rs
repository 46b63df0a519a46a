//! Annotated source listing.
//!
//! ```text
//!         begin x := end.
//! **01**            ^ error code 409
//! ****** expected identifier or number
//!
//! Compilation finished: errors - 1 !
//! ```

use std::io::{self, Write};

use crate::Diagnostic;

use super::{colors, paint, ColorMode, DiagnosticEmitter};

/// Indentation in front of every echoed source line.
const LINE_INDENT: &str = "        ";

/// Prints each source line followed by the diagnostics on that line.
pub struct ListingEmitter<'src, W: Write> {
    writer: W,
    lines: &'src [String],
    colors: bool,
}

impl<'src, W: Write> ListingEmitter<'src, W> {
    /// `lines` is the normalized source split on `\n`.
    pub fn new(writer: W, lines: &'src [String], mode: ColorMode, is_tty: bool) -> Self {
        ListingEmitter {
            writer,
            lines,
            colors: mode.should_use_colors(is_tty),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit_marker(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        let indent = " ".repeat(diagnostic.column.saturating_sub(1) as usize);
        let marker = format!("^ error code {}", diagnostic.code);
        writeln!(
            self.writer,
            "**{:02}** {indent}{}",
            diagnostic.number,
            paint(self.colors, colors::ERROR, &marker)
        )?;
        writeln!(self.writer, "****** {}", diagnostic.message)
    }
}

impl<W: Write> DiagnosticEmitter for ListingEmitter<'_, W> {
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) -> io::Result<()> {
        let lines = self.lines;
        for (index, line) in lines.iter().enumerate() {
            writeln!(self.writer, "{LINE_INDENT}{line}")?;
            let line_number = index + 1;
            for diagnostic in diagnostics
                .iter()
                .filter(|d| d.line as usize == line_number)
            {
                self.emit_marker(diagnostic)?;
            }
        }
        // Positions are clamped to the source, but never drop a diagnostic.
        for diagnostic in diagnostics
            .iter()
            .filter(|d| d.line == 0 || d.line as usize > lines.len())
        {
            self.emit_marker(diagnostic)?;
        }
        Ok(())
    }

    fn emit_summary(&mut self, error_count: usize) -> io::Result<()> {
        let summary = format!("Compilation finished: errors - {error_count} !");
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", paint(self.colors, colors::BOLD, &summary))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
