//! Diagnostic emitters.
//!
//! - [`ListingEmitter`]: the source listing with numbered carets under each
//!   offending column, followed by a summary line.
//! - [`ShortEmitter`]: one `line:column: error code: message` line per
//!   diagnostic, for tooling and logs.
//!
//! Emitters expect diagnostics already flushed from a
//! [`DiagnosticQueue`](crate::DiagnosticQueue), i.e. sorted and numbered.

mod listing;
mod short;

pub use listing::ListingEmitter;
pub use short::ShortEmitter;

use std::io;

use crate::Diagnostic;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for [`ColorMode::Auto`].
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Output format for a batch of diagnostics.
pub trait DiagnosticEmitter {
    /// Emit every diagnostic, in the order given.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) -> io::Result<()>;

    /// Emit the closing summary.
    fn emit_summary(&mut self, error_count: usize) -> io::Result<()>;

    /// Flush buffered output.
    fn flush(&mut self) -> io::Result<()>;
}

/// Wrap `text` in `color` when colors are enabled.
fn paint(colors: bool, color: &str, text: &str) -> String {
    if colors {
        format!("{color}{text}{}", colors::RESET)
    } else {
        text.to_owned()
    }
}

#[cfg(test)]
mod tests;
