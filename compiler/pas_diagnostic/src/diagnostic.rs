//! The [`Diagnostic`] record and the [`DiagnosticSink`] both phases report into.

use pas_ir::Position;
use std::fmt;

use crate::{ErrorCode, ErrorGuaranteed};

/// One reported problem.
///
/// `line` and `column` are 1-based. `number` is the 1-based sequence number;
/// sinks assign it in insertion order and [`DiagnosticQueue::flush`]
/// reassigns it after sorting.
///
/// [`DiagnosticQueue::flush`]: crate::DiagnosticQueue::flush
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub line: u32,
    pub column: u32,
    pub code: ErrorCode,
    pub number: u32,
    pub message: String,
}

impl Diagnostic {
    /// Diagnostic at a 0-based source position with the table message.
    pub fn new(code: ErrorCode, at: Position) -> Self {
        let (line, column) = at.rendered();
        Diagnostic {
            line,
            column,
            code,
            number: 0,
            message: code.message().to_owned(),
        }
    }

    /// Replace the table message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// "expected `<token>`" for a specific missing token.
    pub fn expected(expected: &str, at: Position) -> Self {
        Diagnostic::new(ErrorCode::EXPECTED_TOKEN, at).with_message(format!("expected '{expected}'"))
    }

    /// The 0-based position this diagnostic points at.
    pub fn position(&self) -> Position {
        Position::new(self.line.saturating_sub(1), self.column.saturating_sub(1))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: error {}: {}",
            self.line, self.column, self.code, self.message
        )
    }
}

/// Append-only destination for diagnostics.
///
/// Owned by the caller of a compilation and lent to the scanner and then the
/// parser. Implementations must keep insertion order and must not
/// deduplicate.
pub trait DiagnosticSink {
    /// Append a diagnostic.
    fn push(&mut self, diagnostic: Diagnostic);

    /// Number of diagnostics recorded so far.
    fn error_count(&self) -> usize;

    /// Append a diagnostic and return proof that it was recorded.
    fn report(&mut self, diagnostic: Diagnostic) -> ErrorGuaranteed {
        self.push(diagnostic);
        ErrorGuaranteed::new()
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn push(&mut self, mut diagnostic: Diagnostic) {
        diagnostic.number = next_number(self.len());
        Vec::push(self, diagnostic);
    }

    fn error_count(&self) -> usize {
        self.len()
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn push(&mut self, diagnostic: Diagnostic) {
        (**self).push(diagnostic);
    }

    fn error_count(&self) -> usize {
        (**self).error_count()
    }
}

/// 1-based sequence number for the diagnostic after `len` existing ones.
pub(crate) fn next_number(len: usize) -> u32 {
    u32::try_from(len).map_or(u32::MAX, |n| n.saturating_add(1))
}

#[cfg(test)]
mod tests;
