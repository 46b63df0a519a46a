//! Diagnostic queue: collect in insertion order, flush sorted.
//!
//! One queue per compilation. The scanner and the parser push into it in
//! turn; the driver flushes it once at the end. There is no reset, so
//! compiling another source means creating another queue.

use crate::diagnostic::next_number;
use crate::{Diagnostic, DiagnosticSink, ErrorGuaranteed};

/// Collects diagnostics for one compilation.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.push(diagnostic);
/// // ... more diagnostics, in any order
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Proof of errors, if any were recorded.
    pub fn guarantee(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.diagnostics.len())
    }

    /// Diagnostics in insertion order, numbered as they arrived.
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the queue, returning diagnostics in display order.
    ///
    /// Sorts stably by `(line, column)` and renumbers `1..=N`, replacing the
    /// insertion-order numbers.
    pub fn flush(mut self) -> Vec<Diagnostic> {
        sort_and_renumber(&mut self.diagnostics);
        self.diagnostics
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn push(&mut self, mut diagnostic: Diagnostic) {
        diagnostic.number = next_number(self.diagnostics.len());
        self.diagnostics.push(diagnostic);
    }

    fn error_count(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Stable sort by `(line, column)`, then assign sequence numbers `1..=N`.
pub fn sort_and_renumber(diagnostics: &mut [Diagnostic]) {
    diagnostics.sort_by_key(|d| (d.line, d.column));
    for (index, diagnostic) in diagnostics.iter_mut().enumerate() {
        diagnostic.number = next_number(index);
    }
}
