//! Proof that a diagnostic was recorded.

use std::fmt;

/// Zero-sized proof that at least one diagnostic was pushed to a sink.
///
/// Only [`DiagnosticSink::report`](crate::DiagnosticSink::report) and
/// [`ErrorGuaranteed::from_error_count`] construct it, so a parser
/// production returning `Err(ErrorGuaranteed)` cannot fail silently.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    pub(crate) const fn new() -> Self {
        ErrorGuaranteed(())
    }

    /// `Some` when `count` diagnostics have already been recorded.
    pub fn from_error_count(count: usize) -> Option<Self> {
        (count > 0).then(Self::new)
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error(s) emitted")
    }
}

#[cfg(test)]
mod tests;
