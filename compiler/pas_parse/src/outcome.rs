//! Summary of one parse.

use std::fmt;

/// What a parse got through.
///
/// Diagnostics themselves live in the sink; this only counts them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseOutcome {
    /// Tokens consumed, including those skipped by recovery.
    pub consumed: usize,
    /// Length of the token sequence.
    pub total: usize,
    /// The terminating `.` was found and consumed.
    pub reached_end: bool,
    /// Diagnostics the parser reported.
    pub diagnostics: usize,
}

impl ParseOutcome {
    /// No diagnostics and the closing `.` reached.
    pub fn is_clean(&self) -> bool {
        self.diagnostics == 0 && self.reached_end
    }

    /// Tokens left after the program's closing `.`.
    pub fn trailing(&self) -> usize {
        self.total.saturating_sub(self.consumed)
    }
}

impl fmt::Display for ParseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "consumed {}/{} tokens, {} diagnostic(s)",
            self.consumed, self.total, self.diagnostics
        )
    }
}
