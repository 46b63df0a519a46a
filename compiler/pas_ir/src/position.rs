//! Source positions.

use std::fmt;

/// A 0-based (line, column) location in normalized source text.
///
/// Columns count characters, not bytes. Diagnostics render both components
/// 1-based; see [`Position::rendered`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The first character of the source.
    pub const START: Position = Position { line: 0, column: 0 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// 1-based `(line, column)` as shown to the user.
    #[inline]
    pub const fn rendered(self) -> (u32, u32) {
        (self.line + 1, self.column + 1)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (line, column) = self.rendered();
        write!(f, "{line}:{column}")
    }
}
