//! Error recovery for the parser.
//!
//! Panic mode: after a mismatch, skip tokens until a synchronization token
//! and resume the enclosing construct from there. Membership tests use a
//! bitset keyed by token code.

use super::cursor::Cursor;
use pas_ir::TokenKind;
use tracing::debug;

/// A set of token kinds with O(1) membership testing.
///
/// Bits are indexed by [`TokenKind::code`]. Codes run past 127, so the set
/// spans two words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet {
    low: u128,
    high: u128,
}

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        TokenSet { low: 0, high: 0 }
    }

    /// Add a token kind (builder for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        let code = kind.code();
        if code < 128 {
            TokenSet {
                low: self.low | (1u128 << code),
                high: self.high,
            }
        } else {
            TokenSet {
                low: self.low,
                high: self.high | (1u128 << (code - 128)),
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        TokenSet {
            low: self.low | other.low,
            high: self.high | other.high,
        }
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        let code = kind.code();
        if code < 128 {
            (self.low & (1u128 << code)) != 0
        } else {
            (self.high & (1u128 << (code - 128))) != 0
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.low == 0 && self.high == 0
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.low.count_ones() + self.high.count_ones()
    }
}

/// Statement and declaration terminators.
pub const STATEMENT_SYNC: TokenSet = TokenSet::new()
    .with(TokenKind::Semicolon)
    .with(TokenKind::End)
    .with(TokenKind::Dot);

/// Skip to the next token in `recovery`, consuming it if it is `;`.
///
/// Returns `true` if a recovery token was found, `false` if the tokens ran
/// out first.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> bool {
    let start = cursor.position();
    while !cursor.is_at_end() {
        let kind = cursor.current();
        if recovery.contains(kind) {
            if kind == TokenKind::Semicolon {
                cursor.advance();
            }
            debug!(skipped = cursor.position() - start, stop = ?kind, "synchronized");
            return true;
        }
        cursor.advance();
    }
    debug!(skipped = cursor.position() - start, "synchronize reached end of tokens");
    false
}
