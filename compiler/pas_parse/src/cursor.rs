//! Token cursor for navigating the token stream.
//!
//! Forward-only. Past the last token the cursor reports [`TokenKind::Eof`],
//! so productions never index out of bounds.

use pas_ir::{Position, Token, TokenKind};
use tracing::trace;

/// Cursor over an immutable token slice.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Index of the current token; equals the number consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Current token kind, or `Eof` past the end.
    #[inline]
    pub fn current(&self) -> TokenKind {
        self.peek(0)
    }

    /// Kind `offset` tokens ahead of the current one.
    #[inline]
    pub fn peek(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.pos + offset)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current() == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Consume the current token. No-op at end.
    pub fn advance(&mut self) {
        if let Some(token) = self.tokens.get(self.pos) {
            trace!(kind = ?token.kind, position = %token.position, "advance");
            self.pos += 1;
        }
    }

    /// Position of the last consumed token, or the start of the source
    /// before anything was consumed.
    pub fn previous_position(&self) -> Position {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(Position::START, |t| t.position)
    }

    /// Position of the current token. Once the tokens are exhausted this is
    /// [`Cursor::previous_position`].
    pub fn current_position(&self) -> Position {
        self.tokens
            .get(self.pos)
            .map_or_else(|| self.previous_position(), |t| t.position)
    }
}

#[cfg(test)]
mod tests;
