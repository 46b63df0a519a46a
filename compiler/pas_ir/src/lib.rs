//! Shared data types for the Pascal front end.
//!
//! This crate holds the types every phase agrees on:
//! - [`Position`] for 0-based source locations
//! - [`TokenKind`], [`Token`] and [`TokenList`] for lexer output
//!
//! No phase logic lives here. The lexer produces a [`TokenList`], the parser
//! reads it, and the driver renders its codes.

mod position;
mod token;

pub use position::Position;
pub use token::{Token, TokenKind, TokenList};
