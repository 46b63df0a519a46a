//! Diagnostic collection and reporting for the Pascal front end.
//!
//! Both phases report into a [`DiagnosticSink`] owned by the caller:
//! - the scanner for malformed lexemes (codes 2xx/3xx)
//! - the parser for grammar mismatches (codes 4xx)
//!
//! Nothing here aborts a run. A diagnostic is data; the only "error" value
//! is [`ErrorGuaranteed`], a proof that a diagnostic was recorded.
//!
//! ```text
//! let mut queue = DiagnosticQueue::new();
//! let tokens = pas_lexer::lex(source, &mut queue);
//! pas_parse::parse(&tokens, &mut queue);
//! let sorted = queue.flush();
//! ```

mod diagnostic;
pub mod emitter;
mod error_code;
mod guarantee;
pub mod queue;

pub use diagnostic::{Diagnostic, DiagnosticSink};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::DiagnosticQueue;
