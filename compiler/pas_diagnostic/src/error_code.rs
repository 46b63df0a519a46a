//! Error codes and their default messages.
//!
//! Codes are grouped by phase:
//! - 2xx/3xx: lexical errors (malformed lexemes)
//! - 4xx: syntactic errors (grammar mismatches)
//!
//! Any `u16` is a valid code. Codes missing from the table render the generic
//! [`UNKNOWN_MESSAGE`].

use std::fmt;

/// Message for codes absent from the table.
pub const UNKNOWN_MESSAGE: &str = "unknown error";

/// Numeric diagnostic code.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ErrorCode(u16);

impl ErrorCode {
    // Lexical errors
    /// Integer literal above 32767, or not representable at all.
    pub const NUMBER_TOO_LARGE: ErrorCode = ErrorCode(203);
    /// String literal not closed before end of line or input.
    pub const UNTERMINATED_STRING: ErrorCode = ErrorCode(301);
    /// Character outside the symbol table.
    pub const INVALID_CHARACTER: ErrorCode = ErrorCode(302);
    /// `{` or `(*` comment without its closer.
    pub const UNTERMINATED_COMMENT: ErrorCode = ErrorCode(304);

    // Syntactic errors
    /// `program` not followed by a name.
    pub const EXPECTED_PROGRAM_NAME: ErrorCode = ErrorCode(401);
    /// Declarations not followed by `begin`.
    pub const EXPECTED_BEGIN: ErrorCode = ErrorCode(402);
    /// Program body not followed by `.`.
    pub const EXPECTED_DOT: ErrorCode = ErrorCode(403);
    /// A specific token was expected; the message names it.
    pub const EXPECTED_TOKEN: ErrorCode = ErrorCode(404);
    /// Declaration type is not array, record or a standard type.
    pub const EXPECTED_TYPE: ErrorCode = ErrorCode(405);
    /// Array element type is not a standard type.
    pub const EXPECTED_STANDARD_TYPE: ErrorCode = ErrorCode(406);
    /// Record fields not closed by `end`.
    pub const EXPECTED_RECORD_END: ErrorCode = ErrorCode(407);
    /// Compound statement not closed by `end`.
    pub const EXPECTED_END: ErrorCode = ErrorCode(408);
    /// Expression term is neither identifier nor number.
    pub const EXPECTED_OPERAND: ErrorCode = ErrorCode(409);
    /// Token cannot start a statement.
    pub const EXPECTED_STATEMENT: ErrorCode = ErrorCode(410);

    #[inline]
    pub const fn new(code: u16) -> Self {
        ErrorCode(code)
    }

    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Table message for this code, if the code is known.
    pub fn default_message(self) -> Option<&'static str> {
        let message = match self {
            ErrorCode::NUMBER_TOO_LARGE => "integer constant exceeds the allowed range",
            ErrorCode::UNTERMINATED_STRING => "unterminated string",
            ErrorCode::INVALID_CHARACTER => "invalid character",
            ErrorCode::UNTERMINATED_COMMENT => "unterminated comment",
            ErrorCode::EXPECTED_PROGRAM_NAME => "expected program name",
            ErrorCode::EXPECTED_BEGIN => "expected 'begin'",
            ErrorCode::EXPECTED_DOT => "expected '.' at end of program",
            ErrorCode::EXPECTED_TOKEN => "expected token",
            ErrorCode::EXPECTED_TYPE => "expected type",
            ErrorCode::EXPECTED_STANDARD_TYPE => "expected standard type",
            ErrorCode::EXPECTED_RECORD_END => "expected 'end' closing record",
            ErrorCode::EXPECTED_END => "expected 'end'",
            ErrorCode::EXPECTED_OPERAND => "expected identifier or number",
            ErrorCode::EXPECTED_STATEMENT => "expected statement",
            _ => return None,
        };
        Some(message)
    }

    /// Table message, or [`UNKNOWN_MESSAGE`] for unknown codes.
    pub fn message(self) -> &'static str {
        self.default_message().unwrap_or(UNKNOWN_MESSAGE)
    }

    pub fn is_lexical(self) -> bool {
        (200..400).contains(&self.0)
    }

    pub fn is_syntactic(self) -> bool {
        (400..500).contains(&self.0)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for ErrorCode {
    fn from(code: u16) -> Self {
        ErrorCode(code)
    }
}
