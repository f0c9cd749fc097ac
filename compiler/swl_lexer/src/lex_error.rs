//! Lexer error types.

use swl_diagnostic::{Diagnostic, ErrorCode};
use swl_ir::Location;
use thiserror::Error;

/// A lexical error and where it was detected.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} at {location}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub location: Location,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    #[error("`?` is only valid as part of `??` or a type annotation")]
    LoneQuestionMark,
    #[error("decimal point must be followed by a digit")]
    MissingFractionDigits,
    #[error("exponent must contain at least one digit")]
    MissingExponentDigits,
    #[error("integer literal does not fit in 64 bits")]
    IntegerOverflow,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("multi-line string delimiter must be followed by a line break")]
    MultilineStringStart,
    #[error("control character {0:#04x} in string literal")]
    ControlCharInString(u8),
    #[error("invalid escape sequence `\\{0}`")]
    InvalidEscape(char),
    #[error("`\\u{{..}}` escape has no hex digits")]
    EmptyHexEscape,
    #[error("`\\u{{..}}` escape has more than 8 hex digits")]
    HexEscapeTooLong,
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
}

impl LexError {
    pub fn new(kind: LexErrorKind, location: Location) -> Self {
        LexError { kind, location }
    }

    /// Lexical errors always map to exit code 1.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::Lexical
    }

    /// Render as an error diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .at(self.location)
    }
}
