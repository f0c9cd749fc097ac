//! Swiftlet lexer.
//!
//! The scanner reads one byte at a time and walks a finite state machine
//! until a state accepts a token or rejects the input. The machine is an
//! enum ([`State`]) plus a single transition function ([`step`]); all
//! mutable scan data lives in an explicit [`ScannerState`].
//!
//! # Usage
//!
//! ```text
//! let mut scanner = Scanner::new(b"let x = 1 + 2.5e3\n");
//! while let Ok(token) = scanner.scan_token() {
//!     if token.is_eof() { break; }
//! }
//! ```

mod escape;
mod lex_error;
mod scanner;
mod state;
mod token_source;
mod transition;

pub use escape::decode_hex_escape;
pub use lex_error::{LexError, LexErrorKind};
pub use scanner::{Scanner, Tokens};
pub use state::{ScannerState, State, StrMode};
pub use token_source::{TokenBuffer, TokenSource};
pub use transition::{step, Step};

use swl_ir::Token;

/// Scan a whole source text, stopping at the first lexical error.
///
/// The returned list ends with an `Eof` token.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Scanner::new(source.as_bytes()).tokens().collect()
}
