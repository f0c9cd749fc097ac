//! Token types produced by the scanner.

mod kind;

pub use kind::{BaseType, Keyword, Operator, TokenKind};

use std::fmt;

use crate::Location;

/// A token with the position of its first character.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Set when at least one line break separates this token from the previous one.
    pub preceded_by_eol: bool,
    pub location: Location,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, location: Location) -> Self {
        Token {
            kind,
            preceded_by_eol: false,
            location,
        }
    }

    /// Create a token at the start of the file, for tests and generated input.
    pub fn dummy(kind: TokenKind) -> Self {
        Token::new(kind, Location::START)
    }

    #[must_use]
    pub fn with_preceding_eol(mut self, preceded_by_eol: bool) -> Self {
        self.preceded_by_eol = preceded_by_eol;
        self
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    #[inline]
    pub fn is_operator(&self, op: Operator) -> bool {
        matches!(self.kind, TokenKind::Operator(o) if o == op)
    }

    #[inline]
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self.kind, TokenKind::Keyword(k) if k == kw)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.preceded_by_eol {
            write!(f, "{:?} @ {} (after newline)", self.kind, self.location)
        } else {
            write!(f, "{:?} @ {}", self.kind, self.location)
        }
    }
}

#[cfg(test)]
mod tests;
