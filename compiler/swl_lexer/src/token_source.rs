//! Token stream boundary between the scanner and its consumers.

use std::collections::VecDeque;

use swl_ir::{Location, Token, TokenKind};

use crate::{LexError, Scanner};

/// Anything that hands out tokens one at a time.
pub trait TokenSource {
    fn next_token(&mut self) -> Result<Token, LexError>;
}

impl TokenSource for Scanner<'_> {
    #[inline]
    fn next_token(&mut self) -> Result<Token, LexError> {
        self.scan_token()
    }
}

/// FIFO of already scanned tokens with pushback at the front.
///
/// The statement parser uses it for lookahead beyond one token: it scans
/// ahead, then pushes tokens back to replay them. An empty buffer yields
/// `Eof` at the location of the last token handed out.
#[derive(Clone, Debug, Default)]
pub struct TokenBuffer {
    tokens: VecDeque<Token>,
    last_location: Location,
}

impl TokenBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append at the back.
    pub fn push(&mut self, token: Token) {
        self.tokens.push_back(token);
    }

    /// Put a token back so it is handed out next.
    pub fn push_front(&mut self, token: Token) {
        self.tokens.push_front(token);
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.front()
    }

    pub fn pop(&mut self) -> Option<Token> {
        let token = self.tokens.pop_front()?;
        self.last_location = token.location;
        Some(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Drop every buffered token.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Scan from `source` until `n` tokens are buffered or `Eof` is buffered.
    pub fn fill_from(&mut self, source: &mut impl TokenSource, n: usize) -> Result<(), LexError> {
        while self.tokens.len() < n {
            if self.tokens.back().is_some_and(Token::is_eof) {
                break;
            }
            let token = source.next_token()?;
            self.tokens.push_back(token);
        }
        Ok(())
    }
}

impl FromIterator<Token> for TokenBuffer {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenBuffer {
            tokens: iter.into_iter().collect(),
            last_location: Location::START,
        }
    }
}

impl TokenSource for TokenBuffer {
    fn next_token(&mut self) -> Result<Token, LexError> {
        Ok(self
            .pop()
            .unwrap_or_else(|| Token::new(TokenKind::Eof, self.last_location)))
    }
}
