//! Token-at-a-time scanner driving the automaton over a byte source.

use swl_diagnostic::{Diagnostic, DiagnosticQueue};
use swl_ir::{Location, Token, TokenKind};
use tracing::trace;

use crate::state::{ScannerState, State};
use crate::transition::{step, Step};
use crate::LexError;

/// Pull-based scanner over a fully buffered source.
pub struct Scanner<'src> {
    source: &'src [u8],
    pos: usize,
    state: ScannerState,
    /// A line break was seen since the last non-`Eol` token.
    pending_eol: bool,
    warnings: DiagnosticQueue,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src [u8]) -> Self {
        Scanner {
            source,
            pos: 0,
            state: ScannerState::new(),
            pending_eol: false,
            warnings: DiagnosticQueue::new(),
        }
    }

    /// Scan the next token.
    ///
    /// After the source is exhausted every call returns `Eof`. A lexical
    /// error aborts only the current call; scanning may resume afterwards.
    pub fn scan_token(&mut self) -> Result<Token, LexError> {
        self.state.reset_for_token();
        let mut current = State::Start;
        loop {
            let c = self.read();
            match step(current, c, &mut self.state) {
                Step::Next(next) => current = next,
                Step::Accept { kind, unread } => {
                    if unread {
                        self.unread(c);
                    }
                    self.drain_warnings();
                    return Ok(self.finish(kind));
                }
                Step::Reject { kind, unread } => {
                    let location = self.state.current;
                    if unread {
                        self.unread(c);
                    }
                    self.drain_warnings();
                    trace!(?kind, %location, "lexical error");
                    return Err(LexError::new(kind, location));
                }
            }
        }
    }

    /// Iterate over tokens up to and including `Eof`, or up to the first error.
    pub fn tokens(&mut self) -> Tokens<'_, 'src> {
        Tokens {
            scanner: self,
            done: false,
        }
    }

    /// Non-fatal diagnostics (unterminated block comments) seen so far.
    pub fn warnings(&self) -> &DiagnosticQueue {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<Diagnostic> {
        self.warnings.flush()
    }

    /// Location of the next unread byte.
    pub fn location(&self) -> Location {
        match self.state.pushback {
            Some((_, location)) => location,
            None => self.state.next,
        }
    }

    fn read(&mut self) -> Option<u8> {
        if let Some((c, location)) = self.state.pushback.take() {
            self.state.current = location;
            return Some(c);
        }
        self.state.current = self.state.next;
        let c = self.source.get(self.pos).copied()?;
        self.pos += 1;
        if c == b'\n' {
            self.state.next.line += 1;
            self.state.next.column = 1;
        } else {
            self.state.next.column += 1;
        }
        Some(c)
    }

    fn unread(&mut self, c: Option<u8>) {
        if let Some(c) = c {
            self.state.pushback = Some((c, self.state.current));
        }
    }

    fn finish(&mut self, kind: TokenKind) -> Token {
        if self.state.newline_in_comment {
            self.pending_eol = true;
        }
        let is_eol = matches!(kind, TokenKind::Eol);
        let token = Token::new(kind, self.state.start).with_preceding_eol(self.pending_eol);
        self.pending_eol = is_eol;
        trace!(?token, "scanned");
        token
    }

    fn drain_warnings(&mut self) {
        for warning in self.state.warnings.drain(..) {
            let diag = Diagnostic::warning(warning.code())
                .with_message(warning.kind.to_string())
                .at(warning.location);
            self.warnings.add(diag);
        }
    }
}

/// Iterator returned by [`Scanner::tokens`].
pub struct Tokens<'s, 'src> {
    scanner: &'s mut Scanner<'src>,
    done: bool,
}

impl Iterator for Tokens<'_, '_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.scanner.scan_token();
        self.done = !matches!(&result, Ok(token) if !token.is_eof());
        Some(result)
    }
}
