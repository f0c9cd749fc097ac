//! Scanner states and the mutable data carried between transitions.

use swl_ir::{DynString, Location};

use crate::LexError;

/// Which kind of string literal an escape sequence belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StrMode {
    Single,
    Multi,
}

impl StrMode {
    /// State that resumes string content after an escape sequence.
    pub fn content_state(self) -> State {
        match self {
            StrMode::Single => State::Str,
            StrMode::Multi => State::MlStr,
        }
    }
}

/// Named states of the scanner automaton.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum State {
    /// Between tokens: skips blanks, dispatches on the first character.
    Start,

    // Operators that may extend to two characters
    Less,
    Greater,
    Bang,
    Question,
    Assign,
    Minus,
    Slash,

    // Comments
    LineComment,
    BlockComment,
    /// Inside a block comment, just after `*`.
    BlockStar,
    /// Inside a block comment, just after `/`.
    BlockSlash,

    // Names
    Underscore,
    Identifier,

    // Numbers
    Int,
    /// After `digits.`
    DoubleStart,
    Double,
    /// After `e` / `E`.
    ExpStart,
    /// After the exponent sign.
    ExpSign,
    Exp,

    // Single-line strings
    /// After the opening quote.
    StrOpen,
    Str,
    /// After `""`.
    StrEmpty,

    // Multi-line strings
    /// After `"""`, expecting a line break.
    MlOpen,
    /// At the start of a content line.
    MlLineStart,
    /// One quote at the start of a line.
    MlQuote1,
    /// Two quotes at the start of a line.
    MlQuote2,
    MlStr,

    // Escape sequences
    /// After `\`.
    Escape(StrMode),
    /// After `\u`, expecting `{`.
    HexOpen(StrMode),
    /// Inside `\u{..}`.
    Hex(StrMode),
}

/// Mutable scan data, threaded by reference through [`crate::step`].
///
/// `reset_for_token` clears everything that belongs to a single token; the
/// pushback slot, the line/column counters, and the pending-newline flag
/// survive across calls.
#[derive(Clone, Debug)]
pub struct ScannerState {
    /// One byte of pushback, with the location it was read at.
    pub(crate) pushback: Option<(u8, Location)>,
    /// Text of the token under construction.
    pub buffer: DynString,
    /// Digits of the `\u{..}` escape being decoded.
    pub hex: DynString,
    /// Open block comments.
    pub comment_depth: u32,
    pub hex_digits: u8,
    /// Location of the byte being processed.
    pub current: Location,
    /// Location of the next byte read from the source.
    pub(crate) next: Location,
    /// Location of the first byte of the current token.
    pub start: Location,
    pub(crate) comment_start: Location,
    /// Set by a line break inside a block comment.
    pub newline_in_comment: bool,
    /// Non-fatal problems found during the current call.
    pub(crate) warnings: Vec<LexError>,
}

impl ScannerState {
    pub fn new() -> Self {
        ScannerState {
            pushback: None,
            buffer: DynString::new(),
            hex: DynString::new(),
            comment_depth: 0,
            hex_digits: 0,
            current: Location::START,
            next: Location::START,
            start: Location::START,
            comment_start: Location::START,
            newline_in_comment: false,
            warnings: Vec::new(),
        }
    }

    /// Clear per-token data at the start of a scan call.
    pub fn reset_for_token(&mut self) {
        self.buffer.clear();
        self.hex.clear();
        self.comment_depth = 0;
        self.hex_digits = 0;
        self.newline_in_comment = false;
    }

    /// The current byte starts the token.
    #[inline]
    pub fn mark_start(&mut self) {
        self.start = self.current;
    }
}

impl Default for ScannerState {
    fn default() -> Self {
        Self::new()
    }
}
