//! The scanner's transition function.
//!
//! [`step`] consumes one input byte (`None` at end of input) in a given
//! [`State`] and decides what happens next. It never reads input itself:
//! the driving loop in [`crate::Scanner`] feeds bytes and honours the
//! `unread` requests.

use swl_ir::{BaseType, Keyword, Operator, TokenKind};

use crate::escape::{decode_hex_escape, simple_escape};
use crate::state::{ScannerState, State, StrMode};
use crate::{LexError, LexErrorKind};

/// Result of feeding one byte to the automaton.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// The byte was consumed; continue in the given state.
    Next(State),
    /// A final state was reached. When `unread` is set the byte that
    /// terminated the token is pushed back for the next call.
    Accept { kind: TokenKind, unread: bool },
    /// Dead end: the input is not a valid token.
    Reject { kind: LexErrorKind, unread: bool },
}

#[inline]
fn accept(kind: TokenKind) -> Step {
    Step::Accept {
        kind,
        unread: false,
    }
}

#[inline]
fn accept_before(kind: TokenKind) -> Step {
    Step::Accept { kind, unread: true }
}

#[inline]
fn op(o: Operator) -> TokenKind {
    TokenKind::Operator(o)
}

#[inline]
fn reject(kind: LexErrorKind) -> Step {
    Step::Reject {
        kind,
        unread: false,
    }
}

#[inline]
fn is_ident_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// Feed one byte to the automaton.
pub fn step(state: State, c: Option<u8>, ctx: &mut ScannerState) -> Step {
    match state {
        State::Start => start(c, ctx),

        // ─── Operators ───────────────────────────────────────────────

        State::Less => match c {
            Some(b'=') => accept(op(Operator::Le)),
            _ => accept_before(op(Operator::Lt)),
        },
        State::Greater => match c {
            Some(b'=') => accept(op(Operator::Ge)),
            _ => accept_before(op(Operator::Gt)),
        },
        State::Bang => match c {
            Some(b'=') => accept(op(Operator::Ne)),
            _ => accept_before(op(Operator::Not)),
        },
        State::Assign => match c {
            Some(b'=') => accept(op(Operator::Eq)),
            _ => accept_before(op(Operator::Assign)),
        },
        State::Minus => match c {
            Some(b'>') => accept(op(Operator::Arrow)),
            _ => accept_before(op(Operator::Minus)),
        },
        State::Question => match c {
            Some(b'?') => accept(op(Operator::NilCoalesce)),
            _ => Step::Reject {
                kind: LexErrorKind::LoneQuestionMark,
                unread: true,
            },
        },
        State::Slash => match c {
            Some(b'/') => Step::Next(State::LineComment),
            Some(b'*') => {
                ctx.comment_depth = 1;
                ctx.comment_start = ctx.start;
                Step::Next(State::BlockComment)
            }
            _ => accept_before(op(Operator::Slash)),
        },

        // ─── Comments ────────────────────────────────────────────────

        State::LineComment => match c {
            Some(b'\n') => {
                ctx.mark_start();
                accept(TokenKind::Eol)
            }
            None => {
                ctx.mark_start();
                accept(TokenKind::Eof)
            }
            Some(_) => Step::Next(State::LineComment),
        },
        State::BlockComment => block_comment(c, ctx),
        State::BlockStar => match c {
            Some(b'/') => {
                ctx.comment_depth -= 1;
                if ctx.comment_depth == 0 {
                    Step::Next(State::Start)
                } else {
                    Step::Next(State::BlockComment)
                }
            }
            Some(b'*') => Step::Next(State::BlockStar),
            _ => block_comment(c, ctx),
        },
        State::BlockSlash => match c {
            Some(b'*') => {
                ctx.comment_depth += 1;
                Step::Next(State::BlockComment)
            }
            Some(b'/') => Step::Next(State::BlockSlash),
            _ => block_comment(c, ctx),
        },

        // ─── Names ───────────────────────────────────────────────────

        State::Underscore => match c {
            Some(b) if is_ident_continue(b) => {
                ctx.buffer.push(b);
                Step::Next(State::Identifier)
            }
            _ => accept_before(TokenKind::Underscore),
        },
        State::Identifier => match c {
            Some(b) if is_ident_continue(b) => {
                ctx.buffer.push(b);
                Step::Next(State::Identifier)
            }
            _ => finish_identifier(c, ctx),
        },

        // ─── Numbers ─────────────────────────────────────────────────

        State::Int => match c {
            Some(b @ b'0'..=b'9') => push(ctx, b, State::Int),
            Some(b'.') => push(ctx, b'.', State::DoubleStart),
            Some(b @ (b'e' | b'E')) => push(ctx, b, State::ExpStart),
            _ => finish_int(ctx),
        },
        State::DoubleStart => match c {
            Some(b @ b'0'..=b'9') => push(ctx, b, State::Double),
            _ => Step::Reject {
                kind: LexErrorKind::MissingFractionDigits,
                unread: true,
            },
        },
        State::Double => match c {
            Some(b @ b'0'..=b'9') => push(ctx, b, State::Double),
            Some(b @ (b'e' | b'E')) => push(ctx, b, State::ExpStart),
            _ => finish_double(ctx),
        },
        State::ExpStart => match c {
            Some(b @ (b'+' | b'-')) => push(ctx, b, State::ExpSign),
            Some(b @ b'0'..=b'9') => push(ctx, b, State::Exp),
            _ => Step::Reject {
                kind: LexErrorKind::MissingExponentDigits,
                unread: true,
            },
        },
        State::ExpSign => match c {
            Some(b @ b'0'..=b'9') => push(ctx, b, State::Exp),
            _ => Step::Reject {
                kind: LexErrorKind::MissingExponentDigits,
                unread: true,
            },
        },
        State::Exp => match c {
            Some(b @ b'0'..=b'9') => push(ctx, b, State::Exp),
            _ => finish_double(ctx),
        },

        // ─── Strings ─────────────────────────────────────────────────

        State::StrOpen => match c {
            Some(b'"') => Step::Next(State::StrEmpty),
            _ => single_line_content(c, ctx),
        },
        State::Str => single_line_content(c, ctx),
        State::StrEmpty => match c {
            Some(b'"') => Step::Next(State::MlOpen),
            _ => accept_before(TokenKind::Str(String::new())),
        },
        State::MlOpen => match c {
            Some(b'\n') => Step::Next(State::MlLineStart),
            None => reject(LexErrorKind::UnterminatedString),
            Some(_) => reject(LexErrorKind::MultilineStringStart),
        },
        State::MlLineStart => match c {
            Some(b'"') => push(ctx, b'"', State::MlQuote1),
            _ => multi_line_content(c, ctx),
        },
        State::MlQuote1 => match c {
            Some(b'"') => push(ctx, b'"', State::MlQuote2),
            _ => multi_line_content(c, ctx),
        },
        State::MlQuote2 => match c {
            Some(b'"') => {
                // Drop the line break and the three closing quotes.
                ctx.buffer.push(b'"');
                ctx.buffer.retract(4);
                accept(TokenKind::Str(ctx.buffer.take_string()))
            }
            _ => multi_line_content(c, ctx),
        },
        State::MlStr => multi_line_content(c, ctx),

        // ─── Escapes ─────────────────────────────────────────────────

        State::Escape(mode) => match c {
            Some(b'u') => Step::Next(State::HexOpen(mode)),
            Some(b) => match simple_escape(b) {
                Some(decoded) => push(ctx, decoded, mode.content_state()),
                None => reject(LexErrorKind::InvalidEscape(char::from(b))),
            },
            None => reject(LexErrorKind::UnterminatedString),
        },
        State::HexOpen(mode) => match c {
            Some(b'{') => {
                ctx.hex.clear();
                ctx.hex_digits = 0;
                Step::Next(State::Hex(mode))
            }
            Some(_) => reject(LexErrorKind::InvalidEscape('u')),
            None => reject(LexErrorKind::UnterminatedString),
        },
        State::Hex(mode) => match c {
            Some(b) if b.is_ascii_hexdigit() => {
                if ctx.hex_digits == 8 {
                    return reject(LexErrorKind::HexEscapeTooLong);
                }
                ctx.hex.push(b);
                ctx.hex_digits += 1;
                Step::Next(State::Hex(mode))
            }
            Some(b'}') => match decode_hex_escape(ctx.hex.as_bytes()) {
                Some(ch) => {
                    ctx.buffer.push_char(ch);
                    Step::Next(mode.content_state())
                }
                None => reject(LexErrorKind::EmptyHexEscape),
            },
            Some(_) => reject(LexErrorKind::InvalidEscape('u')),
            None => reject(LexErrorKind::UnterminatedString),
        },
    }
}

#[inline]
fn push(ctx: &mut ScannerState, b: u8, next: State) -> Step {
    ctx.buffer.push(b);
    Step::Next(next)
}

fn start(c: Option<u8>, ctx: &mut ScannerState) -> Step {
    let Some(b) = c else {
        ctx.mark_start();
        return accept(TokenKind::Eof);
    };
    if matches!(b, b' ' | b'\t' | 0x0B | 0x0C | b'\r') {
        return Step::Next(State::Start);
    }
    ctx.mark_start();
    match b {
        b'\n' => accept(TokenKind::Eol),
        b'a'..=b'z' | b'A'..=b'Z' => push(ctx, b, State::Identifier),
        b'_' => push(ctx, b, State::Underscore),
        b'0'..=b'9' => push(ctx, b, State::Int),
        b'"' => Step::Next(State::StrOpen),
        b'<' => Step::Next(State::Less),
        b'>' => Step::Next(State::Greater),
        b'!' => Step::Next(State::Bang),
        b'?' => Step::Next(State::Question),
        b'=' => Step::Next(State::Assign),
        b'-' => Step::Next(State::Minus),
        b'/' => Step::Next(State::Slash),
        b':' => accept(op(Operator::Colon)),
        b'{' => accept(op(Operator::LBrace)),
        b'}' => accept(op(Operator::RBrace)),
        b'(' => accept(op(Operator::LParen)),
        b')' => accept(op(Operator::RParen)),
        b'+' => accept(op(Operator::Plus)),
        b'*' => accept(op(Operator::Star)),
        b',' => accept(op(Operator::Comma)),
        _ => reject(LexErrorKind::UnexpectedChar(char::from(b))),
    }
}

fn block_comment(c: Option<u8>, ctx: &mut ScannerState) -> Step {
    match c {
        Some(b'*') => Step::Next(State::BlockStar),
        Some(b'/') => Step::Next(State::BlockSlash),
        Some(b'\n') => {
            ctx.newline_in_comment = true;
            Step::Next(State::BlockComment)
        }
        Some(_) => Step::Next(State::BlockComment),
        None => {
            ctx.warnings.push(LexError::new(
                LexErrorKind::UnterminatedBlockComment,
                ctx.comment_start,
            ));
            ctx.mark_start();
            accept(TokenKind::Eof)
        }
    }
}

fn finish_identifier(c: Option<u8>, ctx: &mut ScannerState) -> Step {
    let word = ctx.buffer.as_bytes();
    if let Some(kw) = Keyword::from_ident(word) {
        return accept_before(TokenKind::Keyword(kw));
    }
    if let Some(ty) = BaseType::from_ident(word) {
        return type_annotation(ty, c);
    }
    accept_before(TokenKind::Identifier(ctx.buffer.take_string()))
}

/// A type name optionally followed by `?`.
fn type_annotation(ty: BaseType, c: Option<u8>) -> Step {
    if c == Some(b'?') {
        accept(TokenKind::DataType { ty, nilable: true })
    } else {
        accept_before(TokenKind::DataType { ty, nilable: false })
    }
}

fn finish_int(ctx: &mut ScannerState) -> Step {
    let value = std::str::from_utf8(ctx.buffer.as_bytes())
        .ok()
        .and_then(|text| text.parse::<i64>().ok());
    match value {
        Some(n) => accept_before(TokenKind::Int(n)),
        None => Step::Reject {
            kind: LexErrorKind::IntegerOverflow,
            unread: true,
        },
    }
}

fn finish_double(ctx: &mut ScannerState) -> Step {
    let value = std::str::from_utf8(ctx.buffer.as_bytes())
        .ok()
        .and_then(|text| text.parse::<f64>().ok());
    match value {
        Some(v) => accept_before(TokenKind::Double(v)),
        // The automaton only admits digits, `.`, `e` and a sign.
        None => Step::Reject {
            kind: LexErrorKind::MissingExponentDigits,
            unread: true,
        },
    }
}

fn single_line_content(c: Option<u8>, ctx: &mut ScannerState) -> Step {
    match c {
        Some(b'"') => accept(TokenKind::Str(ctx.buffer.take_string())),
        Some(b'\\') => Step::Next(State::Escape(StrMode::Single)),
        Some(b) if b <= 31 => reject(LexErrorKind::ControlCharInString(b)),
        Some(b) => push(ctx, b, State::Str),
        None => reject(LexErrorKind::UnterminatedString),
    }
}

fn multi_line_content(c: Option<u8>, ctx: &mut ScannerState) -> Step {
    match c {
        Some(b'\\') => Step::Next(State::Escape(StrMode::Multi)),
        Some(b'\n') => push(ctx, b'\n', State::MlLineStart),
        Some(b) => push(ctx, b, State::MlStr),
        None => reject(LexErrorKind::UnterminatedString),
    }
}
