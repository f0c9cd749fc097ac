//! Escape sequence decoding.

/// Decode the digits of a `\u{..}` escape.
///
/// Only the low byte of the value is kept, so `\u{141}` decodes to
/// U+0041. Returns `None` for an empty or non-hex digit string.
pub fn decode_hex_escape(digits: &[u8]) -> Option<char> {
    if digits.is_empty() || digits.len() > 8 {
        return None;
    }
    let mut value: u32 = 0;
    for &d in digits {
        let nibble = char::from(d).to_digit(16)?;
        value = (value << 4) | nibble;
    }
    Some(char::from(value.to_le_bytes()[0]))
}

/// Value of a simple one-character escape (`\n`, `\r`, `\t`, `\"`, `\\`).
pub(crate) fn simple_escape(c: u8) -> Option<u8> {
    match c {
        b'n' => Some(b'\n'),
        b'r' => Some(b'\r'),
        b't' => Some(b'\t'),
        b'"' => Some(b'"'),
        b'\\' => Some(b'\\'),
        _ => None,
    }
}
