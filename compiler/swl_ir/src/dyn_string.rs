//! Growable byte buffer used while scanning.
//!
//! The scanner accumulates the text of the token under construction one
//! byte at a time and then either hands the bytes off into the token or
//! clears the buffer for the next call.

use std::fmt;

/// Growable byte buffer with an explicit doubling policy.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct DynString {
    bytes: Vec<u8>,
}

impl DynString {
    /// Capacity of a freshly created buffer.
    pub const INITIAL_CAPACITY: usize = 8;

    pub fn new() -> Self {
        Self::with_capacity(Self::INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        DynString {
            bytes: Vec::with_capacity(capacity.max(1)),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Last byte in the buffer, if any.
    #[inline]
    pub fn last(&self) -> Option<u8> {
        self.bytes.last().copied()
    }

    /// Append one byte, doubling the capacity when full.
    pub fn push(&mut self, byte: u8) {
        self.grow_for(1);
        self.bytes.push(byte);
    }

    /// Append a character as UTF-8.
    pub fn push_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.push_str(c.encode_utf8(&mut buf));
    }

    pub fn push_str(&mut self, s: &str) {
        self.grow_for(s.len());
        self.bytes.extend_from_slice(s.as_bytes());
    }

    /// Drop the last `n` bytes. Retracting more than the length empties the buffer.
    pub fn retract(&mut self, n: usize) {
        let keep = self.bytes.len().saturating_sub(n);
        self.bytes.truncate(keep);
    }

    /// Empty the buffer, keeping its allocation.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Byte-wise comparison with a string slice.
    #[inline]
    pub fn eq_str(&self, s: &str) -> bool {
        self.bytes == s.as_bytes()
    }

    /// Hand the content off as an owned `String`, leaving the buffer empty.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD.
    pub fn take_string(&mut self) -> String {
        let bytes = std::mem::take(&mut self.bytes);
        self.bytes = Vec::with_capacity(Self::INITIAL_CAPACITY);
        match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }

    /// Consume the buffer into an owned `String` (lossy on invalid UTF-8).
    pub fn into_string(mut self) -> String {
        self.take_string()
    }

    fn grow_for(&mut self, additional: usize) {
        let needed = self.bytes.len() + additional;
        let mut capacity = self.bytes.capacity().max(1);
        if needed <= capacity {
            return;
        }
        while capacity < needed {
            capacity *= 2;
        }
        self.bytes.reserve_exact(capacity - self.bytes.len());
    }
}

impl Default for DynString {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for DynString {
    fn from(s: &str) -> Self {
        let mut buf = DynString::new();
        buf.push_str(s);
        buf
    }
}

impl fmt::Debug for DynString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynString({:?})", String::from_utf8_lossy(&self.bytes))
    }
}
