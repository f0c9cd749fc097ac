//! First-error-wins bookkeeping.

use crate::ErrorCode;

/// Holds the first error code recorded during an operation.
///
/// Later codes are ignored. A phase keeps one latch in its context value and
/// inspects it once the operation reaches its natural end.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ErrorLatch {
    first: Option<ErrorCode>,
}

impl ErrorLatch {
    pub const fn new() -> Self {
        ErrorLatch { first: None }
    }

    /// Record `code` unless an earlier code is already latched.
    ///
    /// Returns `true` if this call latched the code.
    pub fn record(&mut self, code: ErrorCode) -> bool {
        if self.first.is_some() {
            return false;
        }
        self.first = Some(code);
        true
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.first.is_some()
    }

    #[inline]
    pub fn code(&self) -> Option<ErrorCode> {
        self.first
    }

    /// `Ok(())` when nothing was latched.
    pub fn result(&self) -> Result<(), ErrorCode> {
        match self.first {
            Some(code) => Err(code),
            None => Ok(()),
        }
    }

    /// Process exit status: 0 when nothing was latched.
    pub fn exit_code(&self) -> i32 {
        self.first.map_or(0, ErrorCode::exit_code)
    }
}

#[cfg(test)]
mod tests;
