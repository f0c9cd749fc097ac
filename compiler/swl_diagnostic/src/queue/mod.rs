//! Diagnostic queue: collection, deduplication, and sorting.

use tracing::trace;

use crate::{Diagnostic, ErrorLatch};

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors kept (0 = unlimited).
    pub error_limit: usize,
    /// Drop a diagnostic whose line and message repeat an earlier one.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// No limit and no deduplication.
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Queue for collecting diagnostics across a compilation.
///
/// The queue also latches the code of the first error it accepts, which
/// becomes the process exit status.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    first_error: ErrorLatch,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Add a diagnostic.
    ///
    /// Returns `true` if it was kept, `false` if the limit or deduplication
    /// filtered it. A filtered error still latches its code when it is the
    /// first error seen.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        let is_error = diag.is_error();
        if is_error {
            self.first_error.record(diag.code);
        }

        if is_error && self.limit_reached() {
            trace!(code = %diag.code, "diagnostic dropped: error limit reached");
            return false;
        }

        if self.config.deduplicate && self.is_duplicate(&diag) {
            trace!(code = %diag.code, "diagnostic dropped: duplicate");
            return false;
        }

        if is_error {
            self.error_count += 1;
        }
        self.diagnostics.push(diag);
        true
    }

    /// Add every diagnostic from an iterator.
    pub fn extend(&mut self, diags: impl IntoIterator<Item = Diagnostic>) {
        for diag in diags {
            self.add(diag);
        }
    }

    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn has_errors(&self) -> bool {
        self.first_error.is_set()
    }

    /// The first error latched, as a first-error-wins value.
    pub fn first_error(&self) -> ErrorLatch {
        self.first_error
    }

    /// Sort diagnostics by location and return them, clearing the queue.
    ///
    /// The latched first error survives a flush.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut result = std::mem::take(&mut self.diagnostics);
        result.sort_by_key(|d| d.location.unwrap_or_default());
        self.error_count = 0;
        result
    }

    /// Diagnostics collected so far, in insertion order.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    fn is_duplicate(&self, diag: &Diagnostic) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.line() == diag.line() && d.message == diag.message)
    }
}
