//! Diagnostic system for the swiftlet compiler.
//!
//! Every phase reports problems as a [`Diagnostic`] tagged with an
//! [`ErrorCode`]. The numeric value of the code is also the process exit
//! status, so the first error that is recorded decides how the compiler
//! exits. [`ErrorLatch`] implements that first-error-wins rule.
//!
//! ```text
//! let mut latch = ErrorLatch::new();
//! latch.record(ErrorCode::Syntax);
//! latch.record(ErrorCode::IncompatibleTypes); // ignored
//! assert_eq!(latch.exit_code(), 2);
//! ```

mod diagnostic;
pub mod emitter;
mod error_code;
mod latch;
pub mod queue;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use latch::ErrorLatch;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
