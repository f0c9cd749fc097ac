//! Swiftlet compiler driver.
//!
//! Wires the scanner, symbol tables and expression evaluator together
//! behind the `swlc` command line.

pub mod commands;
mod options;
mod tracing_setup;

pub use options::{parse_options, Options};
pub use tracing_setup::init_tracing;
