//! Swiftlet IR - shared front-end types
//!
//! This crate holds the data that flows between the compiler phases:
//! - [`Location`] for line/column positions used in diagnostics
//! - [`Token`] and [`TokenKind`], the scanner's output
//! - [`DynString`], the growable byte buffer the scanner accumulates into
//!
//! It has no dependencies on the other `swl_*` crates.

mod dyn_string;
mod location;
mod token;

pub use dyn_string::DynString;
pub use location::Location;
pub use token::{BaseType, Keyword, Operator, Token, TokenKind};
