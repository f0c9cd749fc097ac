//! Symbol tables for swiftlet.
//!
//! - [`SymbolTable`]: open addressing with double hashing over a prime
//!   number of slots. Deleted entries become tombstones that keep their
//!   probe slot until the next resize.
//! - [`ScopeStack`]: one table per lexical block, searched innermost first.
//! - [`builtins`]: declarations of the language's built-in functions.

pub mod builtins;
mod error;
mod hash;
mod scope;
mod symbol;
mod table;

pub use error::SymtabError;
pub use hash::{next_capacity, PRIME_LADDER};
pub use scope::ScopeStack;
pub use symbol::{Param, Symbol, SymbolFlags, SymbolKind};
pub use table::SymbolTable;
