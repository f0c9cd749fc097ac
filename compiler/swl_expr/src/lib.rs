//! Expression evaluator for swiftlet.
//!
//! Expressions are parsed bottom-up with an operator-precedence table
//! ([`table`]). Every reduction is type checked against the scope stack
//! and, while no error has been recorded, immediately emits stack-machine
//! code through an [`Emitter`]:
//!
//! ```text
//! let mut code = Vec::new();
//! let outcome = ExprParser::new(&scopes, &mut code).parse(first, &mut scanner);
//! // code == [Push(1), Push(2), Arith { op: Add, on_ints: true }] for `1 + 2`
//! ```
//!
//! The evaluator stops at the first token that cannot continue the
//! expression and hands it back as [`ExprOutcome::terminator`] without
//! consuming it, so the statement parser can pick up from there.

pub mod emit;
mod parser;
mod rules;
mod stack;
pub mod table;
mod types;

pub use emit::{ArithOp, CompareOp, Emitter, Ifjcode23Emitter, Instr, Operand};
pub use parser::{ExprOutcome, ExprParser};
pub use table::{action, Action, Category};
pub use types::{ExprType, ValueType};
