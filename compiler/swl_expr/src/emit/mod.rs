//! Instructions produced while an expression is reduced.
//!
//! The evaluator never formats target code itself. It hands each
//! [`Instr`] to an [`Emitter`] as soon as the reduction that produced it
//! succeeds, so code comes out in postfix order.

mod ifjcode;

pub use ifjcode::Ifjcode23Emitter;

use std::fmt;

/// A value pushed onto the target's data stack.
#[derive(Clone, PartialEq, Debug)]
pub enum Operand {
    Int(i64),
    Double(f64),
    Str(String),
    Nil,
    /// A variable, disambiguated by its symbol uid.
    Var { name: String, uid: u32, global: bool },
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    DivFloat,
    DivInt,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CompareOp {
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Equal,
    NotEqual,
}

/// One stack-machine operation.
#[derive(Clone, PartialEq, Debug)]
pub enum Instr {
    Push(Operand),
    /// Pop two operands, push the result. `on_ints` is set when both are `Int`.
    Arith { op: ArithOp, on_ints: bool },
    Compare(CompareOp),
    /// Pop two strings, push their concatenation.
    Concat,
    /// Convert the top of the stack from int to float.
    IntToFloatTop,
    /// Convert the value below the top of the stack from int to float.
    IntToFloatSecond,
    /// Pop `rhs` then `lhs`, push `lhs` unless it is nil, else `rhs`.
    NilCoalesce,
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::DivFloat | ArithOp::DivInt => "/",
        })
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CompareOp::Less => "<",
            CompareOp::LessEqual => "<=",
            CompareOp::Greater => ">",
            CompareOp::GreaterEqual => ">=",
            CompareOp::Equal => "==",
            CompareOp::NotEqual => "!=",
        })
    }
}

/// Sink for generated instructions.
pub trait Emitter {
    fn emit(&mut self, instr: Instr);
}

/// Records instructions in order.
impl Emitter for Vec<Instr> {
    fn emit(&mut self, instr: Instr) {
        self.push(instr);
    }
}

impl<E: Emitter + ?Sized> Emitter for &mut E {
    fn emit(&mut self, instr: Instr) {
        (**self).emit(instr);
    }
}
