//! IFJcode23 text backend.

use std::fmt::Write;

use super::{ArithOp, CompareOp, Emitter, Instr, Operand};

/// Global scratch variables shared by every generated helper sequence.
const HELPER_VARS: [&str; 3] = ["GF@?PARAM_1", "GF@?PARAM_2", "GF@?RESULT_1"];

/// Renders instructions as IFJcode23 stack-machine text.
///
/// Nil-coalescing expands to a branch, so the emitter numbers its labels
/// itself. Start from a non-zero base with [`Ifjcode23Emitter::with_label_base`]
/// when several emitters write into the same program.
#[derive(Clone, Debug, Default)]
pub struct Ifjcode23Emitter {
    out: String,
    next_label: u32,
}

impl Ifjcode23Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_label_base(mut self, base: u32) -> Self {
        self.next_label = base;
        self
    }

    /// Program header and helper variable declarations.
    pub fn prolog(&mut self) {
        let _ = writeln!(self.out, ".IFJcode23");
        for var in HELPER_VARS {
            let _ = writeln!(self.out, "DEFVAR {var}");
        }
    }

    /// Drop whatever an evaluated expression left on the data stack.
    pub fn clear_stack(&mut self) {
        self.line("CLEARS");
    }

    /// Next unused label number.
    pub fn next_label(&self) -> u32 {
        self.next_label
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn push(&mut self, operand: &Operand) {
        self.out.push_str("PUSHS ");
        write_operand(&mut self.out, operand);
        self.out.push('\n');
    }

    fn compare(&mut self, op: CompareOp) {
        let (base, negate) = match op {
            CompareOp::Less => ("LTS", false),
            CompareOp::Greater => ("GTS", false),
            CompareOp::Equal => ("EQS", false),
            CompareOp::LessEqual => ("GTS", true),
            CompareOp::GreaterEqual => ("LTS", true),
            CompareOp::NotEqual => ("EQS", true),
        };
        self.line(base);
        if negate {
            self.line("NOTS");
        }
    }

    fn nil_coalesce(&mut self) {
        let id = self.next_label;
        self.next_label += 1;
        for text in [
            "CREATEFRAME",
            "PUSHFRAME",
            "DEFVAR LF@op_2",
            "POPS LF@op_2",
            "DEFVAR LF@op_1",
            "POPS LF@op_1",
            "PUSHS nil@nil",
            "PUSHS LF@op_1",
        ] {
            self.line(text);
        }
        self.compare(CompareOp::NotEqual);
        let _ = writeln!(self.out, "PUSHS bool@true");
        let _ = writeln!(self.out, "JUMPIFNEQS $$ELSE_{id}");
        let _ = writeln!(self.out, "PUSHS LF@op_1");
        let _ = writeln!(self.out, "JUMP $$IF_END_{id}");
        let _ = writeln!(self.out, "LABEL $$ELSE_{id}");
        let _ = writeln!(self.out, "PUSHS LF@op_2");
        let _ = writeln!(self.out, "LABEL $$IF_END_{id}");
        self.line("POPFRAME");
    }
}

impl Emitter for Ifjcode23Emitter {
    fn emit(&mut self, instr: Instr) {
        match instr {
            Instr::Push(operand) => self.push(&operand),
            Instr::Arith { op, .. } => self.line(match op {
                ArithOp::Add => "ADDS",
                ArithOp::Sub => "SUBS",
                ArithOp::Mul => "MULS",
                ArithOp::DivFloat => "DIVS",
                ArithOp::DivInt => "IDIVS",
            }),
            Instr::Compare(op) => self.compare(op),
            Instr::Concat => {
                self.line("POPS GF@?PARAM_2");
                self.line("POPS GF@?PARAM_1");
                self.line("CONCAT GF@?RESULT_1 GF@?PARAM_1 GF@?PARAM_2");
                self.line("PUSHS GF@?RESULT_1");
            }
            Instr::IntToFloatTop => self.line("INT2FLOATS"),
            Instr::IntToFloatSecond => {
                self.line("POPS GF@?PARAM_2");
                self.line("INT2FLOATS");
                self.line("PUSHS GF@?PARAM_2");
            }
            Instr::NilCoalesce => self.nil_coalesce(),
        }
    }
}

fn write_operand(out: &mut String, operand: &Operand) {
    match operand {
        Operand::Int(v) => {
            let _ = write!(out, "int@{v}");
        }
        Operand::Double(v) => {
            out.push_str("float@");
            out.push_str(&hex_float(*v));
        }
        Operand::Str(s) => {
            out.push_str("string@");
            escape_string(out, s);
        }
        Operand::Nil => out.push_str("nil@nil"),
        Operand::Var { name, uid, global } => {
            let frame = if *global { "GF" } else { "LF" };
            let _ = write!(out, "{frame}@{name}_{uid}");
        }
    }
}

/// Whitespace, control characters, `#` and `\` become `\DDD`.
pub(crate) fn escape_string(out: &mut String, s: &str) {
    for c in s.chars() {
        let code = u32::from(c);
        if code <= 32 || c == '#' || c == '\\' {
            let _ = write!(out, "\\{code:03}");
        } else {
            out.push(c);
        }
    }
}

/// Hexadecimal float notation (`0x1.8p+1`), as printed by C's `%a`.
pub(crate) fn hex_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    let bits = value.to_bits();
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let biased = i64::try_from((bits >> 52) & 0x7ff).unwrap_or_default();
    let mantissa = bits & 0x000f_ffff_ffff_ffff;
    let (lead, exp) = match (biased, mantissa) {
        (0, 0) => (0, 0),
        (0, _) => (0, -1022),
        _ => (1, biased - 1023),
    };
    let digits = format!("{mantissa:013x}");
    let digits = digits.trim_end_matches('0');
    if digits.is_empty() {
        format!("{sign}0x{lead}p{exp:+}")
    } else {
        format!("{sign}0x{lead}.{digits}p{exp:+}")
    }
}
