//! Reduction rules and their type checks.

use smallvec::{smallvec, SmallVec};
use swl_diagnostic::ErrorCode;
use swl_ir::{Keyword, Location, Operator, Token, TokenKind};
use swl_symtab::{ScopeStack, SymtabError};

use crate::emit::{ArithOp, CompareOp, Instr, Operand};
use crate::stack::{Expr, StackSymbol, Terminal};
use crate::table::Category;
use crate::types::{ExprType, ValueType};

/// Which production a handle matches.
#[derive(Debug)]
pub(crate) enum Rule {
    /// `id`
    Operand(Token),
    /// `E !`
    NotNil { operand: Expr, location: Location },
    /// `( E )`
    Paren(Expr),
    /// `E op E`
    Binary {
        lhs: Expr,
        op: Operator,
        rhs: Expr,
        location: Location,
    },
    /// The handle matches no production.
    NoRule(NoRule),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct NoRule {
    pub message: &'static str,
    pub location: Option<Location>,
    /// The handle contains a placeholder, so the problem was already reported.
    pub poisoned: bool,
}

/// Match a handle against the grammar.
pub(crate) fn select(handle: &[StackSymbol]) -> Rule {
    use StackSymbol::{Expr as E, Terminal as T};

    match handle {
        [T(Terminal {
            cat: Category::Operand,
            token: Some(token),
            ..
        })] => Rule::Operand(token.clone()),
        [E(operand), T(bang @ Terminal {
            cat: Category::NotNil,
            ..
        })] => Rule::NotNil {
            operand: *operand,
            location: bang.location().unwrap_or_default(),
        },
        [T(Terminal {
            cat: Category::LParen,
            ..
        }), E(inner), T(Terminal {
            cat: Category::RParen,
            ..
        })] => Rule::Paren(*inner),
        [E(lhs), T(Terminal {
            cat,
            token: Some(token),
            ..
        }), E(rhs)] if cat.is_operator() => match token.kind {
            TokenKind::Operator(op) => Rule::Binary {
                lhs: *lhs,
                op,
                rhs: *rhs,
                location: token.location,
            },
            _ => no_rule(handle, "unexpected terminal"),
        },
        [T(Terminal {
            cat: Category::LParen,
            ..
        }), T(Terminal {
            cat: Category::RParen,
            ..
        })] => no_rule(handle, "missing operand in parentheses"),
        [E(_), T(Terminal { cat, .. })] if cat.is_operator() => {
            no_rule(handle, "missing second operand")
        }
        [T(Terminal { cat, .. }), E(_)] if cat.is_operator() => {
            no_rule(handle, "missing first operand")
        }
        _ => no_rule(handle, "unexpected terminal"),
    }
}

fn no_rule(handle: &[StackSymbol], message: &'static str) -> Rule {
    let location = handle.iter().find_map(|s| match s {
        StackSymbol::Terminal(t) => t.location(),
        StackSymbol::Expr(_) => None,
    });
    let poisoned = handle
        .iter()
        .any(|s| matches!(s, StackSymbol::Expr(e) if e.poisoned));
    Rule::NoRule(NoRule {
        message,
        location,
        poisoned,
    })
}

/// A failed check.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TypeError {
    pub code: ErrorCode,
    pub message: String,
    /// Expression pushed in place of the failed one.
    pub fallback: Expr,
}

impl TypeError {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        TypeError {
            code,
            message: message.into(),
            fallback: Expr::placeholder(),
        }
    }

    fn incompatible(message: impl Into<String>) -> Self {
        TypeError::new(ErrorCode::IncompatibleTypes, message)
    }
}

/// Type and code of a successful reduction.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Checked {
    pub expr: Expr,
    pub code: SmallVec<[Instr; 2]>,
}

impl Checked {
    fn new(ty: ExprType, code: SmallVec<[Instr; 2]>) -> Self {
        Checked {
            expr: Expr::new(ty),
            code,
        }
    }
}

/// Type a literal or identifier and produce the push for it.
pub(crate) fn check_operand(token: &Token, scopes: &ScopeStack) -> Result<Checked, TypeError> {
    let (ty, operand, literal_zero) = match &token.kind {
        TokenKind::Int(v) => (ExprType::INT, Operand::Int(*v), *v == 0),
        TokenKind::Double(v) => (ExprType::DOUBLE, Operand::Double(*v), *v == 0.0),
        TokenKind::Str(s) => (ExprType::STRING, Operand::Str(s.clone()), false),
        TokenKind::Keyword(Keyword::Nil) => (ExprType::NIL, Operand::Nil, false),
        TokenKind::Identifier(name) => {
            let (sym, depth) = scopes.search_initialized_var(name).map_err(|err| match err {
                SymtabError::ItemNotFound | SymtabError::NotInitialized => TypeError::new(
                    ErrorCode::UndefinedVariable,
                    format!("use of undefined or uninitialized variable `{name}`"),
                ),
                other => TypeError::new(other.code(), other.to_string()),
            })?;
            if sym.is_function() {
                return Err(TypeError::new(
                    ErrorCode::Semantic,
                    format!("function `{name}` used as a value"),
                ));
            }
            let ty = ExprType::new(ValueType::from(sym.kind), sym.is_nilable());
            let operand = Operand::Var {
                name: name.clone(),
                uid: sym.uid(),
                global: depth == 0,
            };
            (ty, operand, false)
        }
        other => {
            return Err(TypeError::new(
                ErrorCode::Syntax,
                format!("{} is not an operand", other.display_name()),
            ))
        }
    };
    Ok(Checked {
        expr: Expr {
            ty,
            literal_zero,
            poisoned: false,
        },
        code: smallvec![Instr::Push(operand)],
    })
}

/// `E !`: strip nilability.
pub(crate) fn check_not_nil(operand: Expr) -> Result<Expr, TypeError> {
    if operand.poisoned {
        return Ok(operand);
    }
    if operand.ty.is_nil_literal() {
        return Err(TypeError::incompatible("cannot force-unwrap `nil`"));
    }
    Ok(Expr::new(operand.ty.unwrapped()))
}

/// `E op E`. Poisoned operands yield a placeholder without a diagnostic.
pub(crate) fn check_binary(lhs: Expr, op: Operator, rhs: Expr) -> Result<Checked, TypeError> {
    if lhs.poisoned || rhs.poisoned {
        return Ok(Checked {
            expr: Expr::placeholder(),
            code: SmallVec::new(),
        });
    }
    match op {
        Operator::Plus | Operator::Minus | Operator::Star | Operator::Slash => {
            check_arithmetic(lhs, op, rhs)
        }
        Operator::NilCoalesce => check_nil_coalesce(lhs.ty, rhs.ty),
        Operator::Eq | Operator::Ne => check_equality(lhs.ty, op, rhs.ty),
        Operator::Lt | Operator::Le | Operator::Gt | Operator::Ge => {
            check_ordering(lhs.ty, op, rhs.ty)
        }
        other => Err(TypeError::new(
            ErrorCode::Syntax,
            format!("`{}` is not a binary operator", other.as_str()),
        )),
    }
}

fn check_arithmetic(lhs: Expr, op: Operator, rhs: Expr) -> Result<Checked, TypeError> {
    let (l, r) = (lhs.ty, rhs.ty);
    if l.may_be_nil() || r.may_be_nil() {
        return Err(TypeError::incompatible(format!(
            "operand of `{}` may be nil ({l} {} {r})",
            op.as_str(),
            op.as_str()
        )));
    }

    if l.base == ValueType::String || r.base == ValueType::String {
        return if l.base == r.base && op == Operator::Plus {
            Ok(Checked::new(ExprType::STRING, smallvec![Instr::Concat]))
        } else {
            Err(TypeError::incompatible(format!(
                "cannot apply `{}` to {l} and {r}",
                op.as_str()
            )))
        };
    }

    if !l.base.is_numeric() || !r.base.is_numeric() {
        return Err(TypeError::incompatible(format!(
            "cannot apply `{}` to {l} and {r}",
            op.as_str()
        )));
    }

    let on_ints = l.base == ValueType::Int && r.base == ValueType::Int;
    if op == Operator::Slash && rhs.literal_zero {
        return Err(TypeError {
            code: ErrorCode::Semantic,
            message: "division by zero".to_string(),
            fallback: Expr::new(ExprType::DOUBLE),
        });
    }

    let arith = match op {
        Operator::Plus => ArithOp::Add,
        Operator::Minus => ArithOp::Sub,
        Operator::Star => ArithOp::Mul,
        _ if on_ints => ArithOp::DivInt,
        _ => ArithOp::DivFloat,
    };

    let mut code = SmallVec::new();
    if !on_ints {
        if r.base == ValueType::Int {
            code.push(Instr::IntToFloatTop);
        } else if l.base == ValueType::Int {
            code.push(Instr::IntToFloatSecond);
        }
    }
    code.push(Instr::Arith { op: arith, on_ints });

    let ty = if on_ints {
        ExprType::INT
    } else {
        ExprType::DOUBLE
    };
    Ok(Checked::new(ty, code))
}

fn check_nil_coalesce(l: ExprType, r: ExprType) -> Result<Checked, TypeError> {
    if !l.may_be_nil() {
        return Err(TypeError::incompatible(format!(
            "left operand of `??` must be optional, found {l}"
        )));
    }
    if !l.is_nil_literal() && l.base != r.base {
        return Err(TypeError::incompatible(format!(
            "operands of `??` have different types ({l} and {r})"
        )));
    }
    Ok(Checked::new(r, smallvec![Instr::NilCoalesce]))
}

fn check_equality(l: ExprType, op: Operator, r: ExprType) -> Result<Checked, TypeError> {
    let compatible = l.base == r.base
        || (l.is_nil_literal() && r.may_be_nil())
        || (r.is_nil_literal() && l.may_be_nil());
    if !compatible {
        return Err(TypeError::incompatible(format!(
            "cannot compare {l} and {r} with `{}`",
            op.as_str()
        )));
    }
    let cmp = if op == Operator::Eq {
        CompareOp::Equal
    } else {
        CompareOp::NotEqual
    };
    Ok(Checked::new(ExprType::BOOL, smallvec![Instr::Compare(cmp)]))
}

fn check_ordering(l: ExprType, op: Operator, r: ExprType) -> Result<Checked, TypeError> {
    let orderable = matches!(
        l.base,
        ValueType::Int | ValueType::Double | ValueType::String
    );
    if !orderable || l.base != r.base || l.may_be_nil() || r.may_be_nil() {
        return Err(TypeError::incompatible(format!(
            "cannot compare {l} and {r} with `{}`",
            op.as_str()
        )));
    }
    let cmp = match op {
        Operator::Lt => CompareOp::Less,
        Operator::Le => CompareOp::LessEqual,
        Operator::Gt => CompareOp::Greater,
        _ => CompareOp::GreaterEqual,
    };
    Ok(Checked::new(ExprType::BOOL, smallvec![Instr::Compare(cmp)]))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
