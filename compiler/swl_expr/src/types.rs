//! Static types of expression values.

use std::fmt;

use swl_symtab::SymbolKind;

/// Base type of a value, without nilability.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ValueType {
    Int,
    Double,
    String,
    Bool,
    /// The type of the `nil` literal.
    Nil,
    /// Unknown, after an error or for an unresolved symbol kind.
    #[default]
    Undefined,
}

impl ValueType {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::Int => "Int",
            ValueType::Double => "Double",
            ValueType::String => "String",
            ValueType::Bool => "Bool",
            ValueType::Nil => "nil",
            ValueType::Undefined => "<undefined>",
        }
    }

    #[inline]
    pub fn is_numeric(self) -> bool {
        matches!(self, ValueType::Int | ValueType::Double)
    }
}

impl From<SymbolKind> for ValueType {
    fn from(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::Integer => ValueType::Int,
            SymbolKind::Double => ValueType::Double,
            SymbolKind::String => ValueType::String,
            SymbolKind::Bool => ValueType::Bool,
            SymbolKind::Nil => ValueType::Nil,
            SymbolKind::Function | SymbolKind::Constant | SymbolKind::Undefined => {
                ValueType::Undefined
            }
        }
    }
}

/// Type of an expression: a base type plus whether it may be `nil`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ExprType {
    pub base: ValueType,
    pub nilable: bool,
}

impl ExprType {
    pub const INT: ExprType = ExprType::plain(ValueType::Int);
    pub const DOUBLE: ExprType = ExprType::plain(ValueType::Double);
    pub const STRING: ExprType = ExprType::plain(ValueType::String);
    pub const BOOL: ExprType = ExprType::plain(ValueType::Bool);
    pub const NIL: ExprType = ExprType {
        base: ValueType::Nil,
        nilable: true,
    };
    pub const UNDEFINED: ExprType = ExprType::plain(ValueType::Undefined);

    pub const fn new(base: ValueType, nilable: bool) -> Self {
        ExprType { base, nilable }
    }

    /// Non-nilable type.
    pub const fn plain(base: ValueType) -> Self {
        ExprType {
            base,
            nilable: false,
        }
    }

    /// Whether a value of this type may be `nil` at run time.
    #[inline]
    pub fn may_be_nil(self) -> bool {
        self.nilable || self.base == ValueType::Nil
    }

    #[inline]
    pub fn is_nil_literal(self) -> bool {
        self.base == ValueType::Nil
    }

    /// Same type with nilability removed.
    #[must_use]
    pub fn unwrapped(self) -> Self {
        ExprType::plain(self.base)
    }
}

impl fmt::Display for ExprType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base.as_str())?;
        if self.nilable && self.base != ValueType::Nil {
            f.write_str("?")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ExprType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
