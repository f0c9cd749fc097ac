//! Symbol table entries.

use std::sync::atomic::{AtomicU32, Ordering};

use bitflags::bitflags;
use swl_ir::BaseType;

/// Next unique id handed to a new symbol. Never reset during a run.
static NEXT_UID: AtomicU32 = AtomicU32::new(0);

fn next_uid() -> u32 {
    NEXT_UID.fetch_add(1, Ordering::Relaxed)
}

/// What a name denotes, and for variables, its value type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum SymbolKind {
    Function,
    Integer,
    Double,
    String,
    Nil,
    Bool,
    Constant,
    #[default]
    Undefined,
}

impl SymbolKind {
    pub fn is_function(self) -> bool {
        self == SymbolKind::Function
    }
}

impl From<BaseType> for SymbolKind {
    fn from(ty: BaseType) -> Self {
        match ty {
            BaseType::Int => SymbolKind::Integer,
            BaseType::Double => SymbolKind::Double,
            BaseType::String => SymbolKind::String,
        }
    }
}

bitflags! {
    /// Boolean properties of a symbol.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct SymbolFlags: u8 {
        /// Declared with `var`.
        const MUTABLE = 1 << 0;
        /// Type annotated with `?`.
        const NILABLE = 1 << 1;
        /// Has been assigned a value.
        const INITIALIZED = 1 << 2;
        /// A function body has been seen (not just a call).
        const FUNC_DEFINED = 1 << 3;
    }
}

/// A function parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    /// Name used inside the function body.
    pub name: String,
    /// External label used at call sites (`_` for none).
    pub label: String,
    pub ty: SymbolKind,
    pub nilable: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Param {
            name: name.into(),
            label: label.into(),
            ty: SymbolKind::Undefined,
            nilable: false,
        }
    }

    #[must_use]
    pub fn with_type(mut self, ty: SymbolKind, nilable: bool) -> Self {
        self.ty = ty;
        self.nilable = nilable;
        self
    }
}

/// A declared identifier.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Symbol {
    name: String,
    pub kind: SymbolKind,
    pub flags: SymbolFlags,
    uid: u32,
    pub params: Vec<Param>,
    /// Function return type; `Undefined` for procedures and variables.
    pub return_type: SymbolKind,
    pub return_nilable: bool,
}

impl Symbol {
    /// Fresh entry with the next unique id.
    pub fn new(name: impl Into<String>) -> Self {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Undefined,
            flags: SymbolFlags::empty(),
            uid: next_uid(),
            params: Vec::new(),
            return_type: SymbolKind::Undefined,
            return_nilable: false,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unique id, used to disambiguate shadowed names in generated code.
    #[inline]
    pub fn uid(&self) -> u32 {
        self.uid
    }

    #[inline]
    pub fn is_function(&self) -> bool {
        self.kind.is_function()
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.flags.contains(SymbolFlags::INITIALIZED)
    }

    #[inline]
    pub fn is_mutable(&self) -> bool {
        self.flags.contains(SymbolFlags::MUTABLE)
    }

    #[inline]
    pub fn is_nilable(&self) -> bool {
        self.flags.contains(SymbolFlags::NILABLE)
    }

    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn param_mut(&mut self, name: &str) -> Option<&mut Param> {
        self.params.iter_mut().find(|p| p.name == name)
    }
}
