//! Built-in function declarations.

use tracing::debug;

use crate::{Param, ScopeStack, SymbolFlags, SymbolKind, SymtabError};

/// Signature of a built-in function.
#[derive(Copy, Clone, Debug)]
pub struct Builtin {
    pub name: &'static str,
    /// `(label, name, type)` for each parameter.
    pub params: &'static [(&'static str, &'static str, SymbolKind)],
    pub returns: SymbolKind,
    pub returns_nil: bool,
    /// Accepts any number of arguments of any type.
    pub variadic: bool,
}

const fn builtin(
    name: &'static str,
    params: &'static [(&'static str, &'static str, SymbolKind)],
    returns: SymbolKind,
    returns_nil: bool,
) -> Builtin {
    Builtin {
        name,
        params,
        returns,
        returns_nil,
        variadic: false,
    }
}

pub const BUILTINS: &[Builtin] = &[
    builtin("readString", &[], SymbolKind::String, true),
    builtin("readInt", &[], SymbolKind::Integer, true),
    builtin("readDouble", &[], SymbolKind::Double, true),
    Builtin {
        name: "write",
        params: &[],
        returns: SymbolKind::Undefined,
        returns_nil: false,
        variadic: true,
    },
    builtin(
        "Int2Double",
        &[("_", "term", SymbolKind::Integer)],
        SymbolKind::Double,
        false,
    ),
    builtin(
        "Double2Int",
        &[("_", "term", SymbolKind::Double)],
        SymbolKind::Integer,
        false,
    ),
    builtin(
        "length",
        &[("_", "s", SymbolKind::String)],
        SymbolKind::Integer,
        false,
    ),
    builtin(
        "substring",
        &[
            ("of", "s", SymbolKind::String),
            ("startingAt", "i", SymbolKind::Integer),
            ("endingBefore", "j", SymbolKind::Integer),
        ],
        SymbolKind::String,
        true,
    ),
    builtin(
        "ord",
        &[("_", "c", SymbolKind::String)],
        SymbolKind::Integer,
        false,
    ),
    builtin(
        "chr",
        &[("_", "i", SymbolKind::Integer)],
        SymbolKind::String,
        false,
    ),
];

/// Look up a built-in by name.
pub fn find(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|b| b.name == name)
}

/// Declare every built-in in the global scope.
pub fn register(stack: &mut ScopeStack) -> Result<(), SymtabError> {
    let globals = stack.global_mut()?;
    for builtin in BUILTINS {
        let sym = globals.insert(builtin.name)?;
        sym.kind = SymbolKind::Function;
        sym.flags
            .insert(SymbolFlags::FUNC_DEFINED | SymbolFlags::INITIALIZED);
        sym.return_type = builtin.returns;
        sym.return_nilable = builtin.returns_nil;
        sym.params = builtin
            .params
            .iter()
            .map(|&(label, name, ty)| Param::new(name, label).with_type(ty, false))
            .collect();
    }
    debug!(count = BUILTINS.len(), "registered built-in functions");
    Ok(())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
