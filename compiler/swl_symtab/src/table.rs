//! Open-addressing symbol table with double hashing.

use tracing::debug;

use crate::hash::{capacity_for, next_capacity, primary_index, probe_step};
use crate::{Param, Symbol, SymbolFlags, SymbolKind, SymtabError};

/// Maximum ratio of occupied slots (live and tombstoned) to table size.
const MAX_LOAD_FACTOR: f64 = 0.65;

#[derive(Clone, Debug)]
enum Slot {
    Empty,
    Occupied(Symbol),
    /// A deleted entry. Keeps its slot so probe sequences stay intact.
    Tombstone,
}

/// Symbol table for one lexical scope.
#[derive(Clone, Debug)]
pub struct SymbolTable {
    slots: Vec<Slot>,
    /// Occupied plus tombstoned slots.
    count: usize,
    tombstones: usize,
}

type Result<T> = std::result::Result<T, SymtabError>;

impl SymbolTable {
    pub const DEFAULT_CAPACITY: usize = 11;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Table sized to the first prime `>= hint`.
    pub fn with_capacity(hint: usize) -> Self {
        let size = capacity_for(hint);
        SymbolTable {
            slots: (0..size).map(|_| Slot::Empty).collect(),
            count: 0,
            tombstones: 0,
        }
    }

    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of active (searchable) entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.count - self.tombstones
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    pub fn load_factor(&self) -> f64 {
        ratio(self.count, self.capacity())
    }

    /// Active entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied(sym) => Some(sym),
            Slot::Empty | Slot::Tombstone => None,
        })
    }

    /// Slot indices visited when looking for `name`.
    fn probe(&self, name: &str) -> impl Iterator<Item = usize> {
        let size = self.capacity();
        let home = primary_index(name, size);
        let step = probe_step(name, size);
        (0..size).map(move |i| (home + i * step) % size)
    }

    fn find_index(&self, name: &str) -> Option<usize> {
        for idx in self.probe(name) {
            match &self.slots[idx] {
                Slot::Empty => return None,
                Slot::Occupied(sym) if sym.name() == name => return Some(idx),
                Slot::Occupied(_) | Slot::Tombstone => {}
            }
        }
        None
    }

    /// Insert a fresh entry for `name` and return it for initialization.
    pub fn insert(&mut self, name: &str) -> Result<&mut Symbol> {
        if self.find_index(name).is_some() {
            return Err(SymtabError::AlreadyStored);
        }
        let idx = self
            .probe(name)
            .find(|&idx| matches!(self.slots[idx], Slot::Empty))
            .ok_or(SymtabError::CapacityExhausted)?;
        self.slots[idx] = Slot::Occupied(Symbol::new(name));
        self.count += 1;

        let idx = if self.load_factor() > MAX_LOAD_FACTOR {
            self.resize();
            self.find_index(name).ok_or(SymtabError::CapacityExhausted)?
        } else {
            idx
        };
        match &mut self.slots[idx] {
            Slot::Occupied(sym) => Ok(sym),
            Slot::Empty | Slot::Tombstone => Err(SymtabError::CapacityExhausted),
        }
    }

    /// Find the active entry for `name`. Tombstones never match.
    pub fn search(&self, name: &str) -> Result<&Symbol> {
        match self.find_index(name).map(|idx| &self.slots[idx]) {
            Some(Slot::Occupied(sym)) => Ok(sym),
            _ => Err(SymtabError::ItemNotFound),
        }
    }

    pub fn search_mut(&mut self, name: &str) -> Result<&mut Symbol> {
        let idx = self.find_index(name).ok_or(SymtabError::ItemNotFound)?;
        match &mut self.slots[idx] {
            Slot::Occupied(sym) => Ok(sym),
            Slot::Empty | Slot::Tombstone => Err(SymtabError::ItemNotFound),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find_index(name).is_some()
    }

    /// Turn the entry into a tombstone. The slot stays taken until the next resize.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        let idx = self.find_index(name).ok_or(SymtabError::ItemNotFound)?;
        self.slots[idx] = Slot::Tombstone;
        self.tombstones += 1;
        Ok(())
    }

    /// Grow to the next prime size, rehashing active entries and dropping tombstones.
    #[tracing::instrument(level = "debug", skip_all, fields(from = self.capacity()))]
    pub fn resize(&mut self) {
        let new_size = next_capacity(self.capacity());
        let old = std::mem::replace(
            &mut self.slots,
            (0..new_size).map(|_| Slot::Empty).collect(),
        );
        let discarded = self.tombstones;
        self.count -= discarded;
        self.tombstones = 0;

        for slot in old {
            if let Slot::Occupied(sym) = slot {
                let idx = self
                    .probe(sym.name())
                    .find(|&idx| matches!(self.slots[idx], Slot::Empty));
                if let Some(idx) = idx {
                    self.slots[idx] = Slot::Occupied(sym);
                }
            }
        }
        debug!(to = new_size, discarded, live = self.count, "symbol table resized");
    }

    // ─── Typed accessors ─────────────────────────────────────────────

    pub fn set_type(&mut self, name: &str, kind: SymbolKind) -> Result<()> {
        self.search_mut(name)?.kind = kind;
        Ok(())
    }

    pub fn get_type(&self, name: &str) -> Result<SymbolKind> {
        Ok(self.search(name)?.kind)
    }

    pub fn set_initialized(&mut self, name: &str, initialized: bool) -> Result<()> {
        self.search_mut(name)?
            .flags
            .set(SymbolFlags::INITIALIZED, initialized);
        Ok(())
    }

    pub fn is_initialized(&self, name: &str) -> Result<bool> {
        Ok(self.search(name)?.is_initialized())
    }

    pub fn set_mutability(&mut self, name: &str, mutable: bool) -> Result<()> {
        self.variable_mut(name)?.flags.set(SymbolFlags::MUTABLE, mutable);
        Ok(())
    }

    pub fn get_mutability(&self, name: &str) -> Result<bool> {
        Ok(self.variable(name)?.is_mutable())
    }

    pub fn set_nillable(&mut self, name: &str, nilable: bool) -> Result<()> {
        self.variable_mut(name)?.flags.set(SymbolFlags::NILABLE, nilable);
        Ok(())
    }

    pub fn get_nillable(&self, name: &str) -> Result<bool> {
        Ok(self.variable(name)?.is_nilable())
    }

    pub fn set_func_definition(&mut self, name: &str, defined: bool) -> Result<()> {
        self.function_mut(name)?
            .flags
            .set(SymbolFlags::FUNC_DEFINED, defined);
        Ok(())
    }

    pub fn get_func_definition(&self, name: &str) -> Result<bool> {
        Ok(self.function(name)?.flags.contains(SymbolFlags::FUNC_DEFINED))
    }

    pub fn set_return_type(&mut self, name: &str, ty: SymbolKind, nilable: bool) -> Result<()> {
        let func = self.function_mut(name)?;
        func.return_type = ty;
        func.return_nilable = nilable;
        Ok(())
    }

    /// Return type and whether it is nilable.
    pub fn get_return_type(&self, name: &str) -> Result<(SymbolKind, bool)> {
        let func = self.function(name)?;
        Ok((func.return_type, func.return_nilable))
    }

    /// Append a parameter. Parameter names must be unique within a function.
    pub fn add_param(&mut self, func: &str, param: Param) -> Result<()> {
        let func = self.function_mut(func)?;
        if func.param(&param.name).is_some() {
            return Err(SymtabError::AlreadyStored);
        }
        func.params.push(param);
        Ok(())
    }

    pub fn search_param(&self, func: &str, param: &str) -> Result<&Param> {
        self.function(func)?
            .param(param)
            .ok_or(SymtabError::ParamNotFound)
    }

    pub fn set_param_type(&mut self, func: &str, param: &str, ty: SymbolKind) -> Result<()> {
        self.param_mut(func, param)?.ty = ty;
        Ok(())
    }

    pub fn get_param_type(&self, func: &str, param: &str) -> Result<SymbolKind> {
        Ok(self.search_param(func, param)?.ty)
    }

    pub fn set_param_label(&mut self, func: &str, param: &str, label: &str) -> Result<()> {
        label.clone_into(&mut self.param_mut(func, param)?.label);
        Ok(())
    }

    pub fn get_param_label(&self, func: &str, param: &str) -> Result<&str> {
        Ok(&self.search_param(func, param)?.label)
    }

    pub fn set_param_nil(&mut self, func: &str, param: &str, nilable: bool) -> Result<()> {
        self.param_mut(func, param)?.nilable = nilable;
        Ok(())
    }

    pub fn get_param_nil(&self, func: &str, param: &str) -> Result<bool> {
        Ok(self.search_param(func, param)?.nilable)
    }

    fn variable(&self, name: &str) -> Result<&Symbol> {
        let sym = self.search(name)?;
        if sym.is_function() {
            return Err(SymtabError::ItemIsFunction);
        }
        Ok(sym)
    }

    fn variable_mut(&mut self, name: &str) -> Result<&mut Symbol> {
        let sym = self.search_mut(name)?;
        if sym.is_function() {
            return Err(SymtabError::ItemIsFunction);
        }
        Ok(sym)
    }

    fn function(&self, name: &str) -> Result<&Symbol> {
        let sym = self.search(name)?;
        if !sym.is_function() {
            return Err(SymtabError::ItemNotFunction);
        }
        Ok(sym)
    }

    fn function_mut(&mut self, name: &str) -> Result<&mut Symbol> {
        let sym = self.search_mut(name)?;
        if !sym.is_function() {
            return Err(SymtabError::ItemNotFunction);
        }
        Ok(sym)
    }

    fn param_mut(&mut self, func: &str, param: &str) -> Result<&mut Param> {
        self.function_mut(func)?
            .param_mut(param)
            .ok_or(SymtabError::ParamNotFound)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "table sizes are far below 2^52"
)]
fn ratio(count: usize, size: usize) -> f64 {
    count as f64 / size as f64
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
