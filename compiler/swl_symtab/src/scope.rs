//! Stack of per-block symbol tables.

use tracing::trace;

use crate::{Symbol, SymbolTable, SymtabError};

type Result<T> = std::result::Result<T, SymtabError>;

/// One symbol table per open lexical block, innermost last.
///
/// An empty stack is a valid value; every lookup on it fails with
/// [`SymtabError::NotInitialized`].
#[derive(Clone, Debug, Default)]
pub struct ScopeStack {
    frames: Vec<SymbolTable>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack { frames: Vec::new() }
    }

    /// Open a new innermost scope.
    pub fn push(&mut self) {
        self.frames.push(SymbolTable::new());
        trace!(depth = self.frames.len(), "scope pushed");
    }

    /// Close the innermost scope, dropping its entries.
    pub fn pop(&mut self) -> Result<SymbolTable> {
        let frame = self.frames.pop().ok_or(SymtabError::NotInitialized)?;
        trace!(depth = self.frames.len(), live = frame.len(), "scope popped");
        Ok(frame)
    }

    /// Pop every scope.
    pub fn dispose(&mut self) {
        while self.pop().is_ok() {}
    }

    /// Whether at least one scope is open.
    #[inline]
    pub fn peek(&self) -> bool {
        !self.frames.is_empty()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn top(&self) -> Result<&SymbolTable> {
        self.frames.last().ok_or(SymtabError::NotInitialized)
    }

    pub fn top_mut(&mut self) -> Result<&mut SymbolTable> {
        self.frames.last_mut().ok_or(SymtabError::NotInitialized)
    }

    /// The outermost (program level) scope.
    pub fn global_mut(&mut self) -> Result<&mut SymbolTable> {
        self.frames.first_mut().ok_or(SymtabError::NotInitialized)
    }

    /// Declare `name` in the innermost scope.
    pub fn insert(&mut self, name: &str) -> Result<&mut Symbol> {
        self.top_mut()?.insert(name)
    }

    /// Innermost visible entry for `name`.
    pub fn search(&self, name: &str) -> Result<&Symbol> {
        self.search_with_depth(name).map(|(sym, _)| sym)
    }

    pub fn search_mut(&mut self, name: &str) -> Result<&mut Symbol> {
        if !self.peek() {
            return Err(SymtabError::NotInitialized);
        }
        let depth = self
            .frames
            .iter()
            .rposition(|frame| frame.contains(name))
            .ok_or(SymtabError::ItemNotFound)?;
        self.frames[depth].search_mut(name)
    }

    /// Innermost entry for `name` along with the index of its frame
    /// (0 is the global scope).
    pub fn search_with_depth(&self, name: &str) -> Result<(&Symbol, usize)> {
        if !self.peek() {
            return Err(SymtabError::NotInitialized);
        }
        self.frames
            .iter()
            .enumerate()
            .rev()
            .find_map(|(depth, frame)| frame.search(name).ok().map(|sym| (sym, depth)))
            .ok_or(SymtabError::ItemNotFound)
    }

    /// Innermost entry for `name` that has been assigned a value.
    ///
    /// Declared but uninitialized entries are skipped, so an outer
    /// initialized variable stays visible while an inner shadow is still
    /// waiting for its initializer.
    pub fn search_initialized_var(&self, name: &str) -> Result<(&Symbol, usize)> {
        if !self.peek() {
            return Err(SymtabError::NotInitialized);
        }
        self.frames
            .iter()
            .enumerate()
            .rev()
            .filter_map(|(depth, frame)| frame.search(name).ok().map(|sym| (sym, depth)))
            .find(|(sym, _)| sym.is_initialized())
            .ok_or(SymtabError::ItemNotFound)
    }

    /// Whether the visible entry for `name` lives in the global scope.
    pub fn is_global(&self, name: &str) -> Result<bool> {
        Ok(self.search_with_depth(name)?.1 == 0)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
