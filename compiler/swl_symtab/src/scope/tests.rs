use super::*;
use crate::{SymbolFlags, SymbolKind};
use pretty_assertions::assert_eq;

fn declare(stack: &mut ScopeStack, name: &str, kind: SymbolKind, initialized: bool) -> u32 {
    let sym = stack.insert(name).unwrap();
    sym.kind = kind;
    sym.flags.set(SymbolFlags::INITIALIZED, initialized);
    sym.uid()
}

// === Empty stack ===

#[test]
fn empty_stack_fails_safely() {
    let mut stack = ScopeStack::new();
    assert!(!stack.peek());
    assert_eq!(stack.depth(), 0);
    assert_eq!(stack.search("x"), Err(SymtabError::NotInitialized));
    assert_eq!(
        stack.search_initialized_var("x"),
        Err(SymtabError::NotInitialized)
    );
    assert_eq!(stack.insert("x").err(), Some(SymtabError::NotInitialized));
    assert_eq!(stack.pop().err(), Some(SymtabError::NotInitialized));
}

#[test]
fn push_pop_dispose() {
    let mut stack = ScopeStack::new();
    stack.push();
    stack.push();
    stack.push();
    assert_eq!(stack.depth(), 3);
    assert_eq!(stack.top().unwrap().capacity(), 11);
    stack.pop().unwrap();
    assert_eq!(stack.depth(), 2);
    stack.dispose();
    assert!(!stack.peek());
}

// === Lookup ===

#[test]
fn missing_name_is_not_found() {
    let mut stack = ScopeStack::new();
    stack.push();
    assert_eq!(stack.search("x"), Err(SymtabError::ItemNotFound));
}

#[test]
fn inner_scope_shadows_outer() {
    let mut stack = ScopeStack::new();
    stack.push();
    let outer = declare(&mut stack, "x", SymbolKind::Integer, true);
    stack.push();
    let inner = declare(&mut stack, "x", SymbolKind::String, true);

    assert_eq!(stack.search("x").unwrap().uid(), inner);
    assert_eq!(stack.is_global("x"), Ok(false));

    stack.pop().unwrap();
    assert_eq!(stack.search("x").unwrap().uid(), outer);
    assert_eq!(stack.is_global("x"), Ok(true));
}

#[test]
fn outer_names_visible_from_inner_scope() {
    let mut stack = ScopeStack::new();
    stack.push();
    declare(&mut stack, "g", SymbolKind::Double, true);
    stack.push();
    stack.push();
    let (sym, depth) = stack.search_with_depth("g").unwrap();
    assert_eq!(sym.kind, SymbolKind::Double);
    assert_eq!(depth, 0);
}

#[test]
fn search_initialized_skips_pending_shadow() {
    let mut stack = ScopeStack::new();
    stack.push();
    let outer = declare(&mut stack, "x", SymbolKind::Integer, true);
    stack.push();
    declare(&mut stack, "x", SymbolKind::Integer, false);

    let (sym, depth) = stack.search_initialized_var("x").unwrap();
    assert_eq!(sym.uid(), outer);
    assert_eq!(depth, 0);
}

#[test]
fn search_initialized_fails_when_nothing_assigned() {
    let mut stack = ScopeStack::new();
    stack.push();
    declare(&mut stack, "x", SymbolKind::Integer, false);
    assert_eq!(
        stack.search_initialized_var("x"),
        Err(SymtabError::ItemNotFound)
    );
    assert!(stack.search("x").is_ok());
}

#[test]
fn search_mut_updates_innermost() {
    let mut stack = ScopeStack::new();
    stack.push();
    declare(&mut stack, "x", SymbolKind::Integer, false);
    stack.push();
    stack
        .search_mut("x")
        .unwrap()
        .flags
        .insert(SymbolFlags::INITIALIZED);
    stack.pop().unwrap();
    assert!(stack.search("x").unwrap().is_initialized());
}

#[test]
fn global_mut_reaches_bottom_frame() {
    let mut stack = ScopeStack::new();
    stack.push();
    stack.push();
    stack.global_mut().unwrap().insert("f").unwrap();
    assert_eq!(stack.is_global("f"), Ok(true));
    assert!(stack.top().unwrap().search("f").is_err());
}
