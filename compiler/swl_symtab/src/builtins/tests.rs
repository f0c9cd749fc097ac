use super::*;
use pretty_assertions::assert_eq;

fn registered() -> ScopeStack {
    let mut stack = ScopeStack::new();
    stack.push();
    register(&mut stack).unwrap();
    stack
}

#[test]
fn register_needs_a_scope() {
    let mut stack = ScopeStack::new();
    assert_eq!(register(&mut stack), Err(SymtabError::NotInitialized));
}

#[test]
fn every_builtin_is_a_defined_global_function() {
    let mut stack = registered();
    stack.push();
    for builtin in BUILTINS {
        let (sym, depth) = stack.search_with_depth(builtin.name).unwrap();
        assert!(sym.is_function(), "{}", builtin.name);
        assert!(sym.flags.contains(SymbolFlags::FUNC_DEFINED));
        assert_eq!(depth, 0);
    }
}

#[test]
fn substring_signature() {
    let stack = registered();
    let table = stack.top().unwrap();
    assert_eq!(
        table.get_return_type("substring"),
        Ok((SymbolKind::String, true))
    );
    let labels: Vec<_> = table
        .search("substring")
        .unwrap()
        .params
        .iter()
        .map(|p| (p.label.as_str(), p.name.as_str(), p.ty))
        .collect();
    assert_eq!(
        labels,
        [
            ("of", "s", SymbolKind::String),
            ("startingAt", "i", SymbolKind::Integer),
            ("endingBefore", "j", SymbolKind::Integer),
        ]
    );
}

#[test]
fn read_functions_return_nilable() {
    let stack = registered();
    let table = stack.top().unwrap();
    assert_eq!(table.get_return_type("readInt"), Ok((SymbolKind::Integer, true)));
    assert_eq!(table.get_return_type("readDouble"), Ok((SymbolKind::Double, true)));
    assert_eq!(table.get_return_type("chr"), Ok((SymbolKind::String, false)));
}

#[test]
fn registering_twice_collides() {
    let mut stack = registered();
    assert_eq!(register(&mut stack), Err(SymtabError::AlreadyStored));
}

#[test]
fn find_by_name() {
    assert!(find("write").unwrap().variadic);
    assert!(!find("ord").unwrap().variadic);
    assert!(find("print").is_none());
}
