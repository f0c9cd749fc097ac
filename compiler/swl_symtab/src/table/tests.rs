use super::*;
use crate::hash::primary_index;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("v{i}")).collect()
}

/// Two distinct names sharing a home slot in a table of `size`.
fn colliding_pair(size: usize) -> (String, String) {
    let first = "a".to_string();
    let home = primary_index(&first, size);
    let second = (0..)
        .map(|i| format!("b{i}"))
        .find(|name| primary_index(name, size) == home)
        .unwrap();
    (first, second)
}

// === Insert / search ===

#[test]
fn new_table_is_empty() {
    let table = SymbolTable::new();
    assert_eq!(table.capacity(), 11);
    assert_eq!(table.len(), 0);
    assert!(table.is_empty());
    assert_eq!(table.search("x"), Err(SymtabError::ItemNotFound));
}

#[test]
fn insert_then_search() {
    let mut table = SymbolTable::new();
    table.insert("x").unwrap().kind = SymbolKind::Integer;
    let sym = table.search("x").unwrap();
    assert_eq!(sym.name(), "x");
    assert_eq!(sym.kind, SymbolKind::Integer);
    assert_eq!(table.len(), 1);
}

#[test]
fn duplicate_insert_is_rejected() {
    let mut table = SymbolTable::new();
    table.insert("x").unwrap();
    assert_eq!(table.insert("x").err(), Some(SymtabError::AlreadyStored));
    assert_eq!(table.len(), 1);
}

#[test]
fn uids_increase_with_each_insert() {
    let mut table = SymbolTable::new();
    let a = table.insert("a").unwrap().uid();
    let b = table.insert("b").unwrap().uid();
    assert!(b > a);
}

#[test]
fn colliding_names_are_both_found() {
    let (first, second) = colliding_pair(11);
    let mut table = SymbolTable::new();
    table.insert(&first).unwrap().kind = SymbolKind::Integer;
    table.insert(&second).unwrap().kind = SymbolKind::String;
    assert_eq!(table.get_type(&first), Ok(SymbolKind::Integer));
    assert_eq!(table.get_type(&second), Ok(SymbolKind::String));
}

// === Delete ===

#[test]
fn deleted_entry_is_not_found() {
    let mut table = SymbolTable::new();
    table.insert("x").unwrap();
    table.delete("x").unwrap();
    assert_eq!(table.search("x"), Err(SymtabError::ItemNotFound));
    assert_eq!(table.tombstones(), 1);
    assert_eq!(table.len(), 0);
    assert_eq!(table.delete("x"), Err(SymtabError::ItemNotFound));
}

#[test]
fn tombstone_keeps_probe_chain_intact() {
    let (first, second) = colliding_pair(11);
    let mut table = SymbolTable::new();
    table.insert(&first).unwrap();
    table.insert(&second).unwrap();
    table.delete(&first).unwrap();
    assert!(table.search(&second).is_ok());
}

#[test]
fn name_can_be_reinserted_after_delete() {
    let mut table = SymbolTable::new();
    let old = table.insert("x").unwrap().uid();
    table.delete("x").unwrap();
    let new = table.insert("x").unwrap().uid();
    assert_ne!(old, new);
    assert_eq!(table.search("x").unwrap().uid(), new);
}

#[test]
fn tombstone_slot_is_not_reused() {
    let mut table = SymbolTable::new();
    table.insert("x").unwrap();
    table.delete("x").unwrap();
    table.insert("x").unwrap();
    assert_eq!(table.tombstones(), 1);
    assert_eq!(table.len(), 1);
    assert_eq!(table.iter().count(), 1);
}

// === Resize ===

#[test]
fn eighth_insert_grows_to_next_prime() {
    let mut table = SymbolTable::new();
    for name in names(7) {
        table.insert(&name).unwrap();
    }
    assert_eq!(table.capacity(), 11);
    table.insert("v7").unwrap();
    assert_eq!(table.capacity(), 23);
    for name in names(8) {
        assert!(table.search(&name).is_ok(), "{name} lost in resize");
    }
}

#[test]
fn resize_discards_tombstones() {
    let mut table = SymbolTable::new();
    for name in names(5) {
        table.insert(&name).unwrap();
    }
    table.delete("v1").unwrap();
    table.delete("v3").unwrap();
    table.resize();
    assert_eq!(table.capacity(), 23);
    assert_eq!(table.tombstones(), 0);
    assert_eq!(table.len(), 3);
    assert_eq!(table.search("v1"), Err(SymtabError::ItemNotFound));
    assert_eq!(table.search("v3"), Err(SymtabError::ItemNotFound));
    assert!(table.search("v4").is_ok());
}

#[test]
fn many_inserts_stay_below_load_limit() {
    let mut table = SymbolTable::new();
    for name in names(500) {
        table.insert(&name).unwrap();
    }
    assert_eq!(table.len(), 500);
    assert!(table.load_factor() <= MAX_LOAD_FACTOR);
    assert_eq!(table.iter().count(), 500);
}

// === Accessors ===

#[test]
fn variable_accessors() {
    let mut table = SymbolTable::new();
    table.insert("x").unwrap();
    table.set_type("x", SymbolKind::Double).unwrap();
    table.set_mutability("x", true).unwrap();
    table.set_nillable("x", true).unwrap();
    table.set_initialized("x", true).unwrap();

    assert_eq!(table.get_type("x"), Ok(SymbolKind::Double));
    assert_eq!(table.get_mutability("x"), Ok(true));
    assert_eq!(table.get_nillable("x"), Ok(true));
    assert_eq!(table.is_initialized("x"), Ok(true));

    table.set_nillable("x", false).unwrap();
    assert_eq!(table.get_nillable("x"), Ok(false));
}

#[test]
fn variable_accessors_reject_functions() {
    let mut table = SymbolTable::new();
    table.insert("f").unwrap().kind = SymbolKind::Function;
    assert_eq!(
        table.set_mutability("f", true),
        Err(SymtabError::ItemIsFunction)
    );
    assert_eq!(table.get_nillable("f"), Err(SymtabError::ItemIsFunction));
}

#[test]
fn function_accessors_reject_variables() {
    let mut table = SymbolTable::new();
    table.insert("x").unwrap().kind = SymbolKind::Integer;
    assert_eq!(
        table.set_return_type("x", SymbolKind::Integer, false),
        Err(SymtabError::ItemNotFunction)
    );
    assert_eq!(
        table.add_param("x", Param::new("a", "_")),
        Err(SymtabError::ItemNotFunction)
    );
}

#[test]
fn function_signature() {
    let mut table = SymbolTable::new();
    table.insert("f").unwrap().kind = SymbolKind::Function;
    table.set_func_definition("f", true).unwrap();
    table
        .set_return_type("f", SymbolKind::String, true)
        .unwrap();
    table.add_param("f", Param::new("a", "with")).unwrap();
    table.add_param("f", Param::new("b", "_")).unwrap();
    table.set_param_type("f", "a", SymbolKind::Integer).unwrap();
    table.set_param_nil("f", "b", true).unwrap();
    table.set_param_label("f", "b", "and").unwrap();

    assert_eq!(table.get_func_definition("f"), Ok(true));
    assert_eq!(table.get_return_type("f"), Ok((SymbolKind::String, true)));
    assert_eq!(table.get_param_type("f", "a"), Ok(SymbolKind::Integer));
    assert_eq!(table.get_param_label("f", "a"), Ok("with"));
    assert_eq!(table.get_param_label("f", "b"), Ok("and"));
    assert_eq!(table.get_param_nil("f", "b"), Ok(true));
    assert_eq!(table.get_param_nil("f", "a"), Ok(false));

    let params: Vec<_> = table
        .search("f")
        .unwrap()
        .params
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(params, ["a", "b"]);
}

#[test]
fn param_errors() {
    let mut table = SymbolTable::new();
    table.insert("f").unwrap().kind = SymbolKind::Function;
    table.add_param("f", Param::new("a", "_")).unwrap();
    assert_eq!(
        table.add_param("f", Param::new("a", "x")),
        Err(SymtabError::AlreadyStored)
    );
    assert_eq!(
        table.get_param_type("f", "zz"),
        Err(SymtabError::ParamNotFound)
    );
    assert_eq!(
        table.get_param_type("g", "a"),
        Err(SymtabError::ItemNotFound)
    );
}

// === Properties ===

proptest! {
    #[test]
    fn inserted_names_survive_growth(
        set in proptest::collection::hash_set("[a-z_][a-z0-9_]{0,6}", 1..120)
    ) {
        let mut table = SymbolTable::new();
        for name in &set {
            table.insert(name).unwrap();
        }
        prop_assert_eq!(table.len(), set.len());
        for name in &set {
            prop_assert_eq!(table.search(name).unwrap().name(), name.as_str());
        }
    }

    #[test]
    fn deleted_names_stay_deleted(
        set in proptest::collection::hash_set("[a-z]{1,5}", 2..60)
    ) {
        let mut table = SymbolTable::new();
        let names: Vec<_> = set.into_iter().collect();
        let (gone, kept) = names.split_at(names.len() / 2);
        for name in gone {
            table.insert(name).unwrap();
            table.delete(name).unwrap();
        }
        for name in kept {
            table.insert(name).unwrap();
        }
        table.resize();
        for name in gone {
            prop_assert!(table.search(name).is_err());
        }
        for name in kept {
            prop_assert!(table.search(name).is_ok());
        }
    }
}
