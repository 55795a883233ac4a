//! Path read tests
//!
//! Covers `get`, `get_or`, `get_opt`, `get_mut`, the typed accessors, and the
//! distinction between a missing key and a path that runs through a leaf.

use nestdict::{Error, Key, KeyPath, NestedError, NestedMap, Value, path};

use super::helpers::*;

// ===== BASIC READS =====

#[test]
fn test_get_nested_and_subtree() {
    let mut map = NestedMap::new();
    map.set(path!["a", "b", "c"], "hello").unwrap();
    map.set(path!["a", "b", "d"], "goodbye").unwrap();

    assert_eq!(map.get(path!["a", "b", "c"]).unwrap(), "hello");

    let subtree = map.get(path!["a", "b"]).unwrap();
    let expected = NestedMap::new().with("c", "hello").with("d", "goodbye");
    assert_eq!(subtree, &Value::Map(expected));
}

#[test]
fn test_shallow_get() {
    let mut map = NestedMap::new();
    map.set(path![1, 2, 3], 4).unwrap();

    let expected = NestedMap::new().with(2, NestedMap::new().with(3, 4));
    assert_eq!(map.get(1).unwrap(), &Value::Map(expected));

    assert!(map.get(2).unwrap_err().is_not_found());
    let fallback = Value::from("arbitrary");
    assert_eq!(map.get_or(2, &fallback).unwrap(), &fallback);
    assert_eq!(map.get_opt(2).unwrap(), None);
}

#[test]
fn test_nested_get_with_default() {
    let mut map = NestedMap::new();
    map.set(path![1, 2, 3], 4).unwrap();

    // 1 exists, but 1 -> 3 does not
    assert!(map.get_opt(path![1, 3]).unwrap().is_none());
    let fallback = Value::from("arbitrary");
    assert_eq!(map.get_or(path![1, 3], &fallback).unwrap(), "arbitrary");
    assert_eq!(map.get(path![1, 2, 3]).unwrap(), &Value::Int(4));
}

#[test]
fn test_missing_intermediate_key_uses_default() {
    let map = NestedMap::new();
    let fallback = Value::Null;

    assert_eq!(map.get_or(path!["x", "y", "z"], &fallback).unwrap(), &Value::Null);
    let err = map.get(path!["x", "y", "z"]).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.as_nested().and_then(|e| e.path()), Some("x -> y -> z"));
}

// ===== ERRORS =====

#[test]
fn test_get_errors() {
    let mut map = NestedMap::new();
    map.set(path!["a", "b", "c"], 23).unwrap();

    // Missing keys
    assert!(map.get(path!["a", "c"]).unwrap_err().is_not_found());
    assert!(map.get("b").unwrap_err().is_not_found());

    // Descending past the leaf 23
    let err = map.get(path!["a", "b", "c", "d"]).unwrap_err();
    assert!(err.is_structural_conflict());
    match err {
        Error::Nested(NestedError::StructuralConflict { path, found }) => {
            assert_eq!(path, "a -> b -> c");
            assert_eq!(found, "int");
        }
        other => panic!("Expected StructuralConflict, got {other:?}"),
    }
}

#[test]
fn test_default_does_not_hide_structural_conflict() {
    let mut map = NestedMap::new();
    map.set(path!["a", "b", "c"], 23).unwrap();

    let fallback = Value::from("default");
    let err = map.get_or(path!["a", "b", "c", "d"], &fallback).unwrap_err();
    assert!(err.is_structural_conflict());
    assert!(
        map.get_opt(path!["a", "b", "c", "d"])
            .unwrap_err()
            .is_structural_conflict()
    );
    assert!(
        map.get_as::<i64>(path!["a", "b", "c", "d"])
            .unwrap_err()
            .is_structural_conflict()
    );
    assert!(
        map.contains_path(path!["a", "b", "c", "d"])
            .unwrap_err()
            .is_structural_conflict()
    );
}

#[test]
fn test_empty_path_is_rejected() {
    let map = NestedMap::new().with("a", 1);

    let err = map.get(KeyPath::new()).unwrap_err();
    assert!(err.is_usage_error());
    assert!(matches!(
        err,
        Error::Nested(NestedError::InvalidPath { .. })
    ));
    assert!(map.get_opt(path![]).unwrap_err().is_usage_error());
}

#[test]
fn test_lists_are_leaves() {
    let mut map = NestedMap::new();
    map.set("items", vec![1, 2, 3]).unwrap();

    let err = map.get(path!["items", 0]).unwrap_err();
    assert!(err.is_structural_conflict());
}

// ===== KEY TYPES =====

#[test]
fn test_string_key_is_never_split() {
    let mut map = NestedMap::new();
    map.set("a.b", 1).unwrap();
    map.set(path!["a", "b"], 2).unwrap();

    assert_eq!(map.get("a.b").unwrap(), &Value::Int(1));
    assert_eq!(map.get(path!["a", "b"]).unwrap(), &Value::Int(2));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_tuple_key_is_a_single_level() {
    let pair = Key::tuple([Key::from(1), Key::from("a")]);
    let mut map = NestedMap::new();
    map.set(pair.clone(), "tuple").unwrap();

    assert_eq!(map.get(pair.clone()).unwrap(), "tuple");
    assert!(map.get(path![1, "a"]).unwrap_err().is_not_found());
    assert_eq!(map.enumerate_paths(), vec![KeyPath::from(pair)]);
}

// ===== MUTABLE AND TYPED ACCESS =====

#[test]
fn test_get_mut_extends_live_list() {
    let mut map = NestedMap::new();
    map.set(path![1, "a", 34], vec![1, 2]).unwrap();

    map.get_mut(path![1, "a", 34])
        .unwrap()
        .as_list_mut()
        .unwrap()
        .extend([Value::from(4), Value::from(3)]);

    let expected = NestedMap::new().with(
        1,
        NestedMap::new().with("a", NestedMap::new().with(34, vec![1, 2, 4, 3])),
    );
    assert_eq!(map, expected);
}

#[test]
fn test_get_mut_errors_match_get() {
    let mut map = NestedMap::new();
    map.set(path!["a", "b"], 1).unwrap();

    assert!(map.get_mut(path!["a", "x"]).unwrap_err().is_not_found());
    assert!(map.get_mut(path!["z"]).unwrap_err().is_not_found());
    assert!(
        map.get_mut(path!["a", "b", "c"])
            .unwrap_err()
            .is_structural_conflict()
    );
}

#[test]
fn test_get_map_accessors() {
    let mut map = setup_branching_map();

    let a = map.get_map("a").unwrap();
    assert_eq!(a.len(), 2);
    assert!(map.get_map("e").unwrap_err().is_type_error());

    map.get_map_mut(path!["a", "b"]).unwrap().insert("new", true);
    assert_eq!(map.get_as::<bool>(path!["a", "b", "new"]).unwrap(), Some(true));
    assert!(map.get_map_mut("e").unwrap_err().is_type_error());
}

#[test]
fn test_get_as_conversions() {
    let mut map = NestedMap::new();
    map.set(path!["user", "name"], "Alice").unwrap();
    map.set(path!["user", "age"], 30).unwrap();
    map.set(path!["user", "score"], 9.5).unwrap();

    assert_eq!(
        map.get_as::<String>(path!["user", "name"]).unwrap(),
        Some("Alice".to_string())
    );
    assert_eq!(map.get_as::<i64>(path!["user", "age"]).unwrap(), Some(30));
    assert_eq!(map.get_as::<f64>(path!["user", "score"]).unwrap(), Some(9.5));
    assert_eq!(map.get_as::<i64>(path!["user", "name"]).unwrap(), None);
    assert_eq!(map.get_as::<i64>(path!["user", "missing"]).unwrap(), None);
    assert!(map.get_as::<&NestedMap>("user").unwrap().is_some());
}

#[test]
fn test_contains_path() {
    let map = setup_branching_map();

    assert!(map.contains_path(path!["a", "b", "d"]).unwrap());
    assert!(map.contains_path(path!["a", "b"]).unwrap());
    assert!(!map.contains_path(path!["a", "b", "x"]).unwrap());
    assert!(!map.contains_path(path!["e", "x"]).unwrap());
}
