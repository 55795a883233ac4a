//! Path write tests
//!
//! Covers auto-vivification of interior nodes, unconditional overwrite of the
//! final key, and rejection of writes that would descend through a leaf.

use nestdict::{Error, KeyPath, NestedError, NestedMap, Value, path};

use super::helpers::*;

#[test]
fn test_setter() {
    let mut map = NestedMap::new();
    map.set(path![1, "a", 34], vec![1, 2]).unwrap();
    assert_eq!(map, expected_one_a_34());
    assert_eq!(map.get(path![1, "a", 34]).unwrap(), &Value::from(vec![1, 2]));

    // Overwriting an interior node replaces the whole subtree
    let old = map.set(path![1, "a"], "hello").unwrap();
    assert_eq!(old, Some(Value::Map(NestedMap::new().with(34, vec![1, 2]))));
    assert_eq!(
        map,
        NestedMap::new().with(1, NestedMap::new().with("a", "hello"))
    );
}

#[test]
fn test_shallow_setter() {
    let mut map = NestedMap::new();
    map.set(1, "a").unwrap();

    let mut plain = NestedMap::new();
    plain.insert(1, "a");
    assert_eq!(map, plain);
    assert_eq!(map.to_string(), "{1: \"a\"}");
}

#[test]
fn test_set_returns_previous_value() {
    let mut map = NestedMap::new();

    assert_eq!(map.set(path!["a", "b"], 1).unwrap(), None);
    assert_eq!(map.set(path!["a", "b"], 2).unwrap(), Some(Value::Int(1)));
    assert_eq!(map.set(path!["a", "c"], 3).unwrap(), None);
    assert_eq!(map.get_map("a").unwrap().len(), 2);
}

#[test]
fn test_round_trip_for_various_depths() {
    let paths = [
        path!["x"],
        path!["x2", 1],
        path![true, "deep", 3, "er", 5],
        path![-1, -2, -3, -4, -5, -6, -7, -8],
    ];

    let mut map = NestedMap::new();
    for (i, path) in paths.iter().enumerate() {
        map.set(path, i as i64).unwrap();
        assert_eq!(map.get(path).unwrap(), &Value::Int(i as i64));
    }
    for (i, path) in paths.iter().enumerate() {
        assert_eq!(map.get_as::<i64>(path).unwrap(), Some(i as i64));
    }
}

#[test]
fn test_prefixes_resolve_to_subtrees() {
    let path = path!["p", 1, "q", 2, "leaf"];
    let mut map = NestedMap::new();
    map.set(&path, "value").unwrap();

    for len in 1..path.len() {
        let prefix = path.prefix(len);
        let subtree = map
            .get_map(&prefix)
            .unwrap_or_else(|e| panic!("Prefix '{prefix}' should be a subtree: {e}"));
        // The remainder of the path is reachable from the subtree
        let rest: KeyPath = path.keys()[len..].iter().cloned().collect();
        assert_eq!(subtree.get(rest).unwrap(), "value");
    }
}

#[test]
fn test_set_through_leaf_is_structural_conflict() {
    let mut map = NestedMap::new();
    map.set(path!["a", "b"], 1).unwrap();

    let err = map.set(path!["a", "b", "c"], 2).unwrap_err();
    match err {
        Error::Nested(NestedError::StructuralConflict { ref path, ref found }) => {
            assert_eq!(path, "a -> b");
            assert_eq!(found, "int");
        }
        ref other => panic!("Expected StructuralConflict, got {other:?}"),
    }
    assert!(err.to_string().contains("a -> b"));

    // The leaf is untouched and nothing was created below it
    assert_eq!(map.get(path!["a", "b"]).unwrap(), &Value::Int(1));
    assert_eq!(map.enumerate_paths(), vec![path!["a", "b"]]);
}

#[test]
fn test_set_through_top_level_leaf() {
    let mut map = NestedMap::new();
    map.set("name", "Alice").unwrap();

    assert!(
        map.set(path!["name", "first"], "A")
            .unwrap_err()
            .is_structural_conflict()
    );
    assert_eq!(map.len(), 1);
}

#[test]
fn test_set_through_list_is_structural_conflict() {
    let mut map = NestedMap::new();
    map.set("items", vec!["x", "y"]).unwrap();

    assert!(
        map.set(path!["items", 0], "z")
            .unwrap_err()
            .is_structural_conflict()
    );
}

#[test]
fn test_final_key_always_overwrites() {
    let mut map = NestedMap::new();
    map.set(path!["a", "b", "c"], 1).unwrap();

    // Replace a subtree by a leaf, then the leaf by a subtree
    map.set("a", 5).unwrap();
    assert_eq!(map.get("a").unwrap(), &Value::Int(5));

    map.set("a", NestedMap::new().with("z", true)).unwrap();
    assert_eq!(map.get_as::<bool>(path!["a", "z"]).unwrap(), Some(true));
}

#[test]
fn test_stored_map_becomes_part_of_tree() {
    let inner = NestedMap::new().with("x", 1);
    let mut map = NestedMap::new();
    map.set("outer", inner).unwrap();

    map.set(path!["outer", "y"], 2).unwrap();
    assert_eq!(map.enumerate_paths(), vec![path!["outer", "x"], path!["outer", "y"]]);
}

#[test]
fn test_set_empty_path_is_rejected() {
    let mut map = NestedMap::new();

    let err = map.set(path![], 1).unwrap_err();
    assert!(err.is_usage_error());
    assert!(map.is_empty());
}

#[test]
fn test_from_pairs_and_builder() {
    let map = NestedMap::from_pairs([(path![1, "a", 34], vec![1, 2])]).unwrap();
    assert_eq!(map, expected_one_a_34());

    let built = NestedMap::new()
        .with_path(path![1, "a", 34], vec![1, 2])
        .unwrap();
    assert_eq!(built, map);

    assert!(
        NestedMap::from_pairs([(path!["a"], 1), (path!["a", "b"], 2)])
            .unwrap_err()
            .is_structural_conflict()
    );
}

#[test]
fn test_set_with_index_keys() {
    let items = ["x", "y"];
    let mut map = NestedMap::new();
    map.set(items.len(), "count").unwrap();
    for (i, item) in items.iter().enumerate() {
        map.set(path!["items", i], *item).unwrap();
    }

    assert_eq!(map.get(2).unwrap(), "count");
    assert_eq!(map.get(path!["items", 1]).unwrap(), "y");
    assert_eq!(map.get(path!["items", 0usize]).unwrap(), "x");
}
