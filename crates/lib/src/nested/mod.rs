//! Nested maps addressed by key paths.
//!
//! This module provides [`NestedMap`], a dictionary whose values may themselves
//! be nested maps, together with path-oriented operations that read or write
//! at arbitrary depth in a single call.
//!
//! # Usage
//!
//! ```
//! use nestdict::{NestedMap, path};
//!
//! let mut map = NestedMap::new();
//! map.set(path![1, "a", 34], vec![1, 2])?;
//!
//! assert_eq!(map.to_string(), "{1: {\"a\": {34: [1, 2]}}}");
//! assert_eq!(map.get(path![1, "a", 34])?, &nestdict::Value::from(vec![1, 2]));
//!
//! // Overwriting an interior node replaces the whole subtree
//! map.set(path![1, "a"], "hello")?;
//! assert_eq!(map.to_string(), "{1: {\"a\": \"hello\"}}");
//! # Ok::<(), nestdict::Error>(())
//! ```
//!
//! # Thread safety
//!
//! `NestedMap` owns plain data and offers no internal synchronization.
//! Sharing one map between threads for mutation requires external locking.

use std::fmt;

use indexmap::{IndexMap, map::Entry};
use tracing::{debug, trace};

pub mod errors;
pub mod key;
pub mod path;
pub mod value;

pub use errors::NestedError;
pub use key::Key;
pub use path::KeyPath;
pub use value::Value;

// Re-export the macro from crate root
pub use crate::path;

/// A map from [`Key`] to [`Value`] where values may be nested maps.
///
/// # Core Operations
///
/// - **Path access**: [`get`](Self::get), [`get_or`](Self::get_or),
///   [`get_opt`](Self::get_opt), [`get_mut`](Self::get_mut)
/// - **Path writes**: [`set`](Self::set), creating missing interior nodes
/// - **Enumeration**: [`enumerate_paths`](Self::enumerate_paths),
///   [`leaves`](Self::leaves)
/// - **Merging**: [`merge`](Self::merge) (path-aware) and
///   [`update`](Self::update) (top level only)
/// - **Single-level access**: [`contains_key`](Self::contains_key),
///   [`remove`](Self::remove), [`len`](Self::len), [`iter`](Self::iter)
///
/// Returned references point into the live tree; clone them to keep a
/// snapshot. Top-level iteration follows insertion order. Equality is
/// mapping equality and ignores order.
///
/// # Examples
///
/// ```
/// # use nestdict::{NestedMap, path};
/// let mut map = NestedMap::new();
/// map.set(path![1, 2, 3], 4)?;
///
/// assert_eq!(map.get(1)?.to_string(), "{2: {3: 4}}");
/// assert!(map.get(2).is_err());
/// assert!(map.get_opt(path![1, 3])?.is_none());
///
/// // Descending past a leaf is a structural conflict, not a missing key
/// let err = map.get(path![1, 2, 3, 4]).unwrap_err();
/// assert!(err.is_structural_conflict());
/// # Ok::<(), nestdict::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NestedMap {
    /// Child nodes in insertion order
    children: IndexMap<Key, Value>,
}

/// Input accepted by [`NestedMap::merge`].
///
/// Exactly one source is merged per call.
#[derive(Debug, Clone, PartialEq)]
pub enum MergeSource {
    /// Another nested map, merged recursively into shared interior nodes
    Map(NestedMap),
    /// Path/value pairs written in order with [`NestedMap::set`]
    Pairs(Vec<(KeyPath, Value)>),
    /// Top-level entries, inserted without path decomposition
    Entries(Vec<(Key, Value)>),
}

impl MergeSource {
    /// Builds a [`MergeSource::Pairs`] from any iterator of path/value pairs.
    pub fn pairs<P, V>(pairs: impl IntoIterator<Item = (P, V)>) -> Self
    where
        P: Into<KeyPath>,
        V: Into<Value>,
    {
        MergeSource::Pairs(
            pairs
                .into_iter()
                .map(|(path, value)| (path.into(), value.into()))
                .collect(),
        )
    }

    /// Builds a [`MergeSource::Entries`] from any iterator of key/value pairs.
    pub fn entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        MergeSource::Entries(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    fn kind(&self) -> &'static str {
        match self {
            MergeSource::Map(_) => "map",
            MergeSource::Pairs(_) => "pairs",
            MergeSource::Entries(_) => "entries",
        }
    }
}

impl From<NestedMap> for MergeSource {
    fn from(map: NestedMap) -> Self {
        MergeSource::Map(map)
    }
}

impl From<&NestedMap> for MergeSource {
    fn from(map: &NestedMap) -> Self {
        MergeSource::Map(map.clone())
    }
}

impl From<Vec<(KeyPath, Value)>> for MergeSource {
    fn from(pairs: Vec<(KeyPath, Value)>) -> Self {
        MergeSource::Pairs(pairs)
    }
}

fn empty_path() -> NestedError {
    NestedError::InvalidPath {
        reason: "empty path (at least one key is required)".to_string(),
    }
}

fn not_found(path: &KeyPath) -> NestedError {
    NestedError::KeyNotFound {
        path: path.to_string(),
    }
}

fn conflict(path: &KeyPath, depth: usize, found: &Value) -> NestedError {
    NestedError::StructuralConflict {
        path: path.prefix(depth + 1).to_string(),
        found: found.type_name().to_string(),
    }
}

impl NestedMap {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self {
            children: IndexMap::new(),
        }
    }

    /// Builds a map by writing each path/value pair with [`set`](Self::set).
    ///
    /// ```
    /// # use nestdict::{NestedMap, path};
    /// let map = NestedMap::from_pairs([(path!["a", "b"], 1), (path!["a", "c"], 2)])?;
    /// assert_eq!(map.to_string(), "{\"a\": {\"b\": 1, \"c\": 2}}");
    /// # Ok::<(), nestdict::Error>(())
    /// ```
    pub fn from_pairs<P, V>(pairs: impl IntoIterator<Item = (P, V)>) -> crate::Result<Self>
    where
        P: Into<KeyPath>,
        V: Into<Value>,
    {
        let mut map = Self::new();
        for (path, value) in pairs {
            map.set(path, value)?;
        }
        Ok(map)
    }

    // ===== Path operations =====

    /// Follows `path` without mutating the tree.
    ///
    /// `Ok(None)` means a key along the path is missing. Descending through a
    /// leaf is an error.
    fn lookup(&self, path: &KeyPath) -> Result<Option<&Value>, NestedError> {
        let (last, parents) = path.split_last().ok_or_else(empty_path)?;

        let mut node = self;
        for (depth, key) in parents.iter().enumerate() {
            match node.children.get(key) {
                Some(Value::Map(child)) => node = child,
                Some(leaf) => return Err(conflict(path, depth, leaf)),
                None => return Ok(None),
            }
        }

        Ok(node.children.get(last))
    }

    /// Gets the value or subtree stored at `path`.
    ///
    /// # Errors
    ///
    /// - [`NestedError::KeyNotFound`] if any key along the path is missing
    /// - [`NestedError::StructuralConflict`] if the path continues past a leaf
    /// - [`NestedError::InvalidPath`] if the path is empty
    pub fn get(&self, path: impl Into<KeyPath>) -> crate::Result<&Value> {
        let path = path.into();
        match self.lookup(&path)? {
            Some(value) => Ok(value),
            None => Err(not_found(&path).into()),
        }
    }

    /// Gets the value at `path`, or `default` if a key along the path is
    /// missing.
    ///
    /// Structural conflicts are still reported: the default only stands in
    /// for absent keys.
    ///
    /// ```
    /// # use nestdict::{NestedMap, Value, path};
    /// let mut map = NestedMap::new();
    /// map.set(path!["a", "b"], 1)?;
    ///
    /// let fallback = Value::from("arbitrary");
    /// assert_eq!(map.get_or(path!["a", "c"], &fallback)?, &fallback);
    /// assert!(map.get_or(path!["a", "b", "c"], &fallback).is_err());
    /// # Ok::<(), nestdict::Error>(())
    /// ```
    pub fn get_or<'a>(
        &'a self,
        path: impl Into<KeyPath>,
        default: &'a Value,
    ) -> crate::Result<&'a Value> {
        let path = path.into();
        Ok(self.lookup(&path)?.unwrap_or(default))
    }

    /// Gets the value at `path`, or `None` if a key along the path is missing.
    ///
    /// Structural conflicts and empty paths are still errors.
    ///
    /// ```
    /// # use nestdict::{NestedMap, path};
    /// let mut map = NestedMap::new();
    /// map.set(path!["a", "b"], 1)?;
    ///
    /// assert!(map.get_opt(path!["a", "c"])?.is_none());
    /// assert!(map.get_opt(path!["a", "b", "c"]).is_err());
    /// # Ok::<(), nestdict::Error>(())
    /// ```
    pub fn get_opt(&self, path: impl Into<KeyPath>) -> crate::Result<Option<&Value>> {
        Ok(self.lookup(&path.into())?)
    }

    /// Gets a mutable reference to the value or subtree stored at `path`.
    ///
    /// Follows the same error rules as [`get`](Self::get).
    ///
    /// ```
    /// # use nestdict::{NestedMap, Value, path};
    /// let mut map = NestedMap::new();
    /// map.set(path![1, "a", 34], vec![1, 2])?;
    ///
    /// if let Value::List(items) = map.get_mut(path![1, "a", 34])? {
    ///     items.extend([Value::from(4), Value::from(3)]);
    /// }
    /// assert_eq!(map.get(path![1, "a", 34])?.to_string(), "[1, 2, 4, 3]");
    /// # Ok::<(), nestdict::Error>(())
    /// ```
    pub fn get_mut(&mut self, path: impl Into<KeyPath>) -> crate::Result<&mut Value> {
        let path = path.into();
        let (last, parents) = path.split_last().ok_or_else(empty_path)?;

        let mut node = self;
        for (depth, key) in parents.iter().enumerate() {
            node = match node.children.get_mut(key) {
                Some(Value::Map(child)) => child,
                Some(leaf) => return Err(conflict(&path, depth, leaf).into()),
                None => return Err(not_found(&path).into()),
            };
        }

        match node.children.get_mut(last) {
            Some(value) => Ok(value),
            None => Err(not_found(&path).into()),
        }
    }

    /// Gets the subtree stored at `path`.
    ///
    /// Fails with [`NestedError::TypeMismatch`] if the value is a leaf.
    pub fn get_map(&self, path: impl Into<KeyPath>) -> crate::Result<&NestedMap> {
        let value = self.get(path)?;
        Ok(<&NestedMap>::try_from(value)?)
    }

    /// Gets the subtree stored at `path` for in-place modification.
    pub fn get_map_mut(&mut self, path: impl Into<KeyPath>) -> crate::Result<&mut NestedMap> {
        match self.get_mut(path)? {
            Value::Map(map) => Ok(map),
            other => Err(NestedError::TypeMismatch {
                expected: "map".to_string(),
                actual: other.type_name().to_string(),
            }
            .into()),
        }
    }

    /// Gets a value by path with automatic type conversion using TryFrom
    ///
    /// Returns `Ok(None)` if a key along the path is missing or the value has
    /// a different type. Structural conflicts are errors, as in
    /// [`get_opt`](Self::get_opt).
    ///
    /// ```
    /// # use nestdict::{NestedMap, path};
    /// let mut map = NestedMap::new();
    /// map.set(path!["user", "name"], "Alice")?;
    /// map.set(path!["user", "age"], 30)?;
    ///
    /// assert_eq!(map.get_as::<&str>(path!["user", "name"])?, Some("Alice"));
    /// assert_eq!(map.get_as::<i64>(path!["user", "age"])?, Some(30));
    /// assert_eq!(map.get_as::<i64>(path!["user", "name"])?, None);
    /// assert!(map.get_as::<i64>(path!["user", "age", "years"]).is_err());
    /// # Ok::<(), nestdict::Error>(())
    /// ```
    pub fn get_as<'a, T>(&'a self, path: impl Into<KeyPath>) -> crate::Result<Option<T>>
    where
        T: TryFrom<&'a Value, Error = NestedError>,
    {
        Ok(self
            .get_opt(path)?
            .and_then(|value| T::try_from(value).ok()))
    }

    /// Returns true if a value is stored at `path`.
    ///
    /// Fails with [`NestedError::StructuralConflict`] if the path continues
    /// past a leaf.
    pub fn contains_path(&self, path: impl Into<KeyPath>) -> crate::Result<bool> {
        Ok(self.get_opt(path)?.is_some())
    }

    /// Sets `value` at `path`, creating missing interior nodes.
    ///
    /// The final key is always overwritten, whether it held a leaf or a
    /// subtree; the previous value is returned. Intermediate keys must be
    /// absent or hold nested maps.
    ///
    /// # Errors
    ///
    /// - [`NestedError::StructuralConflict`] if an intermediate key holds a
    ///   leaf. The map is left unchanged.
    /// - [`NestedError::InvalidPath`] if the path is empty.
    pub fn set(
        &mut self,
        path: impl Into<KeyPath>,
        value: impl Into<Value>,
    ) -> crate::Result<Option<Value>> {
        let path = path.into();
        let value = value.into();
        let (last, parents) = path.split_last().ok_or_else(empty_path)?;
        trace!(path = %path, kind = value.type_name(), "setting nested value");

        // Conflicts can only occur while walking existing nodes, so nothing
        // is created before a conflict is detected.
        let mut node = self;
        for (depth, key) in parents.iter().enumerate() {
            node = match node.children.entry(key.clone()) {
                Entry::Occupied(entry) => match entry.into_mut() {
                    Value::Map(child) => child,
                    leaf => {
                        let err = conflict(&path, depth, leaf);
                        debug!(path = %path, error = %err, "rejected write through leaf");
                        return Err(err.into());
                    }
                },
                Entry::Vacant(entry) => {
                    entry.insert(Self::vivify(&parents[depth + 1..], last, value));
                    return Ok(None);
                }
            };
        }

        Ok(node.children.insert(last.clone(), value))
    }

    /// Builds the chain of fresh interior nodes for `rest`, ending in `value`
    /// stored under `last`.
    fn vivify(rest: &[Key], last: &Key, value: Value) -> Value {
        let mut leaf_parent = NestedMap::new();
        leaf_parent.children.insert(last.clone(), value);

        rest.iter()
            .rev()
            .fold(Value::Map(leaf_parent), |subtree, key| {
                let mut node = NestedMap::new();
                node.children.insert(key.clone(), subtree);
                Value::Map(node)
            })
    }

    /// Returns every path from the root to a leaf.
    ///
    /// Paths are produced depth-first in insertion order; callers should only
    /// rely on the set of paths. Empty subtrees have no leaves and contribute
    /// no path.
    ///
    /// ```
    /// # use nestdict::{NestedMap, path};
    /// let mut map = NestedMap::new();
    /// map.set(path!["a", "b", "d"], 1)?;
    /// map.set(path!["a", "c"], 2)?;
    /// map.set("e", 2)?;
    ///
    /// assert_eq!(
    ///     map.enumerate_paths(),
    ///     vec![path!["a", "b", "d"], path!["a", "c"], path!["e"]]
    /// );
    /// # Ok::<(), nestdict::Error>(())
    /// ```
    pub fn enumerate_paths(&self) -> Vec<KeyPath> {
        self.leaves().into_iter().map(|(path, _)| path).collect()
    }

    /// Returns every leaf together with its path.
    pub fn leaves(&self) -> Vec<(KeyPath, &Value)> {
        let mut out = Vec::new();
        let mut prefix = Vec::new();
        self.collect_leaves(&mut prefix, &mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, prefix: &mut Vec<Key>, out: &mut Vec<(KeyPath, &'a Value)>) {
        for (key, value) in &self.children {
            prefix.push(key.clone());
            match value {
                Value::Map(child) => child.collect_leaves(prefix, out),
                leaf => out.push((KeyPath::from(prefix.as_slice()), leaf)),
            }
            prefix.pop();
        }
    }

    /// Merges `source` into this map.
    ///
    /// - A [`NestedMap`] source is merged recursively: shared interior nodes
    ///   are combined instead of replaced. Where the shapes disagree the
    ///   incoming value wins, so a leaf can be replaced by a subtree and a
    ///   subtree by a leaf. Incoming subtrees without leaves change nothing.
    ///   Unlike path/value pairs, a map source never reports a structural
    ///   conflict.
    /// - Path/value pairs are written in order with [`set`](Self::set); later
    ///   pairs win. If any pair hits a structural conflict, the error is
    ///   returned and the map is left unchanged.
    /// - Top-level entries are inserted as-is without path decomposition.
    ///
    /// ```
    /// # use nestdict::{NestedMap, path};
    /// let mut d = NestedMap::new();
    /// d.set(path![1, 2, 3], vec![1, 2])?;
    /// d.set(path![2, "k"], 16)?;
    ///
    /// let mut e = NestedMap::new();
    /// e.set(path![1, 2, 4], vec![3, 4])?;
    /// e.set(3, "hello")?;
    ///
    /// d.merge(e)?;
    /// assert_eq!(
    ///     d.to_string(),
    ///     "{1: {2: {3: [1, 2], 4: [3, 4]}}, 2: {\"k\": 16}, 3: \"hello\"}"
    /// );
    /// # Ok::<(), nestdict::Error>(())
    /// ```
    pub fn merge(&mut self, source: impl Into<MergeSource>) -> crate::Result<()> {
        let source = source.into();
        trace!(source = source.kind(), "merging into nested map");

        match source {
            MergeSource::Map(other) => {
                self.merge_map(other);
                Ok(())
            }
            MergeSource::Pairs(pairs) => {
                let mut staged = self.clone();
                for (path, value) in pairs {
                    if let Err(err) = staged.set(path, value) {
                        debug!(error = %err, "aborted merge, map left unchanged");
                        return Err(err);
                    }
                }
                *self = staged;
                Ok(())
            }
            MergeSource::Entries(entries) => {
                self.children.extend(entries);
                Ok(())
            }
        }
    }

    fn merge_map(&mut self, other: NestedMap) {
        for (key, incoming) in other.children {
            let subtree = match incoming {
                Value::Map(subtree) => subtree,
                leaf => {
                    self.children.insert(key, leaf);
                    continue;
                }
            };
            // No leaves, nothing to write
            if !subtree.has_leaves() {
                continue;
            }

            let slot = self
                .children
                .entry(key)
                .or_insert_with(|| Value::Map(NestedMap::new()));
            if !slot.is_map() {
                *slot = Value::Map(NestedMap::new());
            }
            if let Value::Map(existing) = slot {
                existing.merge_map(subtree);
            }
        }
    }

    /// Returns true if any leaf is reachable from this map.
    fn has_leaves(&self) -> bool {
        self.children.values().any(|value| match value {
            Value::Map(child) => child.has_leaves(),
            _ => true,
        })
    }

    /// Replaces top-level entries with those of `other`, without recursing.
    ///
    /// Unlike [`merge`](Self::merge), a shared key takes the other map's
    /// subtree wholesale.
    ///
    /// ```
    /// # use nestdict::{NestedMap, path};
    /// let mut d = NestedMap::new();
    /// d.set(path![1, 2, 3], vec![1, 2])?;
    ///
    /// let mut e = NestedMap::new();
    /// e.set(path![1, 2, 4], vec![3, 4])?;
    ///
    /// d.update(e);
    /// assert_eq!(d.to_string(), "{1: {2: {4: [3, 4]}}}");
    /// # Ok::<(), nestdict::Error>(())
    /// ```
    pub fn update(&mut self, other: NestedMap) {
        self.children.extend(other.children);
    }

    // ===== Single-level operations =====

    /// Returns true if this map has no top-level keys
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of top-level keys
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the map contains the given top-level key.
    ///
    /// Composite keys are looked up as a single key, never as a path.
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.children.contains_key(&key.into())
    }

    /// Inserts a value under a top-level key, returning the previous value.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.children.insert(key.into(), value.into())
    }

    /// Removes a top-level key, returning its value if present.
    ///
    /// The order of the remaining keys is preserved.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        self.children.shift_remove(&key.into())
    }

    /// Clears all data from this map
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Returns an iterator over all top-level key-value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.children.iter()
    }

    /// Returns a mutable iterator over all top-level key-value pairs
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Key, &mut Value)> {
        self.children.iter_mut()
    }

    /// Returns an iterator over all top-level keys
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.children.keys()
    }

    /// Returns an iterator over all top-level values
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.children.values()
    }

    // ===== JSON =====

    /// Converts to a `serde_json::Value` object.
    ///
    /// Keys are rendered with their `Display` form.
    pub fn to_json(&self) -> crate::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Converts to a compact JSON string.
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Builds a map from a JSON object.
    ///
    /// Object keys become [`Key::Text`]; nested objects become nested maps.
    ///
    /// # Errors
    ///
    /// [`NestedError::Usage`] if `json` is not an object.
    pub fn from_json(json: serde_json::Value) -> crate::Result<Self> {
        if !json.is_object() {
            return Err(NestedError::Usage {
                reason: format!("expected a JSON object, found {json}"),
            }
            .into());
        }
        Ok(serde_json::from_value(json)?)
    }
}

// Builder pattern methods
impl NestedMap {
    /// Builder method to insert a top-level key and return self
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder method to set a value at a path and return self
    pub fn with_path(
        mut self,
        path: impl Into<KeyPath>,
        value: impl Into<Value>,
    ) -> crate::Result<Self> {
        self.set(path, value)?;
        Ok(self)
    }
}

impl fmt::Display for NestedMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            key.write_literal(f)?;
            write!(f, ": {value}")?;
        }
        write!(f, "}}")
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for NestedMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = NestedMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for NestedMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.children.insert(key.into(), value.into());
        }
    }
}

impl<K: Into<Key>, V: Into<Value>, const N: usize> From<[(K, V); N]> for NestedMap {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a NestedMap {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl IntoIterator for NestedMap {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl serde::Serialize for NestedMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.children.len()))?;
        for (key, value) in &self.children {
            map.serialize_entry(&key.to_string(), value)?;
        }
        map.end()
    }
}

impl<'de> serde::Deserialize<'de> for NestedMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NestedMapVisitor;

        impl<'de> serde::de::Visitor<'de> for NestedMapVisitor {
            type Value = NestedMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a map with string keys")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut map = NestedMap::new();
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    map.children.insert(Key::Text(key), value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(NestedMapVisitor)
    }
}
