//! Key paths for multi-level access into nested maps.
//!
//! A [`KeyPath`] is an explicit, ordered sequence of [`Key`]s. It is the only
//! type a [`NestedMap`](super::NestedMap) ever decomposes into several
//! traversal steps. Scalars convert into one-element paths, so single-level
//! access never needs wrapping:
//!
//! ```rust
//! use nestdict::nested::{Key, KeyPath};
//! use nestdict::path;
//!
//! // A scalar is a path of length one, even when it looks like a sequence
//! let single = KeyPath::from("user.profile");
//! assert_eq!(single.len(), 1);
//!
//! // Sequences are decomposed
//! let nested = KeyPath::from(["user", "profile"]);
//! assert_eq!(nested.len(), 2);
//!
//! // Mixed key types via the macro
//! let mixed = path![1, "a", 34];
//! assert_eq!(mixed.keys(), &[Key::from(1), Key::from("a"), Key::from(34)]);
//! assert_eq!(mixed.to_string(), "1 -> a -> 34");
//! ```

use std::fmt;

use super::key::Key;

/// An owned, ordered sequence of keys addressing a location in a nested map.
///
/// Operations that address a location reject an empty path; an empty
/// `KeyPath` is only useful as the starting point of a builder chain.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct KeyPath {
    keys: Vec<Key>,
}

impl KeyPath {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Creates a path from a single key.
    pub fn single(key: impl Into<Key>) -> Self {
        Self {
            keys: vec![key.into()],
        }
    }

    /// Appends a key, returning the extended path.
    ///
    /// ```rust
    /// # use nestdict::nested::KeyPath;
    /// let path = KeyPath::new().push("user").push(7);
    /// assert_eq!(path.to_string(), "user -> 7");
    /// ```
    pub fn push(mut self, key: impl Into<Key>) -> Self {
        self.keys.push(key.into());
        self
    }

    /// Joins this path with another path.
    pub fn join(mut self, other: impl Into<KeyPath>) -> Self {
        self.keys.extend(other.into().keys);
        self
    }

    /// Returns the keys in traversal order.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Consumes the path, returning its keys.
    pub fn into_keys(self) -> Vec<Key> {
        self.keys
    }

    /// Returns an iterator over the keys.
    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.keys.iter()
    }

    /// Returns the number of keys in the path.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the path has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the first key, or `None` if empty.
    pub fn first(&self) -> Option<&Key> {
        self.keys.first()
    }

    /// Returns the last key, or `None` if empty.
    pub fn last(&self) -> Option<&Key> {
        self.keys.last()
    }

    /// Returns the path without its last key, or `None` for paths shorter
    /// than two keys.
    pub fn parent(&self) -> Option<KeyPath> {
        match self.keys.split_last() {
            Some((_, rest)) if !rest.is_empty() => Some(KeyPath::from(rest)),
            _ => None,
        }
    }

    /// Returns the prefix made of the first `len` keys.
    pub fn prefix(&self, len: usize) -> KeyPath {
        KeyPath::from(&self.keys[..len.min(self.keys.len())])
    }

    /// Returns `true` if `self` is a strict or equal prefix of `other`.
    pub fn is_prefix_of(&self, other: &KeyPath) -> bool {
        other.keys.starts_with(&self.keys)
    }

    /// Splits into the final key and the keys leading to it.
    pub(crate) fn split_last(&self) -> Option<(&Key, &[Key])> {
        self.keys.split_last()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

// Scalars are always a single key, never decomposed.
macro_rules! impl_single_key_path {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for KeyPath {
                fn from(key: $ty) -> Self {
                    KeyPath::single(key)
                }
            }
        )*
    };
}

impl_single_key_path!(Key, &Key, bool, i32, i64, u32, usize, &str, String, &String);

impl From<Vec<Key>> for KeyPath {
    fn from(keys: Vec<Key>) -> Self {
        Self { keys }
    }
}

impl From<&[Key]> for KeyPath {
    fn from(keys: &[Key]) -> Self {
        Self {
            keys: keys.to_vec(),
        }
    }
}

impl<T: Into<Key>, const N: usize> From<[T; N]> for KeyPath {
    fn from(keys: [T; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl From<&KeyPath> for KeyPath {
    fn from(path: &KeyPath) -> Self {
        path.clone()
    }
}

impl<K: Into<Key>> FromIterator<K> for KeyPath {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a KeyPath {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl IntoIterator for KeyPath {
    type Item = Key;
    type IntoIter = std::vec::IntoIter<Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

/// Builds a [`KeyPath`] from a list of keys of any supported type.
///
/// Every argument is converted with `Key::from`, so integers, strings,
/// booleans and `Key` values can be mixed freely.
///
/// ```rust
/// use nestdict::path;
///
/// let path = path![1, "a", 34];
/// assert_eq!(path.len(), 3);
///
/// let empty = path![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::nested::KeyPath::new()
    };

    ($($key:expr),+ $(,)?) => {
        $crate::nested::KeyPath::from(::std::vec![$($crate::nested::Key::from($key)),+])
    };
}
