//! Single-level keys for nested maps.
//!
//! A [`Key`] indexes exactly one level of a [`NestedMap`](super::NestedMap).
//! Composite keys ([`Key::Tuple`]) are still a single key: they are never
//! decomposed into a multi-level path. Only a [`KeyPath`](super::KeyPath)
//! is traversed level by level.

use std::fmt;

/// A hashable token used to index one level of a nested map.
///
/// # Examples
///
/// ```
/// # use nestdict::nested::Key;
/// let name = Key::from("name");
/// let index = Key::from(42);
/// let pair = Key::tuple([Key::from(1), Key::from("a")]);
///
/// assert_eq!(name.to_string(), "name");
/// assert_eq!(index.to_string(), "42");
/// assert_eq!(pair.to_string(), "(1, a)");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(untagged)]
pub enum Key {
    /// Boolean key
    Bool(bool),
    /// Integer key
    Int(i64),
    /// Text key. Never split into a path, whatever it contains.
    Text(String),
    /// Composite key made of other keys, indexing a single level
    Tuple(Vec<Key>),
}

impl Key {
    /// Builds a composite key from its parts.
    pub fn tuple(parts: impl IntoIterator<Item = Key>) -> Self {
        Key::Tuple(parts.into_iter().collect())
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Key::Bool(_) => "bool",
            Key::Int(_) => "int",
            Key::Text(_) => "text",
            Key::Tuple(_) => "tuple",
        }
    }

    /// Returns the text if this is a text key
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Key::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer key
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Writes the key in literal form, quoting text.
    ///
    /// Used when rendering a whole map, where `{"1": 1}` and `{1: 1}` must
    /// stay distinguishable.
    pub(crate) fn write_literal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Bool(b) => write!(f, "{b}"),
            Key::Int(n) => write!(f, "{n}"),
            Key::Text(s) => write!(f, "{s:?}"),
            Key::Tuple(parts) => {
                write!(f, "(")?;
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    part.write_literal(f)?;
                }
                if parts.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Bool(b) => write!(f, "{b}"),
            Key::Int(n) => write!(f, "{n}"),
            Key::Text(s) => write!(f, "{s}"),
            Key::Tuple(parts) => {
                write!(f, "(")?;
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{part}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Key::Bool(value)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(i64::from(value))
    }
}

/// Indices that do not fit in an `i64` fall back to their decimal text, so
/// distinct indices stay distinct keys.
impl From<usize> for Key {
    fn from(value: usize) -> Self {
        match i64::try_from(value) {
            Ok(n) => Key::Int(n),
            Err(_) => Key::Text(value.to_string()),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Text(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Text(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::Text(value.clone())
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Key::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Key::Text(s) if s == *other)
    }
}

impl PartialEq<i64> for Key {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Key::Int(n) if n == other)
    }
}

impl PartialEq<i32> for Key {
    fn eq(&self, other: &i32) -> bool {
        matches!(self, Key::Int(n) if *n == i64::from(*other))
    }
}
