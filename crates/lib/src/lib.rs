//!
//! nestdict: dictionaries with transparent multi-level key paths.
//! This library provides a nested map that reads and writes deeply nested values
//! with a single sequence-of-keys operation.
//!
//! ## Core Concepts
//!
//! * **Keys (`nested::Key`)**: Hashable tokens indexing one level of the tree. Composite keys are still a single key.
//! * **Key paths (`nested::KeyPath`)**: Explicit ordered sequences of keys. Only paths are decomposed into multiple levels; build them with the [`path!`] macro.
//! * **Values (`nested::Value`)**: Leaves (null, booleans, numbers, text, lists) or nested maps, which are interior nodes.
//! * **NestedMap (`nested::NestedMap`)**: The container itself, offering path-aware `get`, `set`, `enumerate_paths` and `merge` on top of ordinary single-level map operations.
//!
//! ## Example
//!
//! ```
//! use nestdict::{NestedMap, path};
//!
//! let mut config = NestedMap::new();
//! config.set(path!["server", "http", "port"], 8080)?;
//! config.set(path!["server", "http", "host"], "localhost")?;
//!
//! assert_eq!(config.get_as::<i64>(path!["server", "http", "port"])?, Some(8080));
//! assert_eq!(config.enumerate_paths().len(), 2);
//! # Ok::<(), nestdict::Error>(())
//! ```

pub mod nested;

/// Re-export the core types for easier access.
pub use nested::{Key, KeyPath, MergeSource, NestedError, NestedMap, Value};

/// Result type used throughout the nestdict library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the nestdict library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured errors from nested map operations
    #[error(transparent)]
    Nested(nested::NestedError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Nested(_) => "nested",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a key was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Nested(nested_err) => nested_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a path ran through a leaf.
    pub fn is_structural_conflict(&self) -> bool {
        match self {
            Error::Nested(nested_err) => nested_err.is_structural_conflict(),
            _ => false,
        }
    }

    /// Check if this error indicates a malformed call or unusable path.
    pub fn is_usage_error(&self) -> bool {
        match self {
            Error::Nested(nested_err) => {
                nested_err.is_usage_error() || nested_err.is_invalid_path()
            }
            _ => false,
        }
    }

    /// Check if this error is a type mismatch.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Nested(nested_err) => nested_err.is_type_error(),
            _ => false,
        }
    }

    /// Get the nested map error, if this is one.
    pub fn as_nested(&self) -> Option<&nested::NestedError> {
        match self {
            Error::Nested(nested_err) => Some(nested_err),
            _ => None,
        }
    }
}
