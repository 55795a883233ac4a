//! Error types for nested map operations.
//!
//! Path operations distinguish ordinary absence of a key from structural
//! misuse of the tree. Absence ([`NestedError::KeyNotFound`]) is recoverable and
//! can be replaced by a default value; traversing through a leaf
//! ([`NestedError::StructuralConflict`]) always surfaces as an error.

use thiserror::Error;

/// Structured error types for nested map operations.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NestedError {
    /// A key along the path does not exist
    #[error("Key not found: {path}")]
    KeyNotFound { path: String },

    /// The path tries to descend through a value that is not a nested map
    #[error("Structural conflict at {path}: cannot descend into {found} value")]
    StructuralConflict { path: String, found: String },

    /// The path is not usable for the requested operation
    #[error("Invalid key path: {reason}")]
    InvalidPath { reason: String },

    /// A value had a different type than requested
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// The operation was called with unusable input
    #[error("Invalid usage: {reason}")]
    Usage { reason: String },
}

impl NestedError {
    /// Check if this error indicates a missing key
    pub fn is_not_found(&self) -> bool {
        matches!(self, NestedError::KeyNotFound { .. })
    }

    /// Check if this error indicates traversal through a leaf
    pub fn is_structural_conflict(&self) -> bool {
        matches!(self, NestedError::StructuralConflict { .. })
    }

    /// Check if this error is related to an invalid path
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, NestedError::InvalidPath { .. })
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, NestedError::TypeMismatch { .. })
    }

    /// Check if this error indicates a malformed call
    pub fn is_usage_error(&self) -> bool {
        matches!(self, NestedError::Usage { .. })
    }

    /// Get the rendered path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            NestedError::KeyNotFound { path } | NestedError::StructuralConflict { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }
}

// Conversion from NestedError to the main Error type
impl From<NestedError> for crate::Error {
    fn from(err: NestedError) -> Self {
        crate::Error::Nested(err)
    }
}
