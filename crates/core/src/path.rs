//! Path keys for the external store
//!
//! A `StorePath` names a location in the store's hierarchical namespace.
//! It is deliberately opaque: the marshalling layer performs no local
//! validation, because path legality is defined by the store. Writes to an
//! illegal path come back as an error status, never as a local failure.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque UTF-8 key into the store's namespace
///
/// ## Contract
///
/// - Any UTF-8 string is accepted locally, including the empty string
/// - Illegal paths are rejected by the store and surface as a write error
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StorePath(String);

impl StorePath {
    /// Create a path from anything string-like
    pub fn new(path: impl Into<String>) -> Self {
        StorePath(path.into())
    }

    /// The path as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StorePath {
    fn from(s: &str) -> Self {
        StorePath(s.to_string())
    }
}

impl From<String> for StorePath {
    fn from(s: String) -> Self {
        StorePath(s)
    }
}

impl AsRef<str> for StorePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
