//! Collection Module
//!
//! The associative container exposed to callers, backed by either the
//! ordered index or a hash map.
//!
//! ## Responsibilities
//! - One operation contract ([`Backend`]) for every storage backend
//! - Backend chosen once at construction, never migrated
//! - Errors pass through unchanged (`DuplicateKey`, `KeyNotFound`)
//!
//! ## Backends
//! | Kind        | Storage            | `get_range` order |
//! |-------------|--------------------|-------------------|
//! | `Ordered`   | [`OrderedIndex`]   | ascending         |
//! | `Unordered` | [`UnorderedMap`]   | unspecified       |
//!
//! [`OrderedIndex`]: crate::index::OrderedIndex

mod dispatch;
mod unordered;

use std::fmt;

use crate::error::Result;

pub use dispatch::Collection;
pub use unordered::UnorderedMap;

/// Operation contract shared by every collection backend
pub trait Backend<V> {
    /// Insert a new entry; `DuplicateKey` if the key exists
    fn insert(&mut self, key: String, value: V) -> Result<()>;

    /// Look up a value; `KeyNotFound` if absent
    fn get(&self, key: &str) -> Result<&V>;

    /// Keys within `[min_key, max_key]`; never fails
    fn get_range(&self, min_key: &str, max_key: &str) -> Vec<String>;

    /// Replace an existing value, returning the old one
    fn update(&mut self, key: &str, value: V) -> Result<V>;

    /// Remove an entry, returning its value
    fn remove(&mut self, key: &str) -> Result<V>;

    /// Number of entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which backend a collection is built on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackendKind {
    /// Balanced ordered index (AVL tree)
    #[default]
    Ordered,

    /// Hash map without key ordering
    Unordered,
}

impl BackendKind {
    /// Resolve a backend identifier
    ///
    /// Unrecognized names resolve to `Ordered`, so collection creation
    /// never fails on the backend choice. Use [`BackendKind::parse`] to
    /// tell the two apart.
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    /// Resolve a backend identifier, returning None if it is not recognized
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "avl" | "ordered" | "tree" => Some(BackendKind::Ordered),
            "map" | "hash" | "unordered" => Some(BackendKind::Unordered),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Ordered => "avl",
            BackendKind::Unordered => "map",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
