//! Collection sum type
//!
//! Routes each operation to whichever backend the collection was built
//! with.

use crate::error::Result;
use crate::index::OrderedIndex;

use super::{Backend, BackendKind, UnorderedMap};

/// A collection backed by exactly one live backend
#[derive(Debug)]
pub enum Collection<V> {
    /// Balanced ordered index
    Ordered(OrderedIndex<V>),

    /// Hash map
    Unordered(UnorderedMap<V>),
}

impl<V> Collection<V> {
    /// Create an empty collection on the given backend
    pub fn new(kind: BackendKind) -> Self {
        match kind {
            BackendKind::Ordered => Collection::Ordered(OrderedIndex::new()),
            BackendKind::Unordered => Collection::Unordered(UnorderedMap::new()),
        }
    }

    /// Create an empty collection from a backend identifier, falling back
    /// to the ordered index for unknown names
    pub fn from_backend_name(name: &str) -> Self {
        Self::new(BackendKind::from_name(name))
    }

    /// The backend this collection was built with
    pub fn kind(&self) -> BackendKind {
        match self {
            Collection::Ordered(_) => BackendKind::Ordered,
            Collection::Unordered(_) => BackendKind::Unordered,
        }
    }
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self::new(BackendKind::default())
    }
}

impl<V> Backend<V> for Collection<V> {
    fn insert(&mut self, key: String, value: V) -> Result<()> {
        match self {
            Collection::Ordered(index) => index.insert(key, value),
            Collection::Unordered(map) => map.insert(key, value),
        }
    }

    fn get(&self, key: &str) -> Result<&V> {
        match self {
            Collection::Ordered(index) => index.get(key),
            Collection::Unordered(map) => map.get(key),
        }
    }

    fn get_range(&self, min_key: &str, max_key: &str) -> Vec<String> {
        match self {
            Collection::Ordered(index) => index.get_range(min_key, max_key),
            Collection::Unordered(map) => map.get_range(min_key, max_key),
        }
    }

    fn update(&mut self, key: &str, value: V) -> Result<V> {
        match self {
            Collection::Ordered(index) => index.update(key, value),
            Collection::Unordered(map) => map.update(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<V> {
        match self {
            Collection::Ordered(index) => index.remove(key),
            Collection::Unordered(map) => map.remove(key),
        }
    }

    fn len(&self) -> usize {
        match self {
            Collection::Ordered(index) => index.len(),
            Collection::Unordered(map) => map.len(),
        }
    }
}

impl<V> Backend<V> for OrderedIndex<V> {
    fn insert(&mut self, key: String, value: V) -> Result<()> {
        OrderedIndex::insert(self, key, value)
    }

    fn get(&self, key: &str) -> Result<&V> {
        OrderedIndex::get(self, key)
    }

    fn get_range(&self, min_key: &str, max_key: &str) -> Vec<String> {
        OrderedIndex::get_range(self, min_key, max_key)
    }

    fn update(&mut self, key: &str, value: V) -> Result<V> {
        OrderedIndex::update(self, key, value)
    }

    fn remove(&mut self, key: &str) -> Result<V> {
        OrderedIndex::remove(self, key)
    }

    fn len(&self) -> usize {
        OrderedIndex::len(self)
    }
}
