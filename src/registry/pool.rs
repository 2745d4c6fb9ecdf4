//! Pools and schemas
//!
//! Plain name maps; all locking happens in [`Registry`](super::Registry).

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::collection::{BackendKind, Collection};

use super::SharedCollection;

/// A named group of schemas
#[derive(Debug, Default)]
pub struct Pool {
    schemas: BTreeMap<String, Schema>,
}

impl Pool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    pub fn schema_mut(&mut self, name: &str) -> Option<&mut Schema> {
        self.schemas.get_mut(name)
    }

    /// Add an empty schema; returns false if the name is taken
    pub fn add_schema(&mut self, name: &str) -> bool {
        if self.schemas.contains_key(name) {
            return false;
        }
        self.schemas.insert(name.to_string(), Schema::new());
        true
    }

    /// Remove a schema and every collection in it
    pub fn remove_schema(&mut self, name: &str) -> Option<Schema> {
        self.schemas.remove(name)
    }

    /// Schema names in ascending order
    pub fn schema_names(&self) -> Vec<String> {
        self.schemas.keys().cloned().collect()
    }
}

/// A named group of collections
#[derive(Debug, Default)]
pub struct Schema {
    collections: BTreeMap<String, SharedCollection>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to a collection
    pub fn collection(&self, name: &str) -> Option<SharedCollection> {
        self.collections.get(name).map(Arc::clone)
    }

    /// Create an empty collection on `kind`; returns false if the name is
    /// taken
    pub fn add_collection(&mut self, name: &str, kind: BackendKind) -> bool {
        if self.collections.contains_key(name) {
            return false;
        }
        let collection = Arc::new(Mutex::new(Collection::new(kind)));
        self.collections.insert(name.to_string(), collection);
        true
    }

    pub fn remove_collection(&mut self, name: &str) -> Option<SharedCollection> {
        self.collections.remove(name)
    }

    /// Collection names in ascending order
    pub fn collection_names(&self) -> Vec<String> {
        self.collections.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}
