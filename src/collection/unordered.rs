//! Hash-map backend

use std::collections::hash_map::{Entry, HashMap};
use std::mem;

use crate::error::{NestError, Result};

use super::Backend;

/// Unordered collection backend
///
/// Range queries scan every entry; the returned keys are in no particular
/// order.
#[derive(Debug)]
pub struct UnorderedMap<V> {
    data: HashMap<String, V>,
}

impl<V> UnorderedMap<V> {
    /// Create a new empty map
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<V> Default for UnorderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Backend<V> for UnorderedMap<V> {
    fn insert(&mut self, key: String, value: V) -> Result<()> {
        match self.data.entry(key) {
            Entry::Occupied(entry) => Err(NestError::DuplicateKey(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(())
            }
        }
    }

    fn get(&self, key: &str) -> Result<&V> {
        self.data
            .get(key)
            .ok_or_else(|| NestError::KeyNotFound(key.to_string()))
    }

    fn get_range(&self, min_key: &str, max_key: &str) -> Vec<String> {
        self.data
            .keys()
            .filter(|key| min_key <= key.as_str() && key.as_str() <= max_key)
            .cloned()
            .collect()
    }

    fn update(&mut self, key: &str, value: V) -> Result<V> {
        self.data
            .get_mut(key)
            .map(|slot| mem::replace(slot, value))
            .ok_or_else(|| NestError::KeyNotFound(key.to_string()))
    }

    fn remove(&mut self, key: &str) -> Result<V> {
        self.data
            .remove(key)
            .ok_or_else(|| NestError::KeyNotFound(key.to_string()))
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
