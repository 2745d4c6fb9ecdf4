//! Registry
//!
//! Resolves names to collections and runs single record operations under
//! the owning collection's lock.

use std::collections::BTreeMap;

use bytes::Bytes;
use parking_lot::RwLock;

use crate::collection::{Backend, BackendKind};
use crate::error::{NestError, Result};

use super::{CollectionPath, Pool, SharedCollection};

/// Registry of named pools
///
/// ## Concurrency:
/// - `pools`: RwLock over the whole name tree (structural changes take the
///   write lock, lookups the read lock)
/// - Record operations release the name-tree lock before locking the
///   collection, so a long scan never blocks unrelated lookups
/// - All methods use `&self`
#[derive(Debug, Default)]
pub struct Registry {
    pools: RwLock<BTreeMap<String, Pool>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Pools
    // =========================================================================

    /// Add an empty pool
    pub fn add_pool(&self, name: &str) -> Result<()> {
        let mut pools = self.pools.write();
        if pools.contains_key(name) {
            return Err(NestError::PoolExists(name.to_string()));
        }
        pools.insert(name.to_string(), Pool::new());

        tracing::info!(pool = name, "Pool added");
        Ok(())
    }

    /// Remove a pool together with all of its schemas and collections
    pub fn remove_pool(&self, name: &str) -> Result<()> {
        let removed = self
            .pools
            .write()
            .remove(name)
            .ok_or_else(|| NestError::PoolNotFound(name.to_string()))?;

        tracing::info!(
            pool = name,
            schemas = removed.schema_names().len(),
            "Pool removed"
        );
        Ok(())
    }

    // =========================================================================
    // Schemas
    // =========================================================================

    /// Add an empty schema to an existing pool
    pub fn add_schema(&self, pool: &str, schema: &str) -> Result<()> {
        let mut pools = self.pools.write();
        let target = pools
            .get_mut(pool)
            .ok_or_else(|| NestError::PoolNotFound(pool.to_string()))?;

        if !target.add_schema(schema) {
            return Err(NestError::SchemaExists {
                pool: pool.to_string(),
                schema: schema.to_string(),
            });
        }

        tracing::info!(pool, schema, "Schema added");
        Ok(())
    }

    /// Remove a schema together with all of its collections
    pub fn remove_schema(&self, pool: &str, schema: &str) -> Result<()> {
        let mut pools = self.pools.write();
        let target = pools
            .get_mut(pool)
            .ok_or_else(|| NestError::PoolNotFound(pool.to_string()))?;

        let removed = target
            .remove_schema(schema)
            .ok_or_else(|| NestError::SchemaNotFound {
                pool: pool.to_string(),
                schema: schema.to_string(),
            })?;

        tracing::info!(pool, schema, collections = removed.len(), "Schema removed");
        Ok(())
    }

    // =========================================================================
    // Collections
    // =========================================================================

    /// Create an empty collection on the given backend
    pub fn add_collection(&self, path: &CollectionPath, kind: BackendKind) -> Result<()> {
        let mut pools = self.pools.write();
        let pool = pools
            .get_mut(&path.pool)
            .ok_or_else(|| NestError::PoolNotFound(path.pool.clone()))?;
        let schema = pool
            .schema_mut(&path.schema)
            .ok_or_else(|| schema_not_found(path))?;

        if !schema.add_collection(&path.collection, kind) {
            return Err(NestError::CollectionExists(path.to_string()));
        }

        tracing::info!(%path, backend = %kind, "Collection added");
        Ok(())
    }

    /// Remove a collection
    pub fn remove_collection(&self, path: &CollectionPath) -> Result<()> {
        let mut pools = self.pools.write();
        let pool = pools
            .get_mut(&path.pool)
            .ok_or_else(|| NestError::PoolNotFound(path.pool.clone()))?;
        let schema = pool
            .schema_mut(&path.schema)
            .ok_or_else(|| schema_not_found(path))?;

        schema
            .remove_collection(&path.collection)
            .ok_or_else(|| NestError::CollectionNotFound(path.to_string()))?;

        tracing::info!(%path, "Collection removed");
        Ok(())
    }

    /// Resolve a path to a shared collection handle
    ///
    /// The caller must lock the handle around each operation.
    pub fn collection(&self, path: &CollectionPath) -> Result<SharedCollection> {
        let pools = self.pools.read();
        let pool = pools
            .get(&path.pool)
            .ok_or_else(|| NestError::PoolNotFound(path.pool.clone()))?;
        let schema = pool
            .schema(&path.schema)
            .ok_or_else(|| schema_not_found(path))?;

        schema
            .collection(&path.collection)
            .ok_or_else(|| NestError::CollectionNotFound(path.to_string()))
    }

    // =========================================================================
    // Records (one collection lock per call)
    // =========================================================================

    /// Insert a new record
    pub fn insert_record(&self, path: &CollectionPath, key: &str, value: Bytes) -> Result<()> {
        let collection = self.collection(path)?;
        let mut guard = collection.lock();
        guard.insert(key.to_string(), value)
    }

    /// Read a record's value
    pub fn read_record(&self, path: &CollectionPath, key: &str) -> Result<Bytes> {
        let collection = self.collection(path)?;
        let guard = collection.lock();
        let value = guard.get(key)?.clone();
        Ok(value)
    }

    /// Keys within `[min_key, max_key]`
    ///
    /// Ascending for ordered collections, unspecified for unordered ones.
    pub fn read_range(&self, path: &CollectionPath, min_key: &str, max_key: &str) -> Result<Vec<String>> {
        let collection = self.collection(path)?;
        let guard = collection.lock();
        Ok(guard.get_range(min_key, max_key))
    }

    /// Replace a record's value, returning the old one
    pub fn update_record(&self, path: &CollectionPath, key: &str, value: Bytes) -> Result<Bytes> {
        let collection = self.collection(path)?;
        let mut guard = collection.lock();
        guard.update(key, value)
    }

    /// Delete a record, returning its value
    pub fn delete_record(&self, path: &CollectionPath, key: &str) -> Result<Bytes> {
        let collection = self.collection(path)?;
        let mut guard = collection.lock();
        guard.remove(key)
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Pool names in ascending order
    pub fn pool_names(&self) -> Vec<String> {
        self.pools.read().keys().cloned().collect()
    }

    /// Schema names of a pool in ascending order
    pub fn schema_names(&self, pool: &str) -> Result<Vec<String>> {
        self.pools
            .read()
            .get(pool)
            .map(Pool::schema_names)
            .ok_or_else(|| NestError::PoolNotFound(pool.to_string()))
    }

    /// Collection names of a schema in ascending order
    pub fn collection_names(&self, pool: &str, schema: &str) -> Result<Vec<String>> {
        let pools = self.pools.read();
        let target = pools
            .get(pool)
            .ok_or_else(|| NestError::PoolNotFound(pool.to_string()))?;

        target
            .schema(schema)
            .map(|schema| schema.collection_names())
            .ok_or_else(|| NestError::SchemaNotFound {
                pool: pool.to_string(),
                schema: schema.to_string(),
            })
    }
}

fn schema_not_found(path: &CollectionPath) -> NestError {
    NestError::SchemaNotFound {
        pool: path.pool.clone(),
        schema: path.schema.clone(),
    }
}
