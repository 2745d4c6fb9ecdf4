//! Fully-qualified collection names

use std::fmt;

/// `(pool, schema, collection)` triple naming one collection
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionPath {
    pub pool: String,
    pub schema: String,
    pub collection: String,
}

impl CollectionPath {
    pub fn new(
        pool: impl Into<String>,
        schema: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            pool: pool.into(),
            schema: schema.into(),
            collection: collection.into(),
        }
    }
}

impl fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.pool, self.schema, self.collection)
    }
}
