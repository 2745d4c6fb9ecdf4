//! Registry Module
//!
//! Named hierarchy that owns every collection.
//!
//! ## Hierarchy
//! ```text
//! Registry
//!  └── Pool "main"
//!       └── Schema "users"
//!            ├── Collection "by_id"    (avl)
//!            └── Collection "sessions" (map)
//! ```
//!
//! ## Concurrency
//! - The name tree sits behind one `RwLock`
//! - Each collection sits behind its own `Mutex`, held for exactly one
//!   operation by the record helpers
//! - Removing a pool or schema drops everything below it; handles already
//!   handed out stay usable but are detached from the registry

mod path;
mod pool;
mod manager;

use std::sync::Arc;

use bytes::Bytes;
use parking_lot::Mutex;

use crate::collection::Collection;

pub use manager::Registry;
pub use path::CollectionPath;
pub use pool::{Pool, Schema};

/// A collection as stored in the registry: values are raw bytes and the
/// collection carries its own lock
pub type SharedCollection = Arc<Mutex<Collection<Bytes>>>;
