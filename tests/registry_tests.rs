//! Tests for Registry
//!
//! These tests verify:
//! - Pool/schema/collection creation, lookup and removal
//! - Cascading removal
//! - Record helpers and error pass-through
//! - Concurrent record access through per-collection locks

use std::sync::Arc;
use std::thread;

use bytes::Bytes;
use nestkv::collection::{Backend, BackendKind};
use nestkv::registry::{CollectionPath, Registry};
use nestkv::NestError;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_registry(kind: BackendKind) -> (Registry, CollectionPath) {
    let registry = Registry::new();
    let path = CollectionPath::new("main", "users", "by_name");
    registry.add_pool("main").unwrap();
    registry.add_schema("main", "users").unwrap();
    registry.add_collection(&path, kind).unwrap();
    (registry, path)
}

// =============================================================================
// Hierarchy Tests
// =============================================================================

#[test]
fn test_new_registry_is_empty() {
    let registry = Registry::new();
    assert!(registry.pool_names().is_empty());
}

#[test]
fn test_add_pool_twice_fails() {
    let registry = Registry::new();
    registry.add_pool("main").unwrap();

    let err = registry.add_pool("main").unwrap_err();

    assert!(matches!(err, NestError::PoolExists(ref name) if name == "main"));
    assert_eq!(registry.pool_names(), vec!["main"]);
}

#[test]
fn test_remove_missing_pool_fails() {
    let registry = Registry::new();
    assert!(matches!(registry.remove_pool("nope"), Err(NestError::PoolNotFound(_))));
}

#[test]
fn test_add_schema_requires_pool() {
    let registry = Registry::new();

    let err = registry.add_schema("missing", "s").unwrap_err();

    assert!(matches!(err, NestError::PoolNotFound(ref name) if name == "missing"));
}

#[test]
fn test_add_schema_twice_fails() {
    let registry = Registry::new();
    registry.add_pool("p").unwrap();
    registry.add_schema("p", "s").unwrap();

    assert!(matches!(
        registry.add_schema("p", "s"),
        Err(NestError::SchemaExists { .. })
    ));
    assert_eq!(registry.schema_names("p").unwrap(), vec!["s"]);
}

#[test]
fn test_add_collection_requires_schema() {
    let registry = Registry::new();
    registry.add_pool("p").unwrap();

    let path = CollectionPath::new("p", "missing", "c");
    let err = registry.add_collection(&path, BackendKind::Ordered).unwrap_err();

    assert!(matches!(err, NestError::SchemaNotFound { ref schema, .. } if schema == "missing"));
}

#[test]
fn test_add_collection_twice_fails() {
    let (registry, path) = setup_registry(BackendKind::Ordered);

    let err = registry.add_collection(&path, BackendKind::Unordered).unwrap_err();

    assert!(matches!(err, NestError::CollectionExists(ref name) if name == "main/users/by_name"));
    assert_eq!(registry.collection(&path).unwrap().lock().kind(), BackendKind::Ordered);
}

#[test]
fn test_collection_lookup_errors() {
    let (registry, _path) = setup_registry(BackendKind::Ordered);

    let missing_pool = CollectionPath::new("other", "users", "by_name");
    let missing_schema = CollectionPath::new("main", "other", "by_name");
    let missing_collection = CollectionPath::new("main", "users", "other");

    assert!(matches!(registry.collection(&missing_pool), Err(NestError::PoolNotFound(_))));
    assert!(matches!(
        registry.collection(&missing_schema),
        Err(NestError::SchemaNotFound { .. })
    ));
    assert!(matches!(
        registry.collection(&missing_collection),
        Err(NestError::CollectionNotFound(_))
    ));
}

#[test]
fn test_remove_collection() {
    let (registry, path) = setup_registry(BackendKind::Unordered);

    registry.remove_collection(&path).unwrap();

    assert!(registry.collection_names("main", "users").unwrap().is_empty());
    assert!(matches!(
        registry.remove_collection(&path),
        Err(NestError::CollectionNotFound(_))
    ));
}

#[test]
fn test_remove_schema_cascades() {
    let (registry, path) = setup_registry(BackendKind::Ordered);
    registry.insert_record(&path, "k", Bytes::from("v")).unwrap();

    registry.remove_schema("main", "users").unwrap();

    assert!(registry.schema_names("main").unwrap().is_empty());
    assert!(matches!(
        registry.read_record(&path, "k"),
        Err(NestError::SchemaNotFound { .. })
    ));
}

#[test]
fn test_remove_pool_cascades() {
    let (registry, path) = setup_registry(BackendKind::Ordered);

    registry.remove_pool("main").unwrap();

    assert!(registry.pool_names().is_empty());
    assert!(matches!(registry.collection(&path), Err(NestError::PoolNotFound(_))));

    // Recreating the pool starts from scratch
    registry.add_pool("main").unwrap();
    assert!(registry.schema_names("main").unwrap().is_empty());
}

#[test]
fn test_names_are_sorted() {
    let registry = Registry::new();
    for pool in ["zeta", "alpha", "mid"] {
        registry.add_pool(pool).unwrap();
    }
    assert_eq!(registry.pool_names(), vec!["alpha", "mid", "zeta"]);
}

// =============================================================================
// Record Tests
// =============================================================================

#[test]
fn test_record_lifecycle() {
    for kind in [BackendKind::Ordered, BackendKind::Unordered] {
        let (registry, path) = setup_registry(kind);

        registry.insert_record(&path, "alice", Bytes::from("1")).unwrap();
        assert_eq!(registry.read_record(&path, "alice").unwrap(), Bytes::from("1"));

        let old = registry.update_record(&path, "alice", Bytes::from("2")).unwrap();
        assert_eq!(old, Bytes::from("1"));
        assert_eq!(registry.read_record(&path, "alice").unwrap(), Bytes::from("2"));

        let removed = registry.delete_record(&path, "alice").unwrap();
        assert_eq!(removed, Bytes::from("2"));
        assert!(matches!(
            registry.read_record(&path, "alice"),
            Err(NestError::KeyNotFound(_))
        ));
    }
}

#[test]
fn test_record_errors_pass_through() {
    let (registry, path) = setup_registry(BackendKind::Unordered);
    registry.insert_record(&path, "x", Bytes::from("first")).unwrap();

    let err = registry.insert_record(&path, "x", Bytes::from("second")).unwrap_err();
    assert!(matches!(err, NestError::DuplicateKey(_)));
    assert!(err.is_collection_error());
    assert_eq!(registry.read_record(&path, "x").unwrap(), Bytes::from("first"));

    assert!(matches!(
        registry.update_record(&path, "y", Bytes::new()),
        Err(NestError::KeyNotFound(_))
    ));
    assert!(matches!(registry.delete_record(&path, "y"), Err(NestError::KeyNotFound(_))));
}

#[test]
fn test_read_range() {
    let (registry, path) = setup_registry(BackendKind::Ordered);
    for key in ["d", "a", "c", "b", "e"] {
        registry.insert_record(&path, key, Bytes::from(key)).unwrap();
    }

    assert_eq!(registry.read_range(&path, "b", "d").unwrap(), vec!["b", "c", "d"]);
    assert!(registry.read_range(&path, "x", "z").unwrap().is_empty());
}

#[test]
fn test_handle_survives_removal() {
    let (registry, path) = setup_registry(BackendKind::Ordered);
    let handle = registry.collection(&path).unwrap();

    registry.remove_collection(&path).unwrap();

    handle.lock().insert("still".to_string(), Bytes::from("works")).unwrap();
    assert_eq!(handle.lock().len(), 1);
    assert!(registry.collection(&path).is_err());
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_concurrent_inserts_into_one_collection() {
    let (registry, path) = setup_registry(BackendKind::Ordered);
    let registry = Arc::new(registry);

    let mut handles = vec![];
    for t in 0..8 {
        let registry = Arc::clone(&registry);
        let path = path.clone();
        handles.push(thread::spawn(move || {
            for i in 0..100 {
                let key = format!("t{}-{:03}", t, i);
                registry.insert_record(&path, &key, Bytes::from(key.clone())).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let collection = registry.collection(&path).unwrap();
    let guard = collection.lock();
    assert_eq!(guard.len(), 800);
    match &*guard {
        nestkv::Collection::Ordered(index) => assert!(index.is_balanced()),
        nestkv::Collection::Unordered(_) => panic!("expected ordered backend"),
    }
}
