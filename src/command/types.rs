//! Command definitions
//!
//! Represents one parsed line.

use crate::registry::CollectionPath;

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create an empty pool
    AddPool { pool: String },

    /// Drop a pool and everything in it
    RemovePool { pool: String },

    /// Create an empty schema in a pool
    AddSchema { pool: String, schema: String },

    /// Drop a schema and its collections
    RemoveSchema { pool: String, schema: String },

    /// Create a collection, optionally naming its backend
    AddCollection {
        path: CollectionPath,
        backend: Option<String>,
    },

    /// Drop a collection
    RemoveCollection { path: CollectionPath },

    /// Insert a new record
    AddRecord {
        path: CollectionPath,
        key: String,
        value: String,
    },

    /// Replace an existing record's value
    UpdateRecord {
        path: CollectionPath,
        key: String,
        value: String,
    },

    /// Print one record
    ReadRecord { path: CollectionPath, key: String },

    /// List keys within `[min_key, max_key]`
    ReadRange {
        path: CollectionPath,
        min_key: String,
        max_key: String,
    },

    /// Delete a record
    DeleteRecord { path: CollectionPath, key: String },

    /// End the session (or the current script)
    Exit,
}

impl Command {
    /// Canonical command word
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddPool { .. } => "add-pool",
            Command::RemovePool { .. } => "remove-pool",
            Command::AddSchema { .. } => "add-schema",
            Command::RemoveSchema { .. } => "remove-schema",
            Command::AddCollection { .. } => "add-collection",
            Command::RemoveCollection { .. } => "remove-collection",
            Command::AddRecord { .. } => "add-record",
            Command::UpdateRecord { .. } => "update-record",
            Command::ReadRecord { .. } => "read-record",
            Command::ReadRange { .. } => "read-range",
            Command::DeleteRecord { .. } => "delete-record",
            Command::Exit => "exit",
        }
    }

    /// Whether the command changes registry or collection contents
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Command::ReadRecord { .. } | Command::ReadRange { .. } | Command::Exit
        )
    }
}
