//! Error types for NestKV
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using NestError
pub type Result<T> = std::result::Result<T, NestError>;

/// Unified error type for NestKV operations
#[derive(Debug, Error)]
pub enum NestError {
    // -------------------------------------------------------------------------
    // Collection Errors
    // -------------------------------------------------------------------------
    #[error("Key already exists: {0}")]
    DuplicateKey(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    // -------------------------------------------------------------------------
    // Registry Errors
    // -------------------------------------------------------------------------
    #[error("Pool already exists: {0}")]
    PoolExists(String),

    #[error("Pool not found: {0}")]
    PoolNotFound(String),

    #[error("Schema '{schema}' already exists in pool '{pool}'")]
    SchemaExists { pool: String, schema: String },

    #[error("Schema '{schema}' not found in pool '{pool}'")]
    SchemaNotFound { pool: String, schema: String },

    #[error("Collection already exists: {0}")]
    CollectionExists(String),

    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    // -------------------------------------------------------------------------
    // Command Errors
    // -------------------------------------------------------------------------
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Not enough arguments for '{command}': expected {expected}, got {got}")]
    MissingArguments {
        command: String,
        expected: usize,
        got: usize,
    },

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NestError {
    /// Whether this error came from a collection operation (as opposed to
    /// name resolution or command parsing)
    pub fn is_collection_error(&self) -> bool {
        matches!(self, NestError::DuplicateKey(_) | NestError::KeyNotFound(_))
    }
}
