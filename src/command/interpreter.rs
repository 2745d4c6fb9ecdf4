//! Command interpreter
//!
//! Executes parsed commands against a shared registry.

use std::sync::Arc;

use bytes::Bytes;

use crate::collection::BackendKind;
use crate::error::Result;
use crate::registry::Registry;

use super::{parse_line, Command, Reply};

/// Executes commands against a [`Registry`]
///
/// Registry and collection errors are returned unchanged; turning them
/// into text is the caller's job.
pub struct Interpreter {
    /// Registry all commands operate on
    registry: Arc<Registry>,

    /// Backend for `add-collection` without an explicit backend
    default_backend: BackendKind,
}

impl Interpreter {
    /// Create an interpreter over a registry
    pub fn new(registry: Arc<Registry>, default_backend: BackendKind) -> Self {
        Self {
            registry,
            default_backend,
        }
    }

    /// Parse and execute one line
    ///
    /// Returns `Ok(None)` for blank lines and comments.
    pub fn execute_line(&self, line: &str) -> Result<Option<Reply>> {
        match parse_line(line)? {
            Some(command) => self.execute(command).map(Some),
            None => Ok(None),
        }
    }

    /// Execute a command
    ///
    /// Routes commands to the matching registry operation
    pub fn execute(&self, command: Command) -> Result<Reply> {
        tracing::debug!(command = command.name(), "Executing command");

        match command {
            Command::AddPool { pool } => {
                self.registry.add_pool(&pool)?;
                Ok(Reply::done(format!("Pool '{}' added", pool)))
            }
            Command::RemovePool { pool } => {
                self.registry.remove_pool(&pool)?;
                Ok(Reply::done(format!("Pool '{}' removed", pool)))
            }
            Command::AddSchema { pool, schema } => {
                self.registry.add_schema(&pool, &schema)?;
                Ok(Reply::done(format!(
                    "Schema '{}' added to pool '{}'",
                    schema, pool
                )))
            }
            Command::RemoveSchema { pool, schema } => {
                self.registry.remove_schema(&pool, &schema)?;
                Ok(Reply::done(format!(
                    "Schema '{}' removed from pool '{}'",
                    schema, pool
                )))
            }
            Command::AddCollection { path, backend } => {
                let kind = match backend {
                    Some(name) => self.resolve_backend(&name),
                    None => self.default_backend,
                };
                self.registry.add_collection(&path, kind)?;
                Ok(Reply::done(format!("Collection '{}' added ({})", path, kind)))
            }
            Command::RemoveCollection { path } => {
                self.registry.remove_collection(&path)?;
                Ok(Reply::done(format!("Collection '{}' removed", path)))
            }
            Command::AddRecord { path, key, value } => {
                self.registry
                    .insert_record(&path, &key, Bytes::from(value))?;
                Ok(Reply::done(format!("Record '{}' added", key)))
            }
            Command::UpdateRecord { path, key, value } => {
                self.registry
                    .update_record(&path, &key, Bytes::from(value))?;
                Ok(Reply::done(format!("Record '{}' updated", key)))
            }
            Command::ReadRecord { path, key } => {
                let value = self.registry.read_record(&path, &key)?;
                Ok(Reply::Record { key, value })
            }
            Command::ReadRange {
                path,
                min_key,
                max_key,
            } => {
                let keys = self.registry.read_range(&path, &min_key, &max_key)?;
                Ok(Reply::Keys(keys))
            }
            Command::DeleteRecord { path, key } => {
                self.registry.delete_record(&path, &key)?;
                Ok(Reply::done(format!("Record '{}' deleted", key)))
            }
            Command::Exit => Ok(Reply::Exit),
        }
    }

    /// Map a backend name to a kind, falling back to the ordered index
    fn resolve_backend(&self, name: &str) -> BackendKind {
        BackendKind::parse(name).unwrap_or_else(|| {
            let fallback = BackendKind::from_name(name);
            tracing::warn!(backend = name, %fallback, "Unknown backend, falling back");
            fallback
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The registry this interpreter operates on
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Backend used when `add-collection` names none
    pub fn default_backend(&self) -> BackendKind {
        self.default_backend
    }
}
