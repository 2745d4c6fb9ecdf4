//! # NestKV
//!
//! An in-process hierarchical key-value store:
//! - Named pools, holding named schemas, holding named collections
//! - Collections backed by a self-balancing AVL index or a hash map,
//!   behind one operation contract
//! - Line-oriented command language with interactive and batch entry points
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Shell                                │
//! │              (interactive prompt / script file)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Interpreter                                │
//! │              (parse line → Command → Reply)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Registry                                  │
//! │           pool → schema → collection (Mutex each)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌──────────────┐
//!   │ OrderedIndex│          │ UnorderedMap │
//!   │    (AVL)    │          │  (HashMap)   │
//!   └─────────────┘          └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod index;
pub mod collection;
pub mod registry;
pub mod command;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{NestError, Result};
pub use config::Config;
pub use collection::{Backend, BackendKind, Collection};
pub use index::OrderedIndex;
pub use registry::{CollectionPath, Registry};
pub use shell::Shell;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of NestKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
