//! Ordered Index Module
//!
//! Self-balancing (AVL) binary search tree keyed by string.
//!
//! ## Responsibilities
//! - Point insert/get/update/remove in O(log n)
//! - Ascending range scans pruned on both bounds
//! - Keep `|height(left) - height(right)| <= 1` at every node after each
//!   insert or remove
//!
//! ## Node Layout
//! ```text
//!            ┌──────────────────────────┐
//!            │ key | value | height     │
//!            └─────┬──────────────┬─────┘
//!                  │              │
//!          left: Option<Box>  right: Option<Box>
//! ```
//!
//! Every node owns its children outright; there are no parent pointers.
//! Mutations take a subtree by value and hand back its (possibly new) root,
//! which the caller reattaches.

mod node;
mod tree;

pub use tree::{Iter, OrderedIndex};
