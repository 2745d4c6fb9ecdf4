//! OrderedIndex implementation
//!
//! AVL tree with owned subtrees and recursive rebalancing.

use std::cmp::Ordering;
use std::mem;

use crate::error::{NestError, Result};

use super::node::{self, Link, Node};

/// Balanced ordered index from string keys to values of type `V`
///
/// Keys compare by raw byte order. Inserting an existing key is always an
/// error; use [`OrderedIndex::update`] to replace a value.
pub struct OrderedIndex<V> {
    /// Root of the tree (None when empty)
    root: Link<V>,

    /// Number of entries
    len: usize,
}

impl<V> OrderedIndex<V> {
    /// Create a new empty index
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert a new entry
    ///
    /// Fails with `DuplicateKey` if the key is already present, leaving the
    /// tree unchanged.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Result<()> {
        let (root, result) = node::insert(self.root.take(), key.into(), value);
        self.root = Some(root);
        if result.is_ok() {
            self.len += 1;
        }
        result
    }

    /// Get the value stored under `key`
    pub fn get(&self, key: &str) -> Result<&V> {
        self.find(key)
            .map(|node| &node.value)
            .ok_or_else(|| NestError::KeyNotFound(key.to_string()))
    }

    /// Check whether `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Keys `k` with `min_key <= k <= max_key`, ascending
    ///
    /// An empty or inverted range yields an empty vector.
    pub fn get_range(&self, min_key: &str, max_key: &str) -> Vec<String> {
        let mut keys = Vec::new();
        if min_key <= max_key {
            node::collect_range(&self.root, min_key, max_key, &mut keys);
        }
        keys
    }

    /// Replace the value under an existing key, returning the old value
    ///
    /// The tree shape is not touched.
    pub fn update(&mut self, key: &str, value: V) -> Result<V> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            current = match key.cmp(node.key.as_str()) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
                Ordering::Equal => return Ok(mem::replace(&mut node.value, value)),
            };
        }
        Err(NestError::KeyNotFound(key.to_string()))
    }

    /// Remove an entry, returning its value
    pub fn remove(&mut self, key: &str) -> Result<V> {
        let (root, result) = node::remove(self.root.take(), key);
        self.root = root;
        if result.is_ok() {
            self.len -= 1;
        }
        result
    }

    /// In-order iterator over `(key, value)` pairs
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.root)
    }

    fn find(&self, key: &str) -> Option<&Node<V>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree (empty = 0, single node = 1)
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Walk the whole tree and confirm that stored heights are correct,
    /// every node satisfies the AVL property, and keys are strictly
    /// ascending in order
    pub fn is_balanced(&self) -> bool {
        node::check(&self.root, None, None).is_some()
    }
}

impl<V> Default for OrderedIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for OrderedIndex<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, V> IntoIterator for &'a OrderedIndex<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over an [`OrderedIndex`]
///
/// Holds the left spine of the unvisited part of the tree, so memory is
/// bounded by the tree height.
pub struct Iter<'a, V> {
    stack: Vec<&'a Node<V>>,
}

impl<'a, V> Iter<'a, V> {
    fn new(root: &'a Link<V>) -> Self {
        let mut iter = Self {
            stack: Vec::with_capacity(node::height(root)),
        };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<V>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((node.key.as_str(), &node.value))
    }
}
