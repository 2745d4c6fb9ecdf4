//! AVL node and rotation primitives
//!
//! Everything in here works on owned subtrees: each function consumes a
//! subtree root and returns the root that should replace it.

use std::cmp::Ordering;

use crate::error::{NestError, Result};

/// An owned, possibly empty subtree
pub(crate) type Link<V> = Option<Box<Node<V>>>;

/// A single tree node
#[derive(Debug)]
pub(crate) struct Node<V> {
    pub(crate) key: String,
    pub(crate) value: V,

    /// Height of the subtree rooted here (leaf = 1)
    pub(crate) height: usize,

    pub(crate) left: Link<V>,
    pub(crate) right: Link<V>,
}

impl<V> Node<V> {
    /// Create a detached leaf
    pub(crate) fn leaf(key: String, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            height: 1,
            left: None,
            right: None,
        })
    }

    /// Recompute this node's height from its children
    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `height(left) - height(right)`
    pub(crate) fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

/// Height of a subtree (empty = 0)
pub(crate) fn height<V>(link: &Link<V>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

fn balance_factor<V>(link: &Link<V>) -> isize {
    link.as_ref().map_or(0, |node| node.balance_factor())
}

// =============================================================================
// Rotations
// =============================================================================

/// Promote `y.left` to subtree root; `y` becomes its right child.
///
/// ```text
///        y              x
///       / \            / \
///      x   C   ==>    A   y
///     / \                / \
///    A   B              B   C
/// ```
fn rotate_right<V>(mut y: Box<Node<V>>) -> Box<Node<V>> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Mirror of [`rotate_right`]: promote `x.right` to subtree root.
fn rotate_left<V>(mut x: Box<Node<V>>) -> Box<Node<V>> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// Refresh `node`'s height and restore the AVL property at this node.
///
/// Children must already be balanced with correct heights. The rotation is
/// chosen from the heavy child's own balance factor, which covers insertion
/// (the heavy child is never level) and deletion (it may be level, in which
/// case a single rotation suffices).
pub(crate) fn rebalance<V>(mut node: Box<Node<V>>) -> Box<Node<V>> {
    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        // Left-Right: straighten the left child first
        if balance_factor(&node.left) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if balance < -1 {
        // Right-Left
        if balance_factor(&node.right) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

// =============================================================================
// Recursive Mutation
// =============================================================================

/// Insert `key` below `link`, returning the new subtree root.
///
/// On a duplicate key the subtree comes back untouched alongside the error.
pub(crate) fn insert<V>(link: Link<V>, key: String, value: V) -> (Box<Node<V>>, Result<()>) {
    let Some(mut node) = link else {
        return (Node::leaf(key, value), Ok(()));
    };

    let result = match key.as_str().cmp(node.key.as_str()) {
        Ordering::Less => {
            let (left, result) = insert(node.left.take(), key, value);
            node.left = Some(left);
            result
        }
        Ordering::Greater => {
            let (right, result) = insert(node.right.take(), key, value);
            node.right = Some(right);
            result
        }
        Ordering::Equal => return (node, Err(NestError::DuplicateKey(key))),
    };

    if result.is_err() {
        return (node, result);
    }
    (rebalance(node), result)
}

/// Remove `key` below `link`, returning the new subtree root and the
/// removed value.
///
/// Every ancestor on the way back up is rebalanced; unlike insertion, a
/// deletion can need a rotation at each of them.
pub(crate) fn remove<V>(link: Link<V>, key: &str) -> (Link<V>, Result<V>) {
    let Some(mut node) = link else {
        return (None, Err(NestError::KeyNotFound(key.to_string())));
    };

    let result = match key.cmp(node.key.as_str()) {
        Ordering::Less => {
            let (left, result) = remove(node.left.take(), key);
            node.left = left;
            result
        }
        Ordering::Greater => {
            let (right, result) = remove(node.right.take(), key);
            node.right = right;
            result
        }
        Ordering::Equal => {
            let Node {
                value, left, right, ..
            } = *node;
            return (splice(left, right), Ok(value));
        }
    };

    if result.is_err() {
        return (Some(node), result);
    }
    (Some(rebalance(node)), result)
}

/// Join the two subtrees of a removed node.
///
/// With zero or one child that child takes the node's place. With two, the
/// in-order successor (leftmost node of the right subtree) is detached and
/// becomes the new root over both.
fn splice<V>(left: Link<V>, right: Link<V>) -> Link<V> {
    match (left, right) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (Some(left), Some(right)) => {
            let (right, mut successor) = detach_min(right);
            successor.left = Some(left);
            successor.right = right;
            Some(rebalance(successor))
        }
    }
}

/// Detach the leftmost node of a subtree.
///
/// Returns the rebalanced remainder and the detached node (whose links are
/// cleared and whose height is stale until it is reattached).
fn detach_min<V>(mut node: Box<Node<V>>) -> (Link<V>, Box<Node<V>>) {
    match node.left.take() {
        None => {
            let right = node.right.take();
            (right, node)
        }
        Some(left) => {
            let (left, min) = detach_min(left);
            node.left = left;
            (Some(rebalance(node)), min)
        }
    }
}

// =============================================================================
// Read-only Traversal
// =============================================================================

/// In-order walk of `link`, visiting a subtree only when its key span can
/// intersect `[min_key, max_key]`.
pub(crate) fn collect_range<V>(link: &Link<V>, min_key: &str, max_key: &str, out: &mut Vec<String>) {
    let Some(node) = link else {
        return;
    };
    let key = node.key.as_str();

    if key > min_key {
        collect_range(&node.left, min_key, max_key, out);
    }
    if min_key <= key && key <= max_key {
        out.push(node.key.clone());
    }
    if key < max_key {
        collect_range(&node.right, min_key, max_key, out);
    }
}

/// Verify height bookkeeping, the AVL property and key ordering.
///
/// Returns the subtree height when every check passes.
pub(crate) fn check<V>(link: &Link<V>, lower: Option<&str>, upper: Option<&str>) -> Option<usize> {
    let Some(node) = link else {
        return Some(0);
    };
    let key = node.key.as_str();

    if lower.is_some_and(|lower| key <= lower) || upper.is_some_and(|upper| key >= upper) {
        return None;
    }

    let left = check(&node.left, lower, Some(key))?;
    let right = check(&node.right, Some(key), upper)?;

    if left.abs_diff(right) > 1 || node.height != 1 + left.max(right) {
        return None;
    }
    Some(node.height)
}
