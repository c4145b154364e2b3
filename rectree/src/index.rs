//! Thread-safe shared handle over a [`RectTree`].

use crate::errors::RectreeResult;
use crate::rect::Rect;
use crate::rtree::{RectTree, TreeStats};
use parking_lot::RwLock;
use std::hash::Hash;
use std::sync::Arc;

/// A cloneable, thread-safe rectangle index.
///
/// `RectIndex` owns a [`RectTree`] behind an `RwLock`: mutations take the
/// write lock, queries and diagnostics take the read lock, so any number of
/// readers proceed in parallel and writers are exclusive. Every operation
/// acquires and releases the lock internally; nothing is held across calls.
///
/// Clones share the same underlying tree, so a `RectIndex` can be handed to
/// worker threads directly.
///
/// # Examples
///
/// ```rust
/// use rectree::{Rect, RectIndex};
///
/// let index: RectIndex<&str> = RectIndex::new();
/// index.add("desk", Rect::of(0, 0, 160, 80)?);
/// index.add("room", Rect::of(-10, -10, 500, 400)?);
///
/// let query = Rect::of(-5, -5, 200, 100)?;
/// assert_eq!(index.find_all_inside(&query), vec![("desk", Rect::of(0, 0, 160, 80)?)]);
/// # Ok::<(), rectree::RectreeError>(())
/// ```
#[derive(Clone)]
pub struct RectIndex<K> {
    inner: Arc<RectIndexInner<K>>,
}

struct RectIndexInner<K> {
    tree: RwLock<RectTree<K>>,
}

impl<K> RectIndex<K> {
    /// Creates an empty index.
    pub fn new() -> RectIndex<K> {
        RectIndex {
            inner: Arc::new(RectIndexInner {
                tree: RwLock::new(RectTree::new()),
            }),
        }
    }
}

impl<K> Default for RectIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash> RectIndex<K> {
    /// Inserts a rectangle under a unique key.
    ///
    /// # Arguments
    ///
    /// * `key` - Unique identity for the rectangle
    /// * `rect` - The rectangle to store
    ///
    /// # Returns
    ///
    /// `true` if newly inserted, `false` if `key` is already present.
    pub fn add(&self, key: K, rect: Rect) -> bool {
        self.inner.tree.write().add(key, rect)
    }

    /// Removes the rectangle stored under `key`.
    ///
    /// # Returns
    ///
    /// `true` if removed, `false` if `key` is unknown.
    pub fn remove(&self, key: &K) -> bool {
        self.inner.tree.write().remove(key)
    }

    /// Returns every stored rectangle fully contained by `query`, in no
    /// particular order.
    pub fn find_all_inside(&self, query: &Rect) -> Vec<(K, Rect)> {
        self.inner.tree.read().find_all_inside(query)
    }

    /// Returns the rectangle stored under `key`, if any.
    pub fn get(&self, key: &K) -> Option<Rect> {
        self.inner.tree.read().get(key)
    }

    /// Checks if `key` is currently stored.
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.tree.read().contains_key(key)
    }

    /// Returns the number of stored rectangles.
    pub fn len(&self) -> usize {
        self.inner.tree.read().len()
    }

    /// Checks if no rectangles are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.tree.read().is_empty()
    }

    /// Drops every stored rectangle.
    pub fn clear(&self) {
        self.inner.tree.write().clear();
    }

    /// Collects a [`TreeStats`] snapshot under the read lock.
    pub fn stats(&self) -> TreeStats {
        self.inner.tree.read().stats()
    }

    /// Audits the tree against its structural invariants under the read
    /// lock.
    pub fn verify(&self) -> RectreeResult<()> {
        self.inner.tree.read().verify()
    }
}
