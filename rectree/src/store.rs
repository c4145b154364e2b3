//! Common storage interface and a reference linear-scan implementation.

use crate::rect::Rect;
use crate::rtree::RectTree;
use std::collections::HashMap;
use std::hash::Hash;

/// Represents a keyed rectangle store answering containment queries.
///
/// This trait is the common surface of [`RectTree`](crate::RectTree) and
/// [`LinearScanStore`]: the same workload can run against the tree and
/// against a brute-force scan, which is how the tree's results are checked
/// and benchmarked.
pub trait RectStore<K> {
    /// Adds a rectangle under a unique key.
    ///
    /// Returns `true` if newly inserted, `false` if `key` is already
    /// present.
    fn add(&mut self, key: K, rect: Rect) -> bool;

    /// Removes the rectangle stored under `key`.
    ///
    /// Returns `true` if removed, `false` if `key` is unknown.
    fn remove(&mut self, key: &K) -> bool;

    /// Returns every stored rectangle fully contained by `query`, in no
    /// particular order.
    fn find_all_inside(&self, query: &Rect) -> Vec<(K, Rect)>;

    /// Returns the rectangle stored under `key`, if any.
    fn get(&self, key: &K) -> Option<Rect>;

    /// Returns the number of stored rectangles.
    fn len(&self) -> usize;

    /// Checks if no rectangles are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every stored rectangle.
    fn clear(&mut self);
}

impl<K: Clone + Eq + Hash> RectStore<K> for RectTree<K> {
    fn add(&mut self, key: K, rect: Rect) -> bool {
        RectTree::add(self, key, rect)
    }

    fn remove(&mut self, key: &K) -> bool {
        RectTree::remove(self, key)
    }

    fn find_all_inside(&self, query: &Rect) -> Vec<(K, Rect)> {
        RectTree::find_all_inside(self, query)
    }

    fn get(&self, key: &K) -> Option<Rect> {
        RectTree::get(self, key)
    }

    fn len(&self) -> usize {
        RectTree::len(self)
    }

    fn clear(&mut self) {
        RectTree::clear(self)
    }
}

/// Brute-force store: a flat map scanned in full on every query.
///
/// Exists as the obviously-correct oracle for differential tests and as the
/// baseline in benchmarks. Do not use it for large datasets.
#[derive(Debug, Clone, Default)]
pub struct LinearScanStore<K> {
    entries: HashMap<K, Rect>,
}

impl<K> LinearScanStore<K> {
    /// Creates an empty store.
    pub fn new() -> LinearScanStore<K> {
        LinearScanStore {
            entries: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> RectStore<K> for LinearScanStore<K> {
    fn add(&mut self, key: K, rect: Rect) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, rect);
        true
    }

    fn remove(&mut self, key: &K) -> bool {
        self.entries.remove(key).is_some()
    }

    fn find_all_inside(&self, query: &Rect) -> Vec<(K, Rect)> {
        self.entries
            .iter()
            .filter(|(_, rect)| query.contains(rect))
            .map(|(key, rect)| (key.clone(), *rect))
            .collect()
    }

    fn get(&self, key: &K) -> Option<Rect> {
        self.entries.get(key).copied()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: i64, y: i64, x2: i64, y2: i64) -> Rect {
        Rect::of(x, y, x2, y2).unwrap()
    }

    fn exercise(store: &mut dyn RectStore<u64>) {
        assert!(store.is_empty());
        assert!(store.add(1, rect(0, 0, 10, 10)));
        assert!(!store.add(1, rect(1, 1, 2, 2)));
        assert!(store.add(2, rect(20, 20, 30, 30)));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&1), Some(rect(0, 0, 10, 10)));

        let mut found = store.find_all_inside(&rect(-1, -1, 11, 11));
        found.sort_by_key(|(key, _)| *key);
        assert_eq!(found, vec![(1, rect(0, 0, 10, 10))]);

        assert!(store.remove(&1));
        assert!(!store.remove(&1));
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_linear_scan_store() {
        let mut store = LinearScanStore::new();
        exercise(&mut store);
    }

    #[test]
    fn test_tree_through_trait() {
        let mut tree = RectTree::new();
        exercise(&mut tree);
    }
}
