use crate::errors::{RectreeError, RectreeResult};
use crate::rect::Rect;
use crate::rtree::node::{Node, NodeId, NodeKind, Slot};
use std::collections::HashMap;
use std::hash::Hash;

// Fixed scaffolding: four quadrants, two half-planes, and the whole plane.
// Built once per tree, never removed.
const NW: Rect = Rect::new_unchecked(i64::MIN, 0, 0, i64::MAX);
const NE: Rect = Rect::new_unchecked(0, 0, i64::MAX, i64::MAX);
const SE: Rect = Rect::new_unchecked(0, i64::MIN, i64::MAX, 0);
const SW: Rect = Rect::new_unchecked(i64::MIN, i64::MIN, 0, 0);
const WEST: Rect = Rect::new_unchecked(i64::MIN, i64::MIN, 0, i64::MAX);
const EAST: Rect = Rect::new_unchecked(0, i64::MIN, i64::MAX, i64::MAX);
const PLANE: Rect = Rect::new_unchecked(i64::MIN, i64::MIN, i64::MAX, i64::MAX);

const SEED_COUNT: usize = 7;

/// A binary R-Tree over integer rectangles, optimized for "find everything
/// fully inside this query rectangle".
///
/// # Purpose
/// `RectTree` stores rectangles identified by a caller-supplied unique key
/// and answers containment queries without scanning every entry. Internal
/// nodes cache two quantities per subtree: the bounding rectangle of all
/// rectangles below, and the smallest leaf area below. A query descends into
/// a subtree only when its overlap with the subtree's bounds is at least
/// that minimum area — a smaller overlap cannot fully contain any leaf in
/// the subtree.
///
/// # Structure
/// The tree is binary, values live only in leaves, and there is no
/// rebalancing. Seven permanent seed nodes partition the plane into
/// quadrants at construction time and bound the worst-case shape; data
/// attaches at or below the quadrant seeds. Nodes live in a slot arena and
/// refer to each other by index.
///
/// `RectTree` is single-owner (`&mut self` mutations). For a shared,
/// thread-safe handle see [`RectIndex`](crate::RectIndex).
///
/// # Examples
///
/// ```rust
/// use rectree::{Rect, RectTree};
///
/// let mut tree: RectTree<u64> = RectTree::new();
/// tree.add(1, Rect::of(0, 0, 10, 10)?);
/// tree.add(2, Rect::of(200, 200, 210, 210)?);
///
/// let query = Rect::of(-50, -50, 50, 50)?;
/// let found = tree.find_all_inside(&query);
/// assert_eq!(found, vec![(1, Rect::of(0, 0, 10, 10)?)]);
/// # Ok::<(), rectree::RectreeError>(())
/// ```
pub struct RectTree<K> {
    slots: Vec<Option<Node<K>>>,
    free: Vec<NodeId>,
    root: NodeId,
    ids: HashMap<K, NodeId>,
}

impl<K> RectTree<K> {
    /// Creates an empty tree with the fixed quadrant scaffolding in place.
    pub fn new() -> RectTree<K> {
        let mut tree = RectTree {
            slots: Vec::with_capacity(SEED_COUNT),
            free: Vec::new(),
            root: NodeId::new(0),
            ids: HashMap::new(),
        };
        let root = tree.alloc(Node::seed(PLANE));
        let west = tree.alloc(Node::seed(WEST));
        let east = tree.alloc(Node::seed(EAST));
        let sw = tree.alloc(Node::seed(SW));
        let nw = tree.alloc(Node::seed(NW));
        let se = tree.alloc(Node::seed(SE));
        let ne = tree.alloc(Node::seed(NE));
        tree.root = root;
        tree.link(root, Slot::Left, west);
        tree.link(root, Slot::Right, east);
        tree.link(west, Slot::Left, sw);
        tree.link(west, Slot::Right, nw);
        tree.link(east, Slot::Left, se);
        tree.link(east, Slot::Right, ne);
        log::debug!("created rectangle tree with quadrant scaffolding");
        tree
    }

    pub(crate) fn root_id(&self) -> NodeId {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<K> {
        match self.slots.get(id.index()).and_then(|slot| slot.as_ref()) {
            Some(node) => node,
            None => invariant_broken(format!("node {:?} points at an empty arena slot", id)),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<K> {
        match self.slots.get_mut(id.index()).and_then(|slot| slot.as_mut()) {
            Some(node) => node,
            None => invariant_broken(format!("node {:?} points at an empty arena slot", id)),
        }
    }

    fn alloc(&mut self, node: Node<K>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.index()] = Some(node);
                id
            }
            None => {
                let id = NodeId::new(self.slots.len());
                self.slots.push(Some(node));
                id
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        self.slots[id.index()] = None;
        self.free.push(id);
    }

    fn link(&mut self, parent: NodeId, slot: Slot, child: NodeId) {
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).set_child(slot, Some(child));
    }

    fn parent_of(&self, id: NodeId) -> NodeId {
        match self.node(id).parent {
            Some(parent) => parent,
            None => invariant_broken(format!("node {:?} has no parent", id)),
        }
    }

    fn slot_in_parent(&self, parent: NodeId, child: NodeId) -> Slot {
        match self.node(parent).slot_of(child) {
            Some(slot) => slot,
            None => invariant_broken(format!(
                "node {:?} is not a child of its recorded parent {:?}",
                child, parent
            )),
        }
    }

    /// The exact cache values `id` should carry given its current children.
    ///
    /// Applies at every child count: a childless seed falls back to its base
    /// rectangle and carries no leaf area at all.
    fn recompute(&self, id: NodeId) -> (Rect, u128) {
        let node = self.node(id);
        if node.is_leaf() {
            return (node.rect, node.rect.area());
        }
        let mut bounds: Option<Rect> = None;
        let mut min = u128::MAX;
        for child in [node.left, node.right].into_iter().flatten() {
            let child_node = self.node(child);
            bounds = Some(match bounds {
                Some(rect) => rect.join(&child_node.rect),
                None => child_node.rect,
            });
            min = min.min(child_node.min_leaf_area);
        }
        match node.seed_base() {
            Some(base) => {
                let rect = match bounds {
                    Some(rect) => rect.join(&base),
                    None => base,
                };
                (rect, min)
            }
            None => match bounds {
                Some(rect) => (rect, min),
                None => invariant_broken(format!("branch {:?} has no children", id)),
            },
        }
    }

    /// Recomputes cached bounds and minimum leaf areas from `start` toward
    /// the root, stopping once a level confirms both unchanged.
    fn propagate_from(&mut self, start: NodeId) {
        let mut current = Some(start);
        while let Some(id) = current {
            let (rect, min) = self.recompute(id);
            let node = self.node_mut(id);
            if node.rect == rect && node.min_leaf_area == min {
                break;
            }
            node.rect = rect;
            node.min_leaf_area = min;
            current = node.parent;
        }
    }
}

impl<K> Default for RectTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash> RectTree<K> {
    /// Inserts a rectangle under a unique key.
    ///
    /// Descends from the root guided by containment and least area increase,
    /// then pairs the new leaf with an existing node under a fresh branch —
    /// or attaches it directly when an empty seed slot is chosen.
    ///
    /// # Arguments
    ///
    /// * `key` - Unique identity for the rectangle
    /// * `rect` - The rectangle to store
    ///
    /// # Returns
    ///
    /// `true` if newly inserted, `false` if `key` is already present (the
    /// tree is left untouched).
    pub fn add(&mut self, key: K, rect: Rect) -> bool {
        if self.ids.contains_key(&key) {
            return false;
        }
        let mut current = self.root;
        loop {
            let node = self.node(current);
            if node.is_leaf() {
                self.merge_at(current, key, rect);
                return true;
            }
            // A new rectangle swallowing a whole data subtree becomes its
            // parent instead of descending further. Seeds are exempt; they
            // are never demoted below a branch.
            if !node.is_seed() && rect.contains(&node.rect) {
                self.merge_at(current, key, rect);
                return true;
            }
            let left = node.left;
            let right = node.right;
            if let Some(child) = left {
                if self.node(child).rect.contains(&rect) {
                    current = child;
                    continue;
                }
            }
            if let Some(child) = right {
                if self.node(child).rect.contains(&rect) {
                    current = child;
                    continue;
                }
            }
            let left_cost = self.area_increase(left, &rect);
            let right_cost = self.area_increase(right, &rect);
            if left_cost <= right_cost {
                match left {
                    Some(child) => current = child,
                    None => {
                        self.attach_leaf(current, Slot::Left, key, rect);
                        return true;
                    }
                }
            } else {
                match right {
                    Some(child) => current = child,
                    None => {
                        self.attach_leaf(current, Slot::Right, key, rect);
                        return true;
                    }
                }
            }
        }
    }

    /// Cost of accepting `rect` into a child: how much the child's bounds
    /// would grow. An empty slot costs the full rectangle area.
    fn area_increase(&self, child: Option<NodeId>, rect: &Rect) -> u128 {
        match child {
            Some(id) => {
                let bounds = self.node(id).rect;
                bounds.joined_area(rect) - bounds.area()
            }
            None => rect.area(),
        }
    }

    /// Pairs `rect` with `existing` under a new branch that takes over
    /// `existing`'s slot in its parent, then repairs the caches above.
    fn merge_at(&mut self, existing: NodeId, key: K, rect: Rect) {
        let parent = self.parent_of(existing);
        let slot = self.slot_in_parent(parent, existing);
        let joined = self.node(existing).rect.join(&rect);
        let min = self.node(existing).min_leaf_area.min(rect.area());
        let leaf = self.alloc(Node::leaf(key.clone(), rect));
        let branch = self.alloc(Node::branch(joined, min, Some(parent), existing, leaf));
        self.node_mut(existing).parent = Some(branch);
        self.node_mut(leaf).parent = Some(branch);
        self.node_mut(parent).set_child(slot, Some(branch));
        self.ids.insert(key, leaf);
        self.propagate_from(parent);
    }

    /// Attaches a fresh leaf into an empty child slot of a seed.
    fn attach_leaf(&mut self, parent: NodeId, slot: Slot, key: K, rect: Rect) {
        let leaf = self.alloc(Node::leaf(key.clone(), rect));
        self.node_mut(leaf).parent = Some(parent);
        self.node_mut(parent).set_child(slot, Some(leaf));
        self.ids.insert(key, leaf);
        self.propagate_from(parent);
    }

    /// Removes the rectangle stored under `key`.
    ///
    /// The leaf is located by guided descent and spliced out: its sibling
    /// takes the parent branch's place in the grandparent. A seed parent is
    /// never spliced out — it only drops the removed child and degrades
    /// toward an empty slot.
    ///
    /// # Returns
    ///
    /// `true` if removed, `false` if `key` is unknown (the tree is left
    /// untouched).
    pub fn remove(&mut self, key: &K) -> bool {
        let target = match self.ids.get(key) {
            Some(&leaf) => self.node(leaf).rect,
            None => return false,
        };
        let leaf = self.locate_leaf(key, &target);
        let parent = self.parent_of(leaf);
        let slot = self.slot_in_parent(parent, leaf);
        if self.node(parent).is_seed() {
            self.node_mut(parent).set_child(slot, None);
            self.release(leaf);
            self.ids.remove(key);
            self.propagate_from(parent);
        } else {
            let sibling = match self.node(parent).child(slot.other()) {
                Some(sibling) => sibling,
                None => invariant_broken(format!(
                    "branch {:?} is missing the sibling of leaf {:?}",
                    parent, leaf
                )),
            };
            let grandparent = self.parent_of(parent);
            let parent_slot = self.slot_in_parent(grandparent, parent);
            self.node_mut(sibling).parent = Some(grandparent);
            self.node_mut(grandparent).set_child(parent_slot, Some(sibling));
            self.release(leaf);
            self.release(parent);
            self.ids.remove(key);
            self.propagate_from(grandparent);
        }
        true
    }

    /// Guided descent to the leaf holding `key`: walks only subtrees whose
    /// bounds contain the target rectangle, visiting both children when both
    /// qualify, and matches geometry plus key at the leaves.
    fn locate_leaf(&self, key: &K, target: &Rect) -> NodeId {
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.is_leaf() {
                if node.rect == *target && node.key() == Some(key) {
                    return id;
                }
                continue;
            }
            for child in [node.left, node.right].into_iter().flatten() {
                if self.node(child).rect.contains(target) {
                    stack.push(child);
                }
            }
        }
        invariant_broken("identity index references a leaf the tree cannot reach".to_string())
    }

    /// Returns every stored rectangle fully contained by `query`, in no
    /// particular order.
    ///
    /// A subtree is visited only when the query's overlap with its bounds
    /// is at least the subtree's minimum leaf area; a smaller overlap cannot
    /// fully contain any leaf below.
    pub fn find_all_inside(&self, query: &Rect) -> Vec<(K, Rect)> {
        let mut found = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            match &node.kind {
                NodeKind::Leaf { key } => {
                    if query.contains(&node.rect) {
                        found.push((key.clone(), node.rect));
                    }
                }
                _ => {
                    for child in [node.left, node.right].into_iter().flatten() {
                        let child_node = self.node(child);
                        if query.intersection_area(&child_node.rect) >= child_node.min_leaf_area {
                            stack.push(child);
                        }
                    }
                }
            }
        }
        found
    }

    /// Returns the rectangle stored under `key`, if any.
    pub fn get(&self, key: &K) -> Option<Rect> {
        self.ids.get(key).map(|&leaf| self.node(leaf).rect)
    }

    /// Checks if `key` is currently stored.
    pub fn contains_key(&self, key: &K) -> bool {
        self.ids.contains_key(key)
    }

    /// Returns the number of stored rectangles.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Checks if no rectangles are stored.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Drops every stored rectangle, restoring the pristine scaffolding.
    pub fn clear(&mut self) {
        log::debug!("clearing rectangle tree with {} entries", self.len());
        *self = RectTree::new();
    }

    /// Audits the entire tree against its structural invariants.
    ///
    /// Checks parent/child link symmetry, the child-count rule (leaves have
    /// none, branches exactly two, only seeds may degrade), seed placement,
    /// cached bounds and minimum leaf areas against full recomputation, the
    /// identity-index mirror, and arena occupancy. Read-only; the first
    /// failure is reported as [`RectreeError::CorruptedTree`].
    pub fn verify(&self) -> RectreeResult<()> {
        let root = self.node_checked(self.root)?;
        if !root.is_seed() {
            return audit_fail(format!("root {:?} is not a seed node", self.root));
        }
        if root.parent.is_some() {
            return audit_fail(format!("root {:?} has a parent", self.root));
        }
        let mut leaves = 0usize;
        let mut seeds = 0usize;
        let mut visited = 0usize;
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            visited += 1;
            let node = self.node_checked(id)?;
            for slot in [Slot::Left, Slot::Right] {
                if let Some(child) = node.child(slot) {
                    let child_node = self.node_checked(child)?;
                    if child_node.parent != Some(id) {
                        return audit_fail(format!(
                            "node {:?}: child {:?} does not link back to it",
                            id, child
                        ));
                    }
                    stack.push(child);
                }
            }
            match &node.kind {
                NodeKind::Leaf { key } => {
                    if node.child_count() != 0 {
                        return audit_fail(format!("leaf {:?} has children", id));
                    }
                    if self.ids.get(key) != Some(&id) {
                        return audit_fail(format!(
                            "leaf {:?} is not mirrored by the identity index",
                            id
                        ));
                    }
                    leaves += 1;
                }
                NodeKind::Branch => {
                    if node.child_count() != 2 {
                        return audit_fail(format!(
                            "branch {:?} has {} children instead of 2",
                            id,
                            node.child_count()
                        ));
                    }
                    if node.parent.is_none() {
                        return audit_fail(format!("branch {:?} has no parent", id));
                    }
                }
                NodeKind::Seed { .. } => {
                    seeds += 1;
                    if let Some(parent) = node.parent {
                        if !self.node_checked(parent)?.is_seed() {
                            return audit_fail(format!(
                                "seed {:?} hangs under a non-seed node",
                                id
                            ));
                        }
                    }
                }
            }
            // Children were resolved above, so recomputation cannot hit an
            // empty slot.
            let (rect, min) = self.recompute(id);
            if node.rect != rect {
                return audit_fail(format!(
                    "node {:?}: cached bounds {} differ from recomputed {}",
                    id, node.rect, rect
                ));
            }
            if node.min_leaf_area != min {
                return audit_fail(format!(
                    "node {:?}: cached min leaf area {} differs from recomputed {}",
                    id, node.min_leaf_area, min
                ));
            }
        }
        if seeds != SEED_COUNT {
            return audit_fail(format!("expected {} seed nodes, found {}", SEED_COUNT, seeds));
        }
        if leaves != self.ids.len() {
            return audit_fail(format!(
                "{} reachable leaves but {} identity index entries",
                leaves,
                self.ids.len()
            ));
        }
        let occupied = self.slots.iter().filter(|slot| slot.is_some()).count();
        if occupied != visited {
            return audit_fail(format!(
                "{} occupied arena slots but {} reachable nodes",
                occupied, visited
            ));
        }
        Ok(())
    }

    fn node_checked(&self, id: NodeId) -> RectreeResult<&Node<K>> {
        match self.slots.get(id.index()).and_then(|slot| slot.as_ref()) {
            Some(node) => Ok(node),
            None => audit_fail(format!("node {:?} points at an empty arena slot", id)),
        }
    }
}

fn invariant_broken(message: String) -> ! {
    log::error!("{}", message);
    panic!("{}", message);
}

fn audit_fail<T>(message: String) -> RectreeResult<T> {
    log::error!("{}", message);
    Err(RectreeError::CorruptedTree(message))
}
