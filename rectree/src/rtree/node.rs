//! Arena node types for the binary R-Tree.
//!
//! Nodes live in a slot vector owned by the tree and refer to each other by
//! [`NodeId`] index, never by reference. The parent link is a plain index
//! used for upward propagation; ownership always runs parent → children.

use crate::rect::Rect;

/// Index of a node slot in the tree arena.
///
/// Ids are internal to the crate and never survive outside a tree method,
/// so freed slots can be reused without generation counters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> NodeId {
        NodeId(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A child position in a binary node, named explicitly so splices never
/// have to rediscover which side a node hangs on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Slot {
    Left,
    Right,
}

impl Slot {
    pub(crate) fn other(self) -> Slot {
        match self {
            Slot::Left => Slot::Right,
            Slot::Right => Slot::Left,
        }
    }
}

/// What a node is: permanent scaffolding, a merge-created branch, or a
/// stored rectangle.
#[derive(Clone, Debug)]
pub(crate) enum NodeKind<K> {
    /// Fixed scaffolding node; `base` is the region it pre-partitions and
    /// its bounding rectangle never shrinks below it.
    Seed { base: Rect },
    /// Internal node created by a merge; always has exactly two children.
    Branch,
    /// Stored rectangle and its identity key; never has children.
    Leaf { key: K },
}

/// A node in the tree arena.
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    /// Bounding rectangle: the payload rectangle for a leaf, the union of
    /// the children (widened by `base` for seeds) otherwise.
    pub(crate) rect: Rect,
    /// Smallest leaf area in this subtree, `u128::MAX` when it holds none.
    pub(crate) min_leaf_area: u128,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) kind: NodeKind<K>,
}

impl<K> Node<K> {
    pub(crate) fn seed(base: Rect) -> Node<K> {
        Node {
            rect: base,
            min_leaf_area: u128::MAX,
            parent: None,
            left: None,
            right: None,
            kind: NodeKind::Seed { base },
        }
    }

    pub(crate) fn leaf(key: K, rect: Rect) -> Node<K> {
        Node {
            rect,
            min_leaf_area: rect.area(),
            parent: None,
            left: None,
            right: None,
            kind: NodeKind::Leaf { key },
        }
    }

    pub(crate) fn branch(
        rect: Rect,
        min_leaf_area: u128,
        parent: Option<NodeId>,
        left: NodeId,
        right: NodeId,
    ) -> Node<K> {
        Node {
            rect,
            min_leaf_area,
            parent,
            left: Some(left),
            right: Some(right),
            kind: NodeKind::Branch,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    pub(crate) fn is_seed(&self) -> bool {
        matches!(self.kind, NodeKind::Seed { .. })
    }

    /// Returns the fixed base rectangle for seeds, `None` otherwise.
    pub(crate) fn seed_base(&self) -> Option<Rect> {
        match self.kind {
            NodeKind::Seed { base } => Some(base),
            _ => None,
        }
    }

    pub(crate) fn key(&self) -> Option<&K> {
        match &self.kind {
            NodeKind::Leaf { key } => Some(key),
            _ => None,
        }
    }

    pub(crate) fn child(&self, slot: Slot) -> Option<NodeId> {
        match slot {
            Slot::Left => self.left,
            Slot::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, slot: Slot, child: Option<NodeId>) {
        match slot {
            Slot::Left => self.left = child,
            Slot::Right => self.right = child,
        }
    }

    /// Which slot of this node holds `child`, if either does.
    pub(crate) fn slot_of(&self, child: NodeId) -> Option<Slot> {
        if self.left == Some(child) {
            Some(Slot::Left)
        } else if self.right == Some(child) {
            Some(Slot::Right)
        } else {
            None
        }
    }

    pub(crate) fn child_count(&self) -> usize {
        self.left.is_some() as usize + self.right.is_some() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: i64, y: i64, x2: i64, y2: i64) -> Rect {
        Rect::of(x, y, x2, y2).unwrap()
    }

    #[test]
    fn test_leaf_node() {
        let node: Node<u64> = Node::leaf(7, rect(0, 0, 4, 5));
        assert!(node.is_leaf());
        assert!(!node.is_seed());
        assert_eq!(node.key(), Some(&7));
        assert_eq!(node.min_leaf_area, 20);
        assert_eq!(node.child_count(), 0);
    }

    #[test]
    fn test_seed_node() {
        let base = rect(0, 0, 10, 10);
        let node: Node<u64> = Node::seed(base);
        assert!(node.is_seed());
        assert_eq!(node.seed_base(), Some(base));
        assert_eq!(node.min_leaf_area, u128::MAX);
        assert_eq!(node.key(), None);
    }

    #[test]
    fn test_slots() {
        let mut node: Node<u64> = Node::seed(rect(0, 0, 10, 10));
        let a = NodeId::new(1);
        let b = NodeId::new(2);

        node.set_child(Slot::Left, Some(a));
        node.set_child(Slot::Right, Some(b));
        assert_eq!(node.child(Slot::Left), Some(a));
        assert_eq!(node.child(Slot::Right), Some(b));
        assert_eq!(node.slot_of(a), Some(Slot::Left));
        assert_eq!(node.slot_of(b), Some(Slot::Right));
        assert_eq!(node.slot_of(NodeId::new(3)), None);
        assert_eq!(node.child_count(), 2);

        node.set_child(Slot::Left, None);
        assert_eq!(node.child_count(), 1);
    }

    #[test]
    fn test_slot_other() {
        assert_eq!(Slot::Left.other(), Slot::Right);
        assert_eq!(Slot::Right.other(), Slot::Left);
    }
}
