use crate::rect::Rect;
use crate::rtree::tree::RectTree;

/// Diagnostic snapshot of a tree's shape and layout quality.
///
/// Depths are counted in nodes along the root-to-leaf path, both ends
/// included, so a leaf sitting directly under a quadrant seed has depth 4.
/// Sibling overlap ratios measure how much the two children of a node
/// intersect relative to their combined area; high values mean queries must
/// often descend both sides.
#[derive(Debug, Clone, Default)]
pub struct TreeStats {
    /// Deepest root-to-leaf path, in nodes. Zero when no data is stored.
    pub max_depth: u64,
    /// Mean root-to-leaf path length over all leaves.
    pub average_depth: f64,
    /// Total nodes including the seven seeds.
    pub node_count: u64,
    /// Number of stored rectangles.
    pub leaf_count: u64,
    /// Largest sibling overlap ratio over all two-child nodes.
    pub max_sibling_overlap_ratio: f64,
    /// Mean sibling overlap ratio over all two-child nodes.
    pub average_sibling_overlap_ratio: f64,
}

impl<K> RectTree<K> {
    /// Collects a [`TreeStats`] snapshot in one traversal.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        let mut depth_sum: u128 = 0;
        let mut pair_count: u64 = 0;
        let mut ratio_sum: f64 = 0.0;
        let mut stack = vec![(self.root_id(), 1u64)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.node(id);
            stats.node_count += 1;
            if node.is_leaf() {
                stats.leaf_count += 1;
                stats.max_depth = stats.max_depth.max(depth);
                depth_sum += depth as u128;
                continue;
            }
            if let (Some(left), Some(right)) = (node.left, node.right) {
                let ratio = sibling_overlap_ratio(&self.node(left).rect, &self.node(right).rect);
                ratio_sum += ratio;
                stats.max_sibling_overlap_ratio = stats.max_sibling_overlap_ratio.max(ratio);
                pair_count += 1;
            }
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        if stats.leaf_count > 0 {
            stats.average_depth = depth_sum as f64 / stats.leaf_count as f64;
        }
        if pair_count > 0 {
            stats.average_sibling_overlap_ratio = ratio_sum / pair_count as f64;
        }
        stats
    }
}

fn sibling_overlap_ratio(left: &Rect, right: &Rect) -> f64 {
    let overlap = left.intersection_area(right);
    if overlap == 0 {
        return 0.0;
    }
    overlap as f64 / (left.area() as f64 + right.area() as f64)
}
