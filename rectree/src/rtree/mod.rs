//! In-memory binary R-Tree for exact containment queries.
//!
//! This module provides the single-owner tree behind the crate:
//! - Arena-backed nodes addressed by index, no per-node allocation
//! - Seven permanent seed nodes partitioning the plane into quadrants
//! - Guided insertion by containment, then least area increase
//! - Subtree pruning by cached minimum leaf area during queries
//!
//! The tree never rebalances; the seed scaffolding bounds how degenerate
//! insertion order can make it.

mod node;
mod stats;
mod tree;

pub use stats::TreeStats;
pub use tree::RectTree;
