//! # Rectree - Exact Rectangle Containment Index
//!
//! This crate provides an in-memory binary R-Tree over integer-coordinate
//! rectangles, answering one query: which stored rectangles lie fully
//! inside a given query rectangle.
//!
//! ## Features
//!
//! - **Containment Queries**: Finds every rectangle fully inside the query,
//!   never partial overlaps
//! - **Exact Arithmetic**: `i64` coordinates with widened area math, so the
//!   full coordinate range works without overflow
//! - **Minimum-Leaf-Area Pruning**: Subtrees whose smallest rectangle cannot
//!   fit in the query are skipped entirely
//! - **Incremental**: Keyed add and remove, no bulk loading or rebuilds
//! - **Thread Safe**: [`RectIndex`] shares one tree across threads behind a
//!   read-write lock
//! - **Self-Checking**: A full structural audit is one [`RectTree::verify`]
//!   call away
//!
//! ## Quick Start
//!
//! ```rust
//! use rectree::{Rect, RectTree};
//!
//! # fn main() -> Result<(), rectree::RectreeError> {
//! let mut tree: RectTree<u64> = RectTree::new();
//!
//! // Add rectangles under unique keys
//! tree.add(1, Rect::of(0, 0, 10, 10)?);
//! tree.add(2, Rect::of(20, 20, 30, 30)?);
//! tree.add(3, Rect::of(0, 0, 40, 40)?);
//!
//! // Everything fully inside the query rectangle
//! let found = tree.find_all_inside(&Rect::of(-5, -5, 35, 35)?);
//! assert_eq!(found.len(), 2); // keys 1 and 2; key 3 sticks out
//!
//! // Removal is by key
//! tree.remove(&1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Shared Access
//!
//! ```rust
//! use rectree::{Rect, RectIndex};
//! use std::thread;
//!
//! # fn main() -> Result<(), rectree::RectreeError> {
//! let index: RectIndex<u64> = RectIndex::new();
//! let writer = index.clone();
//!
//! let handle = thread::spawn(move || {
//!     writer.add(1, Rect::of(0, 0, 10, 10).unwrap());
//! });
//! handle.join().unwrap();
//!
//! assert_eq!(index.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod index;
pub mod rect;
pub mod rtree;
pub mod store;

// Re-export the core types
pub use errors::{RectreeError, RectreeResult};
pub use index::RectIndex;
pub use rect::Rect;
pub use rtree::{RectTree, TreeStats};

// Re-export the storage abstraction
pub use store::{LinearScanStore, RectStore};
