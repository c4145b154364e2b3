//! Error and result types for rectangle index operations.

use thiserror::Error;

/// Errors that can occur in rectangle index operations.
///
/// Expected outcomes are deliberately not errors: adding a key that is
/// already present and removing an unknown key are reported as `false` by
/// [`add`](crate::RectTree::add) and [`remove`](crate::RectTree::remove).
/// A structural invariant broken in the middle of a mutation is a bug, not
/// an error value, and panics at the point of detection.
#[derive(Debug, Error)]
pub enum RectreeError {
    /// A rectangle failed its construction precondition (`x < x2` and `y < y2`).
    #[error("invalid rectangle: {0}")]
    InvalidRectangle(String),

    /// A consistency audit found the tree in a state that violates a
    /// structural invariant.
    #[error("corrupted tree: {0}")]
    CorruptedTree(String),
}

/// Result type for rectangle index operations.
pub type RectreeResult<T> = Result<T, RectreeError>;
