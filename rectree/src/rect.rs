use crate::errors::{RectreeError, RectreeResult};
use std::fmt;

/// An axis-aligned rectangle with 64-bit integer coordinates.
///
/// `Rect` is the value type stored in and queried against the index. It is
/// defined by its lower-left corner `(x, y)` and upper-right corner
/// `(x2, y2)` and always satisfies `x < x2` and `y < y2` — degenerate
/// (zero-width or zero-height) rectangles cannot be constructed.
///
/// All derived quantities are exact: a rectangle may span the entire `i64`
/// range on both axes, so widths are reported as `u64` and areas as `u128`.
///
/// # Examples
///
/// ```rust
/// use rectree::Rect;
///
/// let outer = Rect::of(0, 0, 100, 100)?;
/// let inner = Rect::of(25, 25, 75, 75)?;
///
/// assert!(outer.contains(&inner));
/// assert_eq!(inner.area(), 2500);
/// # Ok::<(), rectree::RectreeError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Rect {
    x: i64,
    y: i64,
    x2: i64,
    y2: i64,
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect({}, {}, {}, {})", self.x, self.y, self.x2, self.y2)
    }
}

impl Rect {
    /// Creates a rectangle from its lower-left and upper-right corners.
    ///
    /// # Arguments
    ///
    /// * `x` - Left edge
    /// * `y` - Bottom edge
    /// * `x2` - Right edge, must be greater than `x`
    /// * `y2` - Top edge, must be greater than `y`
    ///
    /// # Returns
    ///
    /// The rectangle, or [`RectreeError::InvalidRectangle`] when an upper
    /// bound does not exceed its lower bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rectree::Rect;
    ///
    /// assert!(Rect::of(0, 0, 10, 10).is_ok());
    /// assert!(Rect::of(10, 0, 10, 10).is_err());
    /// ```
    pub fn of(x: i64, y: i64, x2: i64, y2: i64) -> RectreeResult<Rect> {
        if x2 <= x {
            return Err(RectreeError::InvalidRectangle(
                "'x2' must be greater than 'x'".to_string(),
            ));
        }
        if y2 <= y {
            return Err(RectreeError::InvalidRectangle(
                "'y2' must be greater than 'y'".to_string(),
            ));
        }
        Ok(Rect { x, y, x2, y2 })
    }

    // Seed rectangles are compile-time constants with known-good bounds.
    pub(crate) const fn new_unchecked(x: i64, y: i64, x2: i64, y2: i64) -> Rect {
        Rect { x, y, x2, y2 }
    }

    /// Returns the left edge.
    pub fn x(&self) -> i64 {
        self.x
    }

    /// Returns the bottom edge.
    pub fn y(&self) -> i64 {
        self.y
    }

    /// Returns the right edge.
    pub fn x2(&self) -> i64 {
        self.x2
    }

    /// Returns the top edge.
    pub fn y2(&self) -> i64 {
        self.y2
    }

    /// Returns the width. Exact even when the rectangle spans the full
    /// coordinate range.
    pub fn width(&self) -> u64 {
        (self.x2 as i128 - self.x as i128) as u64
    }

    /// Returns the height.
    pub fn height(&self) -> u64 {
        (self.y2 as i128 - self.y as i128) as u64
    }

    /// Returns the exact area.
    ///
    /// The product of two full-range spans does not fit a 64-bit integer,
    /// so the area is computed and returned as `u128`, which holds the
    /// maximum possible value `(2⁶⁴−1)²` without loss.
    pub fn area(&self) -> u128 {
        self.width() as u128 * self.height() as u128
    }

    /// Checks if this rectangle fully contains another.
    ///
    /// Containment is edge-inclusive: a rectangle contains itself.
    pub fn contains(&self, other: &Rect) -> bool {
        self.x <= other.x && self.x2 >= other.x2 && self.y <= other.y && self.y2 >= other.y2
    }

    /// Checks if this rectangle overlaps another over a positive area.
    ///
    /// Rectangles that only share an edge or a corner do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x2 && self.x2 > other.x && self.y < other.y2 && self.y2 > other.y
    }

    /// Returns the smallest rectangle containing both this and another.
    pub fn join(&self, other: &Rect) -> Rect {
        Rect {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
            x2: self.x2.max(other.x2),
            y2: self.y2.max(other.y2),
        }
    }

    /// Returns the exact area of [`join`](Rect::join) without constructing it.
    pub fn joined_area(&self, other: &Rect) -> u128 {
        self.join(other).area()
    }

    /// Returns the overlapping region, if the rectangles intersect.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }
        Some(Rect {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
            x2: self.x2.min(other.x2),
            y2: self.y2.min(other.y2),
        })
    }

    /// Returns the exact area of the overlapping region, zero when the
    /// rectangles do not intersect.
    pub fn intersection_area(&self, other: &Rect) -> u128 {
        if !self.intersects(other) {
            return 0;
        }
        let width = (self.x2.min(other.x2) as i128 - self.x.max(other.x) as i128) as u128;
        let height = (self.y2.min(other.y2) as i128 - self.y.max(other.y) as i128) as u128;
        width * height
    }
}
