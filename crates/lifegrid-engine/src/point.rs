//! Grid coordinates.
//!
//! A [`Point`] is an `(x, y)` pair where `x` is the column and `y` the row,
//! both zero-based with the origin at the top-left corner. Coordinates are
//! signed so that neighbor offsets and out-of-range probes never wrap.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A zero-based `(column, row)` coordinate.
///
/// Ordering is row-major (`y` first, then `x`), so a sorted set of points
/// reads top-to-bottom, left-to-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Column index.
    pub x: i64,
    /// Row index.
    pub y: i64,
}

impl Point {
    /// Create a point from column and row.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Return the point shifted by `(dx, dy)`, or `None` on overflow.
    pub const fn offset(self, dx: i64, dy: i64) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// Build a point from unsigned grid indices.
    ///
    /// Returns `None` if either index does not fit in an `i64`.
    pub fn from_indices(column: usize, row: usize) -> Option<Self> {
        let x = i64::try_from(column).ok()?;
        let y = i64::try_from(row).ok()?;
        Some(Self { x, y })
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}
