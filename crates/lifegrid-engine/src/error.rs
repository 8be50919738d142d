//! Error types for the `lifegrid-engine` crate.
//!
//! All fallible operations in this crate return [`GridError`] through the
//! standard [`Result`] type. Out-of-bounds reads through
//! [`get_cell`](crate::grid::get_cell) are not errors: they are defined to
//! return a dead cell.

use crate::point::Point;

/// Errors that can occur while building, decoding, or querying a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The input text contained no usable rows.
    #[error("grid input is empty: at least one row is required")]
    EmptyInput,

    /// A neighbor query was made for a point outside the grid.
    ///
    /// Distinct from a point that exists and has zero live neighbors.
    #[error("point {point} is not in the grid")]
    PointNotInGrid {
        /// The queried point.
        point: Point,
    },

    /// A grid was requested with a zero width or height.
    #[error("grid dimensions {width}x{height} are empty")]
    EmptyDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// Rows passed to a constructor did not all have the same length.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// Arithmetic overflow while computing grid dimensions.
    #[error("arithmetic overflow in grid dimensions")]
    ArithmeticOverflow,
}
