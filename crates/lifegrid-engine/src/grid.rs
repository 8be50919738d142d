//! The grid value: a non-empty, rectangular matrix of live/dead cells.
//!
//! A [`Grid`] is stored row-major in a single `Vec<bool>` with explicit
//! `width` and `height`. It is never mutated after construction; stepping
//! and padding allocate a fresh buffer and return a new grid, leaving the
//! previous generation intact.
//!
//! Every constructor checks the two structural invariants:
//!
//! - at least one row and one column;
//! - every row has the same length.
//!
//! Reads through [`Grid::get`] (and the free function [`get_cell`]) are
//! total: any point outside the grid reads as dead. This removes edge and
//! corner special cases from neighbor counting.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::point::Point;

/// A rectangular matrix of boolean cells (`true` = alive).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")]
pub struct Grid {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Row-major cell states, `width * height` long.
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyDimensions`] if either dimension is zero,
    /// or [`GridError::ArithmeticOverflow`] if the cell count overflows.
    pub fn dead(width: usize, height: usize) -> Result<Self, GridError> {
        let len = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    /// Build a grid from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyDimensions`] if there are no rows or the
    /// first row is empty, and [`GridError::Ragged`] if any row differs in
    /// length from the first.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let len = cell_count(width, height)?;

        let mut cells = Vec::with_capacity(len);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid by evaluating `f` at every point, row by row.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyDimensions`] if either dimension is zero.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self, GridError>
    where
        F: FnMut(Point) -> bool,
    {
        let len = cell_count(width, height)?;
        let mut cells = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                let point = Point::from_indices(x, y).ok_or(GridError::ArithmeticOverflow)?;
                cells.push(f(point));
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build an otherwise-dead grid with the given cells alive.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyDimensions`] for a zero dimension and
    /// [`GridError::PointNotInGrid`] if any live point lies outside the grid.
    pub fn with_live_cells<I>(width: usize, height: usize, live: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut grid = Self::dead(width, height)?;
        for point in live {
            let idx = grid
                .index(point)
                .ok_or(GridError::PointNotInGrid { point })?;
            if let Some(cell) = grid.cells.get_mut(idx) {
                *cell = true;
            }
        }
        Ok(grid)
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether `point` addresses a cell of this grid.
    pub fn in_bounds(&self, point: Point) -> bool {
        self.index(point).is_some()
    }

    /// The state of the cell at `point`; `false` for any out-of-bounds point.
    pub fn get(&self, point: Point) -> bool {
        self.index(point)
            .and_then(|idx| self.cells.get(idx))
            .copied()
            .unwrap_or(false)
    }

    /// The cells of row `y`, or `None` past the last row.
    pub fn row(&self, y: usize) -> Option<&[bool]> {
        let start = y.checked_mul(self.width)?;
        let end = start.checked_add(self.width)?;
        self.cells.get(start..end)
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // width is never zero, see `cell_count`
        self.cells.chunks_exact(self.width)
    }

    /// Iterate over every coordinate in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).filter_map(move |x| Point::from_indices(x, y)))
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every live cell.
    pub fn cell_set(&self) -> BTreeSet<Point> {
        self.points().filter(|&p| self.get(p)).collect()
    }

    /// Return a copy grown with dead columns on the right and dead rows at
    /// the bottom until it is at least `min_width` by `min_height`.
    ///
    /// Dimensions already at or above the minimum are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ArithmeticOverflow`] if the padded cell count
    /// overflows.
    pub fn padded(&self, min_width: usize, min_height: usize) -> Result<Self, GridError> {
        let width = self.width.max(min_width);
        let height = self.height.max(min_height);
        if width == self.width && height == self.height {
            return Ok(self.clone());
        }

        let len = cell_count(width, height)?;
        let mut cells = Vec::with_capacity(len);
        for row in self.rows() {
            cells.extend_from_slice(row);
            cells.resize(cells.len().saturating_add(width.saturating_sub(self.width)), false);
        }
        cells.resize(len, false);

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Row-major buffer index for `point`, if it is inside the grid.
    fn index(&self, point: Point) -> Option<usize> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        y.checked_mul(self.width)?.checked_add(x)
    }

    /// Assemble a grid from a buffer already known to be `width * height`.
    pub(crate) fn from_parts(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(Some(cells.len()), width.checked_mul(height));
        Self {
            width,
            height,
            cells,
        }
    }
}

impl TryFrom<Vec<Vec<bool>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<bool>> {
    fn from(grid: Grid) -> Self {
        grid.rows().map(<[bool]>::to_vec).collect()
    }
}

/// Whether `point` addresses a cell of `grid`.
pub fn in_bounds(grid: &Grid, point: Point) -> bool {
    grid.in_bounds(point)
}

/// The state of the cell at `point`, dead when out of bounds.
pub fn get_cell(grid: &Grid, point: Point) -> bool {
    grid.get(point)
}

/// Coordinates of every live cell of `grid`.
pub fn cell_set(grid: &Grid) -> BTreeSet<Point> {
    grid.cell_set()
}

/// Validate dimensions and return the cell count.
fn cell_count(width: usize, height: usize) -> Result<usize, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::EmptyDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(GridError::ArithmeticOverflow)
}
