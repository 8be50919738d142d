//! Moore-neighborhood queries.
//!
//! The eight neighbors of a cell are always visited in the same order:
//! upper-left first, then clockwise around the cell. Counts do not depend
//! on the order, but [`get_neighbors`] exposes it directly.
//!
//! Each neighbor is read through [`Grid::get`], so neighbors that fall off
//! the edge of the grid count as dead. Only the queried point itself must
//! be inside the grid; otherwise the query reports
//! [`GridError::PointNotInGrid`] rather than "zero neighbors".

use crate::error::GridError;
use crate::grid::Grid;
use crate::point::Point;

/// Relative `(dx, dy)` offsets of the Moore neighborhood, upper-left first,
/// proceeding clockwise.
pub const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// The states of the eight neighbors of `point`, in [`MOORE_OFFSETS`] order.
///
/// # Errors
///
/// Returns [`GridError::PointNotInGrid`] if `point` is outside `grid`.
pub fn get_neighbors(grid: &Grid, point: Point) -> Result<[bool; 8], GridError> {
    if !grid.in_bounds(point) {
        return Err(GridError::PointNotInGrid { point });
    }
    Ok(neighbor_states(grid, point))
}

/// Number of live neighbors of `point`, between 0 and 8.
///
/// # Errors
///
/// Returns [`GridError::PointNotInGrid`] if `point` is outside `grid`.
pub fn count_live_neighbors(grid: &Grid, point: Point) -> Result<u8, GridError> {
    if !grid.in_bounds(point) {
        return Err(GridError::PointNotInGrid { point });
    }
    Ok(live_around(grid, point))
}

/// Live-neighbor count without the bounds check on `point`.
///
/// Used by the step engine, which only visits in-bounds points.
pub(crate) fn live_around(grid: &Grid, point: Point) -> u8 {
    let mut count: u8 = 0;
    for alive in neighbor_states(grid, point) {
        if alive {
            count = count.saturating_add(1);
        }
    }
    count
}

fn neighbor_states(grid: &Grid, point: Point) -> [bool; 8] {
    MOORE_OFFSETS.map(|(dx, dy)| point.offset(dx, dy).is_some_and(|p| grid.get(p)))
}
