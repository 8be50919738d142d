//! Generation stepping.
//!
//! [`step`] applies the classic B3/S23 rule to every cell of a grid:
//!
//! - a live cell survives with exactly 2 or 3 live neighbors, otherwise it dies;
//! - a dead cell comes alive with exactly 3 live neighbors, otherwise it stays dead.
//!
//! Every neighbor count is read from the input generation only. The output
//! is written to a fresh buffer, so no cell ever sees a partially computed
//! successor. When the successor equals its input the grid has reached a
//! fixed point and [`Step::Stable`] is returned instead of a grid.

use std::iter::FusedIterator;

use crate::grid::Grid;
use crate::neighbors::live_around;

/// Outcome of advancing one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The rule changed at least one cell; holds the next generation.
    Changed(Grid),
    /// The next generation would be identical to the current one.
    Stable,
}

impl Step {
    /// Whether the grid has reached a fixed point.
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::Stable)
    }

    /// The next generation, or `None` if stable.
    pub fn into_grid(self) -> Option<Grid> {
        match self {
            Self::Changed(grid) => Some(grid),
            Self::Stable => None,
        }
    }
}

/// The next state of one cell given its current state and live-neighbor count.
pub const fn next_state(alive: bool, live_neighbors: u8) -> bool {
    matches!((alive, live_neighbors), (true, 2 | 3) | (false, 3))
}

/// Compute the next generation of `grid`.
///
/// Returns [`Step::Stable`] if no cell changes.
pub fn step(grid: &Grid) -> Step {
    let cells: Vec<bool> = grid
        .points()
        .map(|p| next_state(grid.get(p), live_around(grid, p)))
        .collect();
    let next = Grid::from_parts(grid.width(), grid.height(), cells);

    if next == *grid {
        Step::Stable
    } else {
        Step::Changed(next)
    }
}

/// Iterate over `grid` and its successors.
///
/// The first item is `grid` itself. Iteration ends after the last
/// generation that differs from its predecessor, so an oscillator or a
/// growing pattern never terminates on its own.
pub const fn generations(grid: Grid) -> Generations {
    Generations { next: Some(grid) }
}

/// Iterator returned by [`generations`].
#[derive(Debug, Clone)]
pub struct Generations {
    next: Option<Grid>,
}

impl Iterator for Generations {
    type Item = Grid;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = step(&current).into_grid();
        Some(current)
    }
}

impl FusedIterator for Generations {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::point::Point;

    fn grid_of(width: usize, height: usize, live: &[(i64, i64)]) -> Grid {
        Grid::with_live_cells(width, height, live.iter().copied().map(Point::from)).unwrap()
    }

    #[test]
    fn rule_table() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "live with {n}");
            assert_eq!(next_state(false, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn block_is_stable() {
        let block = grid_of(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        assert_eq!(step(&block), Step::Stable);
    }

    #[test]
    fn empty_grid_is_stable() {
        let grid = Grid::dead(3, 3).unwrap();
        assert!(step(&grid).is_stable());
    }

    #[test]
    fn lone_cell_dies() {
        let grid = grid_of(3, 3, &[(1, 1)]);
        let next = step(&grid).into_grid().unwrap();
        assert_eq!(next.live_count(), 0);
        assert_eq!(next.width(), 3);
        assert_eq!(next.height(), 3);
    }

    #[test]
    fn blinker_oscillates() {
        let horizontal = grid_of(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let vertical = grid_of(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        assert_eq!(step(&horizontal), Step::Changed(vertical.clone()));
        assert_eq!(step(&vertical), Step::Changed(horizontal));
    }

    #[test]
    fn blinker_on_edge_is_clipped() {
        // against the top edge the vertical phase loses its upper cell
        let grid = grid_of(3, 3, &[(0, 0), (1, 0), (2, 0)]);
        let next = step(&grid).into_grid().unwrap();
        assert_eq!(
            next.cell_set(),
            [Point::new(1, 0), Point::new(1, 1)]
                .into_iter()
                .collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn step_is_deterministic() {
        let grid = grid_of(6, 6, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        assert_eq!(step(&grid), step(&grid));
    }

    #[test]
    fn step_does_not_alter_input() {
        let grid = grid_of(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let before = grid.clone();
        let _next = step(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn generations_end_at_fixed_point() {
        // three cells in an L settle into a block after one step
        let grid = grid_of(4, 4, &[(1, 1), (2, 1), (1, 2)]);
        let all: Vec<Grid> = generations(grid.clone()).collect();
        assert_eq!(all.len(), 2);
        assert_eq!(all.first(), Some(&grid));
        assert_eq!(all.last().map(Grid::live_count), Some(4));
    }

    #[test]
    fn generations_of_dying_pattern() {
        let grid = grid_of(3, 3, &[(1, 1)]);
        let mut iter = generations(grid);
        assert!(iter.next().is_some());
        assert_eq!(iter.next().map(|g| g.live_count()), Some(0));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
