//! Grid engine for the Lifegrid Game of Life simulator.
//!
//! This crate owns the bounded, rectangular cell grid and every operation
//! that reads or produces one. All functions are pure: they take immutable
//! grids and return new values, so any driver loop or test harness can use
//! them without touching engine internals.
//!
//! # Modules
//!
//! - [`codec`] -- Text to grid decoding and grid to text encoding with
//!   configurable dead/alive characters and minimum-size padding.
//! - [`error`] -- Error types for grid construction, decoding, and queries.
//! - [`generator`] -- Random grids sampled cell by cell from a live
//!   probability.
//! - [`grid`] -- The [`Grid`] value: row-major cells, bounds checks, and
//!   the total `get_cell` lookup that treats out-of-bounds as dead.
//! - [`neighbors`] -- Moore-neighborhood queries in fixed clockwise order.
//! - [`point`] -- [`Point`] coordinates, column first, origin at top-left.
//! - [`step`] -- The B3/S23 rule and the generation step with fixed-point
//!   detection.
//!
//! [`Grid`]: grid::Grid
//! [`Point`]: point::Point

pub mod codec;
pub mod error;
pub mod generator;
pub mod grid;
pub mod neighbors;
pub mod point;
pub mod step;

// Re-export primary types at crate root.
pub use codec::{CodecOptions, decode, encode};
pub use error::GridError;
pub use generator::{random, random_grid, seeded_grid};
pub use grid::{Grid, cell_set, get_cell, in_bounds};
pub use neighbors::{MOORE_OFFSETS, count_live_neighbors, get_neighbors};
pub use point::Point;
pub use step::{Generations, Step, generations, next_state, step};
