//! Random grid generation.
//!
//! Each cell of the nominal `width` x `height` area is sampled independently:
//! a uniform draw in `[0, 1)` below `probability` makes it alive. The
//! probability is not clamped, so values at or below zero (and NaN) give an
//! all-dead grid and values at or above one give an all-live grid. Range
//! checks belong to whoever builds the options.
//!
//! The codec's `min_width` / `min_height` padding applies afterwards: dead
//! columns and rows are appended on the right and bottom.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::codec::CodecOptions;
use crate::error::GridError;
use crate::grid::Grid;

/// Sample a random grid using the supplied RNG.
///
/// # Errors
///
/// Returns [`GridError::EmptyDimensions`] if `width` or `height` is zero.
pub fn random<R>(
    width: usize,
    height: usize,
    probability: f64,
    options: &CodecOptions,
    rng: &mut R,
) -> Result<Grid, GridError>
where
    R: Rng + ?Sized,
{
    let sampled = Grid::from_fn(width, height, |_| rng.random::<f64>() < probability)?;
    sampled.padded(options.min_width, options.min_height)
}

/// Sample a random grid from the thread-local RNG.
///
/// # Errors
///
/// Returns [`GridError::EmptyDimensions`] if `width` or `height` is zero.
pub fn random_grid(
    width: usize,
    height: usize,
    probability: f64,
    options: &CodecOptions,
) -> Result<Grid, GridError> {
    let mut rng = rand::rng();
    random(width, height, probability, options, &mut rng)
}

/// Sample a reproducible random grid: the same seed always yields the same
/// grid for the same dimensions and probability.
///
/// # Errors
///
/// Returns [`GridError::EmptyDimensions`] if `width` or `height` is zero.
pub fn seeded_grid(
    width: usize,
    height: usize,
    probability: f64,
    options: &CodecOptions,
    seed: u64,
) -> Result<Grid, GridError> {
    let mut rng = StdRng::seed_from_u64(seed);
    random(width, height, probability, options, &mut rng)
}
