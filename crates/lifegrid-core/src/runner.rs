//! Generation loop with stop control.
//!
//! [`run_simulation`] drives the step engine from an initial grid:
//!
//! - **Fixed point**: stop when a step reports no change
//! - **Bounded run**: stop after `max_generations` (0 = unlimited)
//! - **Variable tick speed**: sleep interval read from [`SimulationControl`]
//!   before every generation
//! - **Clean stop**: a stop request wakes the sleep and ends the loop
//!   between generations, never mid-step
//!
//! Every generation, including the initial one, is handed to a
//! [`GenerationCallback`] for rendering.

use std::sync::Arc;

use lifegrid_engine::{Grid, Step, step};
use tracing::{debug, info};

use crate::control::SimulationControl;

/// Errors that can occur during the simulation run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The generation callback failed to render a grid.
    #[error("render error: {source}")]
    Render {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

/// Reason why the simulation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationEndReason {
    /// The last generation was unchanged by the rule.
    Stable,
    /// Reached the configured `max_generations` limit.
    MaxGenerationsReached,
    /// A stop was requested through [`SimulationControl`].
    OperatorStop,
}

/// Result of the simulation run.
#[derive(Debug)]
pub struct SimulationResult {
    /// The reason the simulation ended.
    pub end_reason: SimulationEndReason,
    /// Index of the last generation produced (0 = the initial grid).
    pub generations: u64,
    /// The last generation produced.
    pub final_grid: Grid,
}

/// Callback invoked for every generation, starting with generation 0.
pub trait GenerationCallback: Send {
    /// Called with the generation index and its grid.
    ///
    /// # Errors
    ///
    /// Returning an error ends the run with [`RunnerError::Render`].
    fn on_generation(&mut self, generation: u64, grid: &Grid) -> std::io::Result<()>;
}

/// A no-op callback for headless runs.
pub struct NoOpCallback;

impl GenerationCallback for NoOpCallback {
    fn on_generation(&mut self, _generation: u64, _grid: &Grid) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run the generation loop until a termination condition is met.
///
/// # Arguments
///
/// * `initial` - The first generation
/// * `control` - Shared stop / speed / bound state
/// * `callback` - Called with every generation for rendering
///
/// # Errors
///
/// Returns [`RunnerError`] if the callback fails.
pub async fn run_simulation(
    initial: Grid,
    control: &Arc<SimulationControl>,
    callback: &mut dyn GenerationCallback,
) -> Result<SimulationResult, RunnerError> {
    let mut grid = initial;
    let mut generation: u64 = 0;

    info!(
        width = grid.width(),
        height = grid.height(),
        live_cells = grid.live_count(),
        max_generations = control.max_generations(),
        tick_interval_ms = control.tick_interval_ms(),
        "Simulation starting"
    );

    callback.on_generation(generation, &grid)?;

    let end_reason = loop {
        // --- Check generation bound ---
        if control.generation_limit_reached(generation) {
            info!(
                max_generations = control.max_generations(),
                "Generation limit reached"
            );
            break SimulationEndReason::MaxGenerationsReached;
        }

        // --- Wait one tick (or stop) ---
        if !control.wait_tick().await {
            info!(generation, "Operator stop requested");
            break SimulationEndReason::OperatorStop;
        }

        // --- Step ---
        match step(&grid) {
            Step::Stable => {
                info!(generation, "Grid reached a fixed point");
                break SimulationEndReason::Stable;
            }
            Step::Changed(next) => {
                grid = next;
                generation = generation.saturating_add(1);
                debug!(generation, live_cells = grid.live_count(), "Generation computed");
                callback.on_generation(generation, &grid)?;
            }
        }
    };

    Ok(SimulationResult {
        end_reason,
        generations: generation,
        final_grid: grid,
    })
}

/// Log the final summary of a simulation run.
pub fn log_simulation_end(result: &SimulationResult) {
    info!(
        end_reason = ?result.end_reason,
        generations = result.generations,
        live_cells = result.final_grid.live_count(),
        "Simulation ended"
    );
}
