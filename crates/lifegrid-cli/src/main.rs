//! Terminal entry point for the Lifegrid Game of Life simulator.
//!
//! Loads configuration, builds the first generation, and draws each
//! generation to stdout until the grid stops changing, the generation
//! limit is hit, or Ctrl-C is pressed. Logs go to stderr so stdout carries
//! only the rendered grids.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `LIFEGRID_CONFIG` or `lifegrid.yaml`
//! 3. Validate configuration ranges
//! 4. Build the first generation (random, preset, or pattern file)
//! 5. Install the Ctrl-C stop handler
//! 6. Run the generation loop
//! 7. Log the result

mod error;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use lifegrid_core::config::LifeConfig;
use lifegrid_core::control::SimulationControl;
use lifegrid_core::presets;
use lifegrid_core::runner;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::render::TerminalRenderer;

/// Environment variable naming the config file.
const ENV_CONFIG_PATH: &str = "LIFEGRID_CONFIG";

/// Config file used when `LIFEGRID_CONFIG` is unset.
const DEFAULT_CONFIG_PATH: &str = "lifegrid.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, seeding, or rendering fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("lifegrid starting");

    // 2-3. Load and validate configuration.
    let config = load_config()?;
    config.validate().map_err(CliError::from)?;
    info!(
        seed = ?config.seed,
        dead_char = %config.codec.dead_char,
        alive_char = %config.codec.alive_char,
        min_width = config.codec.min_width,
        min_height = config.codec.min_height,
        tick_interval_ms = config.run.tick_interval_ms,
        max_generations = config.run.max_generations,
        "Configuration loaded"
    );

    // 4. Build the first generation.
    let grid = presets::initial_grid(&config.seed, &config.codec).map_err(CliError::from)?;
    info!(
        width = grid.width(),
        height = grid.height(),
        live_cells = grid.live_count(),
        "Initial grid ready"
    );

    // 5. Stop cleanly on Ctrl-C.
    let control = Arc::new(SimulationControl::from_config(&config.run));
    {
        let control = Arc::clone(&control);
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => control.request_stop(),
                Err(e) => warn!(error = %e, "failed to listen for Ctrl-C"),
            }
        });
    }

    // 6. Run.
    let mut renderer =
        TerminalRenderer::new(std::io::stdout(), config.codec, config.run.clear_screen);
    let result = runner::run_simulation(grid, &control, &mut renderer)
        .await
        .map_err(CliError::from)?;

    // 7. Log results.
    runner::log_simulation_end(&result);
    info!("lifegrid shutdown complete");

    Ok(())
}

/// Load configuration from `LIFEGRID_CONFIG` or `lifegrid.yaml`.
///
/// Falls back to defaults (with environment overrides) when the file does
/// not exist. An explicitly named file that is missing is an error.
fn load_config() -> Result<LifeConfig, CliError> {
    if let Ok(explicit) = std::env::var(ENV_CONFIG_PATH) {
        return Ok(LifeConfig::from_file(&PathBuf::from(explicit))?);
    }

    let config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    if config_path.exists() {
        Ok(LifeConfig::from_file(&config_path)?)
    } else {
        info!("Config file not found, using defaults");
        let mut config = LifeConfig::default();
        config.apply_env_overrides()?;
        Ok(config)
    }
}
