//! Error types for the `lifegrid` binary.
//!
//! [`CliError`] is the top-level error type that wraps all possible
//! failure modes during startup and the generation loop.

/// Top-level error for the `lifegrid` binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading or validation failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: lifegrid_core::config::ConfigError,
    },

    /// The first generation could not be built.
    #[error("seed error: {source}")]
    Seed {
        /// The underlying preset or pattern error.
        #[from]
        source: lifegrid_core::presets::PresetError,
    },

    /// The generation loop failed.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: lifegrid_core::runner::RunnerError,
    },
}
