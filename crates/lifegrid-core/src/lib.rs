//! Configuration, pattern sources, and the generation loop for Lifegrid.
//!
//! This crate sits between the pure grid engine and the terminal binary.
//! It decides where the first generation comes from and drives the step
//! engine at a configurable tick rate until the grid stops changing.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `lifegrid.yaml` into
//!   strongly-typed structs, environment overrides, and range validation.
//! - [`control`] -- [`SimulationControl`]: shared stop flag, tick speed,
//!   and generation bound.
//! - [`presets`] -- Built-in patterns, pattern files, and
//!   [`initial_grid`] for every seed source.
//! - [`runner`] -- The generation loop and its [`GenerationCallback`].
//!
//! [`SimulationControl`]: control::SimulationControl
//! [`initial_grid`]: presets::initial_grid
//! [`GenerationCallback`]: runner::GenerationCallback

pub mod config;
pub mod control;
pub mod presets;
pub mod runner;
