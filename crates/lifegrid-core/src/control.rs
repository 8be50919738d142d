//! Shared control state for a running simulation.
//!
//! [`SimulationControl`] is wrapped in [`Arc`](std::sync::Arc) and shared
//! between the generation loop and whatever drives it (the Ctrl-C handler
//! in the binary, a test). Fields are atomics so the loop reads them
//! without locking.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::Notify;

use crate::config::RunConfig;

/// Shared loop control: stop requests, tick speed, and the generation bound.
#[derive(Debug)]
pub struct SimulationControl {
    /// Whether a stop has been requested.
    stop_requested: AtomicBool,

    /// Wakes the loop out of its tick sleep when a stop is requested.
    stop_notify: Notify,

    /// Current tick interval in milliseconds (runtime-adjustable).
    tick_interval_ms: AtomicU64,

    /// Maximum number of generations to compute (0 = unlimited).
    max_generations: u64,
}

impl SimulationControl {
    /// Create control state from explicit settings.
    pub fn new(tick_interval_ms: u64, max_generations: u64) -> Self {
        Self {
            stop_requested: AtomicBool::new(false),
            stop_notify: Notify::new(),
            tick_interval_ms: AtomicU64::new(tick_interval_ms),
            max_generations,
        }
    }

    /// Create control state from the `run` config section.
    pub fn from_config(run: &RunConfig) -> Self {
        Self::new(run.tick_interval_ms, run.max_generations)
    }

    // -----------------------------------------------------------------------
    // Stop
    // -----------------------------------------------------------------------

    /// Request a clean stop. The loop finishes the current generation and
    /// returns without computing another.
    pub fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::Release);
        self.stop_notify.notify_one();
    }

    /// Check whether a stop has been requested.
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::Acquire)
    }

    /// Sleep for one tick interval, returning early if a stop is requested.
    ///
    /// Returns `true` if the full interval elapsed, `false` if woken by a
    /// stop request.
    pub async fn wait_tick(&self) -> bool {
        if self.is_stop_requested() {
            return false;
        }
        tokio::select! {
            () = tokio::time::sleep(self.tick_interval()) => !self.is_stop_requested(),
            () = self.stop_notify.notified() => false,
        }
    }

    // -----------------------------------------------------------------------
    // Tick speed
    // -----------------------------------------------------------------------

    /// Current tick interval in milliseconds.
    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms.load(Ordering::Acquire)
    }

    /// Current tick interval.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms())
    }

    /// Change the tick interval; takes effect on the next sleep.
    pub fn set_tick_interval_ms(&self, ms: u64) {
        self.tick_interval_ms.store(ms, Ordering::Release);
    }

    // -----------------------------------------------------------------------
    // Bounds
    // -----------------------------------------------------------------------

    /// Configured generation bound (0 = unlimited).
    pub const fn max_generations(&self) -> u64 {
        self.max_generations
    }

    /// Whether `generation` has reached the configured bound.
    pub const fn generation_limit_reached(&self, generation: u64) -> bool {
        self.max_generations > 0 && generation >= self.max_generations
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn unlimited_by_default() {
        let control = SimulationControl::from_config(&RunConfig::default());
        assert_eq!(control.max_generations(), 0);
        assert!(!control.generation_limit_reached(u64::MAX));
    }

    #[test]
    fn limit_reached_at_bound() {
        let control = SimulationControl::new(0, 5);
        assert!(!control.generation_limit_reached(4));
        assert!(control.generation_limit_reached(5));
    }

    #[test]
    fn tick_interval_is_adjustable() {
        let control = SimulationControl::new(100, 0);
        control.set_tick_interval_ms(25);
        assert_eq!(control.tick_interval(), Duration::from_millis(25));
    }

    #[tokio::test]
    async fn wait_tick_completes_when_not_stopped() {
        let control = SimulationControl::new(1, 0);
        assert!(control.wait_tick().await);
    }

    #[tokio::test]
    async fn stop_interrupts_long_tick() {
        let control = Arc::new(SimulationControl::new(60_000, 0));
        let stopper = Arc::clone(&control);
        let handle = tokio::spawn(async move { stopper.request_stop() });
        assert!(!control.wait_tick().await);
        assert!(control.is_stop_requested());
        let _ = handle.await;
    }
}
