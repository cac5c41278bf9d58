//! Fixed timestep clock
//!
//! Accumulates wall-clock frame time and hands out whole simulation ticks.
//! A single frame is clamped so a stall never turns into a burst of catch-up
//! ticks.

use crate::consts::{MAX_FRAME_TIME, MAX_SUBSTEPS};

#[derive(Debug, Clone)]
pub struct FixedClock {
    step: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FixedClock {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            step: 1.0 / tick_rate.max(1) as f32,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    /// Seconds per tick
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Add `elapsed` seconds and return how many ticks to run now
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_substeps {
            self.accumulator -= self.step;
            ticks += 1;
        }
        ticks
    }

    /// Drop any leftover time (after a restart or a pause)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
