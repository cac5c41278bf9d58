//! Sparx: sentries that patrol the border loop at constant speed

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::BorderLoop;
use crate::consts::SPARX_PROGRESS_SCALE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentry {
    /// Border corner the sentry last passed
    pub index: usize,
    /// Progress toward the next corner, in units of `1 / SPARX_PROGRESS_SCALE`
    steps: u32,
    /// Progress units per tick
    pub speed: u32,
    pub radius: f32,
    pub clockwise: bool,
}

impl Sentry {
    pub fn new(speed: u32, radius: f32, clockwise: bool) -> Self {
        Self {
            index: 0,
            steps: 0,
            speed,
            radius,
            clockwise,
        }
    }

    /// Fraction of the current segment covered, in `[0, 1)`
    pub fn progress(&self) -> f32 {
        self.steps as f32 / SPARX_PROGRESS_SCALE as f32
    }

    /// Advance one tick along the loop
    pub fn update(&mut self, border: &BorderLoop) {
        self.steps += self.speed;
        if self.steps >= SPARX_PROGRESS_SCALE {
            self.steps = 0;
            self.index = border.step(self.index, self.clockwise);
        }
    }

    pub fn position(&self, border: &BorderLoop) -> Vec2 {
        border.lerp(self.index, self.clockwise, self.progress())
    }
}
