//! The Qix: a spinning star that bounces around the open arena
//!
//! Bounces off the inset border and off claimed regions. Region bounces are a
//! heuristic: the hazard's box is tested against each region through
//! [`RegionTest`] and the axis whose centre coordinate lies outside the
//! region's span is reflected.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::geometry::{Rect, RegionTest, regular_polygon};
use super::ledger::ClaimedRegion;
use crate::consts::QIX_VERTICES;

/// Construction parameters for a hazard (rolled per session)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardParams {
    /// Radius of the star and half-extent of its collision box
    pub size: f32,
    /// Speed along each axis
    pub speed: f32,
    /// Initial heading sign on each axis (each component is +1 or -1)
    pub heading: Vec2,
    /// Rotation per tick in degrees (visual only)
    pub spin: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Current rotation in degrees
    pub rotation: f32,
    pub spin: f32,
    /// Unrotated star outline relative to `pos`
    shape: Vec<Vec2>,
}

impl Hazard {
    pub fn new(pos: Vec2, params: &HazardParams) -> Self {
        Self {
            pos,
            vel: Vec2::new(
                params.heading.x.signum() * params.speed,
                params.heading.y.signum() * params.speed,
            ),
            size: params.size,
            rotation: 0.0,
            spin: params.spin,
            shape: regular_polygon(params.size, QIX_VERTICES, 0.0),
        }
    }

    /// Collision box around the current position
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    /// Advance one tick, reflecting off the border and claimed regions
    pub fn update(&mut self, arena: &Arena, regions: &[ClaimedRegion], test: &impl RegionTest) {
        self.rotation = (self.rotation + self.spin) % 360.0;

        let next = self.pos + self.vel;

        if next.x - self.size < arena.left() || next.x + self.size > arena.right() {
            self.vel.x = -self.vel.x;
        }
        if next.y - self.size < arena.top() || next.y + self.size > arena.bottom() {
            self.vel.y = -self.vel.y;
        }

        let probe = Rect::from_center(next, self.size);
        if let Some(region) = regions
            .iter()
            .find(|r| test.collides(&probe, r.vertices(), r.bounds()))
        {
            let bounds = region.bounds();
            if !bounds.spans_x(self.pos.x) {
                self.vel.x = -self.vel.x;
            }
            if !bounds.spans_y(self.pos.y) {
                self.vel.y = -self.vel.y;
            }
            log::trace!("Qix bounced off claimed region at {:?}", bounds);
        }

        self.pos += self.vel;
    }

    /// World-space outline at the current rotation
    pub fn outline(&self) -> Vec<Vec2> {
        let rot = Vec2::from_angle(self.rotation.to_radians());
        self.shape.iter().map(|v| self.pos + rot.rotate(*v)).collect()
    }
}
