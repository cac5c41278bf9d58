//! Arena bounds and the border loop
//!
//! The playable rectangle is inset from the screen edges by the border width.
//! Every gameplay coordinate is kept inside `[border, dimension - border]`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::config::GameConfig;

/// One side of the arena border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The bordered play field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub border: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32, border: f32) -> Self {
        Self {
            width,
            height,
            border,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.width, config.height, config.border_width)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.border
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.width - self.border
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.border
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.height - self.border
    }

    /// The playable rectangle (inside the border)
    pub fn bounds(&self) -> Rect {
        Rect::new(
            Vec2::new(self.left(), self.top()),
            Vec2::new(self.right(), self.bottom()),
        )
    }

    pub fn playable_area(&self) -> f32 {
        (self.right() - self.left()) * (self.bottom() - self.top())
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Where the marker spawns: middle of the bottom border
    pub fn marker_start(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.bottom())
    }

    /// Clamp a point into the playable rectangle
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.left(), self.right()),
            p.y.clamp(self.top(), self.bottom()),
        )
    }

    /// Is `p` strictly closer than `tolerance` to any border edge?
    pub fn on_border(&self, p: Vec2, tolerance: f32) -> bool {
        (p.x - self.left()).abs() < tolerance
            || (p.x - self.right()).abs() < tolerance
            || (p.y - self.top()).abs() < tolerance
            || (p.y - self.bottom()).abs() < tolerance
    }

    /// Which border a point touches, if any. Left/right win over top/bottom
    /// when a point sits in a corner.
    pub fn classify(&self, p: Vec2, tolerance: f32) -> Option<Side> {
        if p.x <= self.left() + tolerance {
            Some(Side::Left)
        } else if p.x >= self.right() - tolerance {
            Some(Side::Right)
        } else if p.y <= self.top() + tolerance {
            Some(Side::Top)
        } else if p.y >= self.bottom() - tolerance {
            Some(Side::Bottom)
        } else {
            None
        }
    }

    /// The corner shared by a vertical side and a horizontal side
    pub fn corner(&self, vertical: Side, horizontal: Side) -> Option<Vec2> {
        let x = match vertical {
            Side::Left => self.left(),
            Side::Right => self.right(),
            Side::Top | Side::Bottom => return None,
        };
        let y = match horizontal {
            Side::Top => self.top(),
            Side::Bottom => self.bottom(),
            Side::Left | Side::Right => return None,
        };
        Some(Vec2::new(x, y))
    }

    pub fn border_loop(&self) -> BorderLoop {
        BorderLoop::new(self)
    }
}

/// Arena corners in clockwise order starting top-left
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderLoop {
    points: Vec<Vec2>,
}

impl BorderLoop {
    pub fn new(arena: &Arena) -> Self {
        Self {
            points: vec![
                Vec2::new(arena.left(), arena.top()),
                Vec2::new(arena.right(), arena.top()),
                Vec2::new(arena.right(), arena.bottom()),
                Vec2::new(arena.left(), arena.bottom()),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Index one step along the loop
    pub fn step(&self, index: usize, clockwise: bool) -> usize {
        let n = self.points.len();
        if clockwise {
            (index + 1) % n
        } else {
            (index + n - 1) % n
        }
    }

    /// Point `t` of the way from corner `index` to its neighbour in the
    /// given direction
    pub fn lerp(&self, index: usize, clockwise: bool, t: f32) -> Vec2 {
        let from = self.points[index % self.points.len()];
        let to = self.points[self.step(index, clockwise)];
        from.lerp(to, t)
    }
}
