//! Discrete player intent for a single tick

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Side;

/// Movement intent. Screen coordinates: +y points down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step for this direction
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::None => Vec2::ZERO,
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// Border side the marker is heading towards
    pub fn side(self) -> Option<Side> {
        match self {
            Direction::None => None,
            Direction::Up => Some(Side::Top),
            Direction::Down => Some(Side::Bottom),
            Direction::Left => Some(Side::Left),
            Direction::Right => Some(Side::Right),
        }
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self == Direction::None
    }
}
