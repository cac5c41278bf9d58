//! Collision checks between the marker and the enemies
//!
//! All tests run once per tick on authoritative positions.

use glam::Vec2;

use super::geometry::{Rect, segment_intersects_rect};

/// Marker box vs hazard box. Boxes must overlap, not just touch.
pub fn marker_hits_hazard(marker_pos: Vec2, marker_radius: f32, hazard_bounds: &Rect) -> bool {
    Rect::from_center(marker_pos, marker_radius).overlaps(hazard_bounds)
}

/// Marker vs sentry by centre distance
pub fn marker_hits_sentry(
    marker_pos: Vec2,
    marker_radius: f32,
    sentry_pos: Vec2,
    sentry_radius: f32,
) -> bool {
    marker_pos.distance(sentry_pos) < marker_radius + sentry_radius
}

/// Any segment of an in-progress trail crossing the hazard box
pub fn trail_hits_hazard(path: &[Vec2], hazard_bounds: &Rect) -> bool {
    path.windows(2)
        .any(|seg| segment_intersects_rect(seg[0], seg[1], hazard_bounds))
}
