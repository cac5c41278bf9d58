//! Draw commands for an external renderer

use glam::Vec2;
use serde::Serialize;

use crate::sim::Rect;

/// Linear RGBA
pub type Color = [f32; 4];

/// One primitive, in arena coordinates (+y down). Issued back to front.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    /// Fill the whole surface
    Clear(Color),
    /// Rectangle outline drawn inward from `rect`
    FrameRect { rect: Rect, width: f32, color: Color },
    FillPolygon { points: Vec<Vec2>, color: Color },
    /// Open polyline
    Polyline { points: Vec<Vec2>, width: f32, color: Color },
    FillCircle { center: Vec2, radius: f32, color: Color },
    Text {
        text: String,
        pos: Vec2,
        color: Color,
        /// Centre the text on `pos` instead of anchoring its top-left corner
        centered: bool,
    },
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [75.0 / 255.0, 75.0 / 255.0, 75.0 / 255.0, 1.0];
    pub const BORDER: Color = [1.0, 1.0, 1.0, 1.0];
    pub const CLAIMED: Color = [0.0, 200.0 / 255.0, 0.0, 1.0];
    pub const TRAIL: Color = [0.0, 0.0, 1.0, 1.0];
    pub const MARKER: Color = [1.0, 1.0, 0.0, 1.0];
    pub const QIX: Color = [1.0, 0.0, 1.0, 1.0];
    pub const SPARX: Color = [1.0, 0.0, 0.0, 1.0];
    pub const HUD: Color = [1.0, 1.0, 1.0, 1.0];
    pub const WIN: Color = [0.0, 1.0, 0.0, 1.0];
    pub const LOSE: Color = [1.0, 0.0, 0.0, 1.0];
}
