//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (sentries by spawn index, regions by claim order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod autopilot;
pub mod collision;
pub mod direction;
pub mod geometry;
pub mod hazard;
pub mod ledger;
pub mod marker;
pub mod sentry;
pub mod state;
pub mod tick;

pub use arena::{Arena, BorderLoop, Side};
pub use autopilot::Autopilot;
pub use collision::{marker_hits_hazard, marker_hits_sentry, trail_hits_hazard};
pub use direction::Direction;
pub use geometry::{BoundingBoxTest, Rect, RegionTest, polygon_area};
pub use hazard::{Hazard, HazardParams};
pub use ledger::{ClaimOutcome, ClaimedRegion, Ledger};
pub use marker::{Marker, MarkerRules, MarkerState, SideHistory, TrailEvent, close_path};
pub use sentry::Sentry;
pub use state::{GameEvent, GamePhase, GameSession, LossCause, SessionParams};
pub use tick::{TickInput, tick};
