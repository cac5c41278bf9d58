//! Qix Claim - A territory claiming arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (marker, trail, claims, hazards, game state)
//! - `render`: Draw-command contract consumed by an external renderer
//! - `clock`: Fixed timestep accumulator
//! - `config`: Startup configuration and validation

pub mod clock;
pub mod config;
pub mod error;
pub mod render;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;

/// Game configuration constants
pub mod consts {
    /// Classic arena dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    pub const BORDER_WIDTH: f32 = 10.0;

    /// Marker defaults
    pub const MARKER_RADIUS: f32 = 5.0;
    pub const MARKER_SPEED: f32 = 5.0;

    /// Qix defaults. Size and spin are rolled per session from these ranges.
    pub const QIX_SPEED: f32 = 3.0;
    pub const QIX_MIN_SIZE: u32 = 30;
    pub const QIX_MAX_SIZE: u32 = 50; // exclusive
    pub const QIX_VERTICES: usize = 5;
    /// Spin in degrees per tick
    pub const QIX_MIN_SPIN: f32 = 1.0;
    pub const QIX_MAX_SPIN: f32 = 3.0;

    /// Sparx defaults
    pub const SPARX_COUNT: usize = 2;
    pub const SPARX_SPEED: u32 = 1;
    pub const SPARX_MIN_SIZE: u32 = 5;
    pub const SPARX_MAX_SIZE: u32 = 9; // exclusive
    /// Progress units per border segment (speed is added each tick)
    pub const SPARX_PROGRESS_SCALE: u32 = 100;

    /// Claim thresholds (percent of playable area)
    pub const MIN_CLAIM_PERCENT: u32 = 5;
    pub const MAX_CLAIM_PERCENT: u32 = 100;
    pub const DEFAULT_WIN_THRESHOLD: u32 = 75;

    /// Fixed tick rates for the classic and prototype configurations
    pub const TICK_RATE: u32 = 60;
    pub const PROTOTYPE_TICK_RATE: u32 = 30;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the clock will account for (seconds)
    pub const MAX_FRAME_TIME: f32 = 0.1;
}
