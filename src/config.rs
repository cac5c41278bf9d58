//! Game configuration
//!
//! Loaded from an optional JSON file; every field falls back to the classic
//! arcade defaults. The win threshold is usually supplied separately at startup.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, Result};

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub width: f32,
    pub height: f32,
    pub border_width: f32,

    // === Marker ===
    pub marker_radius: f32,
    pub marker_speed: f32,

    // === Claims ===
    /// Claimed percentage that wins the game
    pub win_threshold: u32,
    /// Smallest claim (percent of playable area) that is committed
    pub min_claim_percent: u32,
    /// When false, completed paths are discarded (prototype rules)
    pub claims_enabled: bool,

    // === Enemies ===
    pub hazard_speed: f32,
    pub sentry_count: usize,
    /// Progress units per tick, out of `SPARX_PROGRESS_SCALE` per segment
    pub sentry_speed: u32,

    // === Rules ===
    /// While on the border, leaving it requires the draw command
    pub edge_locked: bool,
    /// The hazard touching the in-progress trail loses the game
    pub trail_collision: bool,

    /// Fixed ticks per second
    pub tick_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            border_width: BORDER_WIDTH,

            marker_radius: MARKER_RADIUS,
            marker_speed: MARKER_SPEED,

            win_threshold: DEFAULT_WIN_THRESHOLD,
            min_claim_percent: MIN_CLAIM_PERCENT,
            claims_enabled: true,

            hazard_speed: QIX_SPEED,
            sentry_count: SPARX_COUNT,
            sentry_speed: SPARX_SPEED,

            edge_locked: false,
            trail_collision: false,

            tick_rate: TICK_RATE,
        }
    }
}

impl GameConfig {
    /// The reduced rule set of the early prototype: no sentries, no claims,
    /// edge-locked movement, trail collisions and a 30 Hz clock.
    pub fn prototype() -> Self {
        Self {
            claims_enabled: false,
            sentry_count: 0,
            edge_locked: true,
            trail_collision: true,
            tick_rate: PROTOTYPE_TICK_RATE,
            ..Self::default()
        }
    }

    /// Parse a JSON config document and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Replace the win threshold, rejecting values outside the valid range
    pub fn with_win_threshold(mut self, threshold: u32) -> Result<Self> {
        check_threshold(threshold, self.min_claim_percent)?;
        self.win_threshold = threshold;
        Ok(self)
    }

    /// Check every field a session depends on
    pub fn validate(&self) -> Result<()> {
        if self.min_claim_percent > MAX_CLAIM_PERCENT {
            return Err(invalid(
                "min_claim_percent",
                format!("{} exceeds {MAX_CLAIM_PERCENT}", self.min_claim_percent),
            ));
        }
        check_threshold(self.win_threshold, self.min_claim_percent)?;

        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(invalid(
                "arena",
                format!("dimensions must be positive, got {}x{}", self.width, self.height),
            ));
        }
        if !(self.border_width >= 0.0
            && self.border_width * 2.0 < self.width
            && self.border_width * 2.0 < self.height)
        {
            return Err(invalid(
                "border_width",
                format!("{} does not fit a {}x{} arena", self.border_width, self.width, self.height),
            ));
        }
        if !(self.marker_radius > 0.0) {
            return Err(invalid("marker_radius", "must be positive".to_string()));
        }
        if !(self.marker_speed > 0.0) {
            return Err(invalid("marker_speed", "must be positive".to_string()));
        }
        if !(self.hazard_speed >= 0.0) {
            return Err(invalid("hazard_speed", "must not be negative".to_string()));
        }
        if self.sentry_count > 0 && self.sentry_speed == 0 {
            return Err(invalid("sentry_speed", "must be positive".to_string()));
        }
        if self.tick_rate == 0 {
            return Err(invalid("tick_rate", "must be positive".to_string()));
        }
        Ok(())
    }

    /// Total playable area inside the border
    pub fn playable_area(&self) -> f32 {
        (self.width - 2.0 * self.border_width) * (self.height - 2.0 * self.border_width)
    }
}

/// Parse an operator-supplied win threshold (e.g. a line read from stdin)
pub fn parse_win_threshold(input: &str, min_claim_percent: u32) -> Result<u32> {
    let trimmed = input.trim();
    let value = trimmed
        .parse::<u32>()
        .map_err(|source| ConfigError::ThresholdNotANumber {
            input: trimmed.to_string(),
            source,
        })?;
    check_threshold(value, min_claim_percent)?;
    Ok(value)
}

fn check_threshold(value: u32, min: u32) -> Result<()> {
    if value < min || value > MAX_CLAIM_PERCENT {
        return Err(ConfigError::ThresholdOutOfRange {
            value,
            min,
            max: MAX_CLAIM_PERCENT,
        });
    }
    Ok(())
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidField { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.playable_area() - 452_400.0).abs() < 0.5);
    }

    #[test]
    fn test_prototype_is_reduced() {
        let config = GameConfig::prototype();
        assert!(config.validate().is_ok());
        assert_eq!(config.sentry_count, 0);
        assert!(!config.claims_enabled);
        assert!(config.edge_locked);
        assert_eq!(config.tick_rate, PROTOTYPE_TICK_RATE);
    }

    #[test]
    fn test_parse_win_threshold() {
        assert_eq!(parse_win_threshold(" 42\n", 5).ok(), Some(42));
        assert_eq!(parse_win_threshold("5", 5).ok(), Some(5));
        assert_eq!(parse_win_threshold("100", 5).ok(), Some(100));

        assert!(matches!(
            parse_win_threshold("4", 5),
            Err(ConfigError::ThresholdOutOfRange { value: 4, .. })
        ));
        assert!(matches!(
            parse_win_threshold("101", 5),
            Err(ConfigError::ThresholdOutOfRange { value: 101, .. })
        ));
        assert!(matches!(
            parse_win_threshold("lots", 5),
            Err(ConfigError::ThresholdNotANumber { .. })
        ));
    }

    #[test]
    fn test_with_win_threshold() {
        let config = GameConfig::default().with_win_threshold(10).unwrap();
        assert_eq!(config.win_threshold, 10);
        assert!(GameConfig::default().with_win_threshold(2).is_err());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{ "win_threshold": 60, "sentry_count": 4 }"#).unwrap();
        assert_eq!(config.win_threshold, 60);
        assert_eq!(config.sentry_count, 4);
        assert_eq!(config.width, SCREEN_WIDTH);
        assert!(config.claims_enabled);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "win_threshold": 3 }"#),
            Err(ConfigError::ThresholdOutOfRange { .. })
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "border_width": 400.0 }"#),
            Err(ConfigError::InvalidField { field: "border_width", .. })
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "tick_rate": 0 }"#),
            Err(ConfigError::InvalidField { field: "tick_rate", .. })
        ));
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
