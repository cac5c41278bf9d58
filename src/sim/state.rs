//! Game session state
//!
//! A session owns every entity of one game. Restart throws the whole thing
//! away and builds a new one from freshly rolled parameters.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, BorderLoop};
use super::hazard::{Hazard, HazardParams};
use super::ledger::{ClaimOutcome, ClaimedRegion, Ledger};
use super::marker::{Marker, MarkerRules};
use super::sentry::Sentry;
use crate::config::GameConfig;
use crate::consts::*;
use crate::error::Result;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// Claimed percentage reached the win threshold
    Win,
    /// Marker was caught
    Lose,
}

/// What caught the marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossCause {
    Qix,
    /// Sentry by index
    Sparx(usize),
    /// Qix touched the unfinished trail
    Trail,
}

/// Notable things that happened during a tick (drained by the frame loop)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    DrawStarted,
    DrawAbandoned,
    ClaimCommitted { percent: f32, total_percent: f32 },
    ClaimRejected { percent: f32 },
    /// Path completed while claims are disabled
    ClaimDiscarded,
    Won { total_percent: f32 },
    Lost(LossCause),
    Restarted,
}

/// Randomised construction parameters for a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionParams {
    pub hazard: HazardParams,
    /// Shared by every sentry of the session
    pub sentry_radius: f32,
}

impl SessionParams {
    /// Roll sizes, headings and spin from `rng`
    pub fn roll<R: Rng>(rng: &mut R, config: &GameConfig) -> Self {
        let sign = |rng: &mut R| if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let heading = Vec2::new(sign(rng), sign(rng));
        Self {
            hazard: HazardParams {
                size: rng.random_range(QIX_MIN_SIZE..QIX_MAX_SIZE) as f32,
                speed: config.hazard_speed,
                heading,
                spin: rng.random_range(QIX_MIN_SPIN..QIX_MAX_SPIN),
            },
            sentry_radius: rng.random_range(SPARX_MIN_SIZE..SPARX_MAX_SIZE) as f32,
        }
    }
}

/// One game from start to win/lose
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub arena: Arena,
    pub border: BorderLoop,
    pub marker: Marker,
    pub hazard: Hazard,
    /// Sentries in spawn order (even indices clockwise, odd counter-clockwise)
    pub sentries: Vec<Sentry>,
    pub ledger: Ledger,
    pub phase: GamePhase,
    /// Ticks simulated while playing
    pub time_ticks: u64,
    /// Seed the session RNG started from
    pub seed: u64,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Validate `config` and start a session with parameters rolled from
    /// `seed`
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let params = SessionParams::roll(&mut rng, &config);
        Ok(Self::build(config, params, seed, rng))
    }

    /// Validate `config` and start a session with explicit parameters
    pub fn with_params(config: GameConfig, params: SessionParams, seed: u64) -> Result<Self> {
        config.validate()?;
        let rng = Pcg32::seed_from_u64(seed);
        Ok(Self::build(config, params, seed, rng))
    }

    fn build(config: GameConfig, params: SessionParams, seed: u64, rng: Pcg32) -> Self {
        let arena = Arena::from_config(&config);
        let border = arena.border_loop();
        let sentries = (0..config.sentry_count)
            .map(|i| Sentry::new(config.sentry_speed, params.sentry_radius, i % 2 == 0))
            .collect();

        log::debug!(
            "New session: qix size {} heading {:?}, sparx radius {}",
            params.hazard.size,
            params.hazard.heading,
            params.sentry_radius
        );

        Self {
            marker: Marker::new(arena.marker_start()),
            hazard: Hazard::new(arena.center(), &params.hazard),
            ledger: Ledger::new(arena.playable_area()),
            sentries,
            arena,
            border,
            config,
            phase: GamePhase::Playing,
            time_ticks: 0,
            seed,
            rng,
            events: Vec::new(),
        }
    }

    /// Discard everything and start over. Parameters are rolled from the
    /// session RNG, so each restart gets a new hazard.
    pub fn restart(&mut self) {
        let params = SessionParams::roll(&mut self.rng, &self.config);
        let rng = self.rng.clone();
        *self = Self::build(self.config.clone(), params, self.seed, rng);
        self.push_event(GameEvent::Restarted);
        log::info!("Game restarted");
    }

    pub fn marker_rules(&self) -> MarkerRules {
        MarkerRules {
            radius: self.config.marker_radius,
            speed: self.config.marker_speed,
            edge_locked: self.config.edge_locked,
        }
    }

    /// Claimed share of the playable area, in percent
    pub fn claimed_percent(&self) -> f32 {
        self.ledger.claimed_percent()
    }

    pub fn is_over(&self) -> bool {
        self.phase != GamePhase::Playing
    }

    /// Offer a closed outline to the ledger. Commits it when it meets the
    /// minimum claim size and wins the game once the threshold is reached.
    pub fn claim(&mut self, outline: Vec<Vec2>) -> Option<ClaimOutcome> {
        if !self.config.claims_enabled {
            self.push_event(GameEvent::ClaimDiscarded);
            return None;
        }
        let Some(region) = ClaimedRegion::new(outline) else {
            self.push_event(GameEvent::DrawAbandoned);
            return None;
        };

        let outcome = self.ledger.offer(region, self.config.min_claim_percent);
        match outcome {
            ClaimOutcome::Committed {
                percent,
                total_percent,
            } => {
                log::info!("Claimed {percent:.1}% (total {total_percent:.1}%)");
                self.push_event(GameEvent::ClaimCommitted {
                    percent,
                    total_percent,
                });
                if self.phase == GamePhase::Playing
                    && total_percent >= self.config.win_threshold as f32
                {
                    self.phase = GamePhase::Win;
                    self.push_event(GameEvent::Won { total_percent });
                    log::info!("Win threshold {}% reached", self.config.win_threshold);
                }
            }
            ClaimOutcome::Rejected { percent } => {
                log::debug!(
                    "Claim of {percent:.1}% below minimum {}%",
                    self.config.min_claim_percent
                );
                self.push_event(GameEvent::ClaimRejected { percent });
            }
        }
        Some(outcome)
    }

    /// Switch to `Lose` (no-op unless playing)
    pub fn lose(&mut self, cause: LossCause) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::Lose;
        self.push_event(GameEvent::Lost(cause));
        log::info!("Game over: caught by {cause:?}");
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Positions of all sentries
    pub fn sentry_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.sentries.iter().map(|s| s.position(&self.border))
    }
}
