//! Fixed timestep simulation tick
//!
//! Order within a tick: marker (may claim and win) → qix → sparx → collisions.

use super::collision::{marker_hits_hazard, marker_hits_sentry, trail_hits_hazard};
use super::direction::Direction;
use super::geometry::BoundingBoxTest;
use super::marker::TrailEvent;
use super::state::{GameEvent, GamePhase, GameSession, LossCause};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Movement intent
    pub direction: Direction,
    /// Held draw key; only matters with edge-locked movement
    pub draw: bool,
    /// Start over (ignored while playing)
    pub restart: bool,
    /// Leave the game. Read by the frame loop between ticks.
    pub quit: bool,
}

impl TickInput {
    pub fn moving(direction: Direction) -> Self {
        Self {
            direction,
            ..Default::default()
        }
    }
}

/// Advance the session by one fixed tick
pub fn tick(session: &mut GameSession, input: &TickInput) {
    if session.phase != GamePhase::Playing {
        if input.restart {
            session.restart();
        }
        return;
    }

    session.time_ticks += 1;

    // Player movement and trail bookkeeping
    let rules = session.marker_rules();
    let event = session
        .marker
        .step(input.direction, input.draw, &session.arena, &rules);
    match event {
        TrailEvent::None => {}
        TrailEvent::Started => session.push_event(GameEvent::DrawStarted),
        TrailEvent::Abandoned => session.push_event(GameEvent::DrawAbandoned),
        TrailEvent::Completed(outline) => {
            session.claim(outline);
        }
    }
    if session.phase != GamePhase::Playing {
        return;
    }

    // Enemies
    session
        .hazard
        .update(&session.arena, session.ledger.regions(), &BoundingBoxTest);
    for sentry in &mut session.sentries {
        sentry.update(&session.border);
    }

    check_collisions(session);
}

fn check_collisions(session: &mut GameSession) {
    let marker_pos = session.marker.pos;
    let marker_radius = session.config.marker_radius;
    let hazard_bounds = session.hazard.bounds();

    if marker_hits_hazard(marker_pos, marker_radius, &hazard_bounds) {
        session.lose(LossCause::Qix);
        return;
    }

    let caught_by = session
        .sentry_positions()
        .zip(&session.sentries)
        .position(|(pos, sentry)| marker_hits_sentry(marker_pos, marker_radius, pos, sentry.radius));
    if let Some(index) = caught_by {
        session.lose(LossCause::Sparx(index));
        return;
    }

    if session.config.trail_collision
        && session.marker.is_drawing()
        && trail_hits_hazard(&session.marker.path, &hazard_bounds)
    {
        session.lose(LossCause::Trail);
    }
}
