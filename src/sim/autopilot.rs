//! Demo autopilot
//!
//! Produces tick input for unattended play: rectangular sorties up from the
//! bottom border and back, each one next to the last. Waits while the qix is
//! over the planned area. Not clever, just enough to show the claim engine
//! working.

use std::collections::VecDeque;

use glam::Vec2;

use super::direction::Direction;
use super::geometry::Rect;
use super::state::GameSession;
use super::tick::TickInput;

/// Ticks the win/lose banner stays up before the autopilot acts
pub const BANNER_HOLD_TICKS: u32 = 120;

/// Safety cap for legs that run until the marker reaches the border
const MAX_LEG_TICKS: u32 = 400;

/// Clearance kept between a planned sortie and the qix box
const QIX_CLEARANCE: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Leg {
    /// Move for a fixed number of ticks
    For(Direction, u32),
    /// Move until the trail is closed (or the budget runs out)
    UntilBorder(Direction, u32),
}

#[derive(Debug, Clone)]
pub struct Autopilot {
    legs: VecDeque<Leg>,
    sortie: u32,
    heading: Direction,
    /// Restarts still allowed after a game ends
    restarts_left: u32,
    /// Ticks spent in a finished game
    over_ticks: u32,
}

impl Autopilot {
    pub fn new(restarts: u32) -> Self {
        Self {
            legs: VecDeque::new(),
            sortie: 0,
            heading: Direction::Left,
            restarts_left: restarts,
            over_ticks: 0,
        }
    }

    /// Number of sorties flown so far
    pub fn sorties(&self) -> u32 {
        self.sortie
    }

    /// Decide this tick's input
    pub fn next_input(&mut self, session: &GameSession) -> TickInput {
        if session.is_over() {
            self.legs.clear();
            self.over_ticks += 1;
            if self.over_ticks < BANNER_HOLD_TICKS {
                return TickInput::default();
            }
            self.over_ticks = 0;
            if self.restarts_left > 0 {
                self.restarts_left -= 1;
                self.sortie = 0;
                return TickInput {
                    restart: true,
                    ..Default::default()
                };
            }
            return TickInput {
                quit: true,
                ..Default::default()
            };
        }

        while let Some(leg) = self.legs.front_mut() {
            match leg {
                Leg::For(dir, remaining) => {
                    if *remaining > 0 {
                        *remaining -= 1;
                        return drawing(*dir);
                    }
                }
                Leg::UntilBorder(dir, budget) => {
                    if session.marker.is_drawing() && *budget > 0 {
                        *budget -= 1;
                        return drawing(*dir);
                    }
                }
            }
            self.legs.pop_front();
        }

        self.plan(session)
    }

    /// Plan the next sortie, or wait if the qix is in the way
    fn plan(&mut self, session: &GameSession) -> TickInput {
        let arena = &session.arena;
        let speed = session.config.marker_speed;
        let pos = session.marker.pos;

        // Left stranded in the open: head back down first
        if !arena.on_border(pos, session.config.marker_radius) {
            self.legs.push_back(Leg::UntilBorder(Direction::Down, MAX_LEG_TICKS));
            return TickInput::moving(Direction::Down);
        }

        let depth = 34 + (self.sortie % 3) * 8;
        let width = 30 + (self.sortie % 4) * 6;
        let reach = width as f32 * speed;

        // Turn around at the walls
        let fits_left = pos.x - reach > arena.left() + speed;
        let fits_right = pos.x + reach < arena.right() - speed;
        self.heading = match self.heading {
            Direction::Left if !fits_left => Direction::Right,
            Direction::Right if !fits_right => Direction::Left,
            other => other,
        };

        let far_x = match self.heading {
            Direction::Left => pos.x - reach,
            _ => pos.x + reach,
        };
        let top = pos.y - depth as f32 * speed;
        let area = Rect::new(
            Vec2::new(pos.x.min(far_x), top) - Vec2::splat(QIX_CLEARANCE),
            Vec2::new(pos.x.max(far_x), pos.y) + Vec2::splat(QIX_CLEARANCE),
        );
        if area.overlaps(&session.hazard.bounds()) {
            return TickInput::default();
        }

        log::debug!("Autopilot sortie {}: {depth} up, {width} {:?}", self.sortie, self.heading);
        self.sortie += 1;
        self.legs.push_back(Leg::For(Direction::Up, depth - 1));
        self.legs.push_back(Leg::For(self.heading, width));
        self.legs.push_back(Leg::UntilBorder(Direction::Down, MAX_LEG_TICKS));
        drawing(Direction::Up)
    }
}

/// Move with the draw key held
fn drawing(direction: Direction) -> TickInput {
    TickInput {
        direction,
        draw: true,
        ..Default::default()
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::consts::QIX_SPEED;
    use crate::sim::hazard::HazardParams;
    use crate::sim::state::{GamePhase, SessionParams};
    use crate::sim::tick::tick;

    fn quiet_session(threshold: u32) -> GameSession {
        let config = GameConfig {
            sentry_count: 0,
            ..GameConfig::default().with_win_threshold(threshold).unwrap()
        };
        let params = SessionParams {
            hazard: HazardParams {
                size: 30.0,
                speed: QIX_SPEED,
                heading: Vec2::new(1.0, 1.0),
                spin: 1.0,
            },
            sentry_radius: 5.0,
        };
        let mut s = GameSession::with_params(config, params, 3).unwrap();
        // Park the qix in the top-right corner
        s.hazard.pos = Vec2::new(740.0, 60.0);
        s.hazard.vel = Vec2::ZERO;
        s
    }

    #[test]
    fn test_first_sortie_claims() {
        let mut s = quiet_session(100);
        let mut pilot = Autopilot::new(0);

        for _ in 0..200 {
            let input = pilot.next_input(&s);
            tick(&mut s, &input);
            if !s.ledger.is_empty() {
                break;
            }
        }
        assert_eq!(pilot.sorties(), 1);
        assert_eq!(s.ledger.len(), 1);
        assert!(s.claimed_percent() >= 5.0);
        assert!(!s.marker.is_drawing());
    }

    #[test]
    fn test_plays_to_a_win() {
        let mut s = quiet_session(30);
        let mut pilot = Autopilot::new(0);

        for _ in 0..5000 {
            let input = pilot.next_input(&s);
            tick(&mut s, &input);
            if s.is_over() {
                break;
            }
        }
        assert_eq!(s.phase, GamePhase::Win);
        assert!(s.claimed_percent() >= 30.0);
    }

    #[test]
    fn test_waits_for_qix() {
        let mut s = quiet_session(100);
        // Qix sitting right above the marker
        s.hazard.pos = Vec2::new(400.0, 450.0);
        let mut pilot = Autopilot::new(0);
        assert_eq!(pilot.next_input(&s), TickInput::default());
        assert_eq!(pilot.sorties(), 0);
    }

    #[test]
    fn test_restarts_then_quits() {
        let mut s = quiet_session(100);
        s.phase = GamePhase::Lose;
        let mut pilot = Autopilot::new(1);

        let mut inputs = Vec::new();
        for _ in 0..BANNER_HOLD_TICKS {
            inputs.push(pilot.next_input(&s));
        }
        assert!(inputs[..inputs.len() - 1].iter().all(|i| *i == TickInput::default()));
        assert!(inputs.last().unwrap().restart);

        for _ in 0..BANNER_HOLD_TICKS {
            inputs.push(pilot.next_input(&s));
        }
        assert!(inputs.last().unwrap().quit);
    }
}
