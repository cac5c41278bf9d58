//! Player marker and trail controller
//!
//! The marker rides the border until it steps into the open arena, then
//! records a polyline (one vertex per direction change) until it reaches the
//! border again. A completed path is closed into a polygon by folding in the
//! arena corners it encloses.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, Side};
use super::direction::Direction;
use super::geometry::{Rect, segments_intersect};

/// Marker mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarkerState {
    /// Riding the border (not drawing)
    #[default]
    OnBorder,
    /// Drawing a trail through the open arena
    Drawing,
}

/// The two most recently touched border sides: always one horizontal
/// (top/bottom) and one vertical (left/right), oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideHistory {
    entries: [Side; 2],
}

impl Default for SideHistory {
    fn default() -> Self {
        Self {
            entries: [Side::Left, Side::Top],
        }
    }
}

impl SideHistory {
    /// Record travel toward `side`: the opposite side is dropped and `side`
    /// becomes the newest entry. No change if `side` is already held.
    pub fn record(&mut self, side: Side) {
        let opposite = side.opposite();
        if self.entries[0] == opposite {
            self.entries = [self.entries[1], side];
        } else if self.entries[1] == opposite {
            self.entries[1] = side;
        }
    }

    pub fn contains(&self, side: Side) -> bool {
        self.entries.contains(&side)
    }

    /// Entries, oldest first
    pub fn sides(&self) -> [Side; 2] {
        self.entries
    }
}

/// What happened to the trail during one step
#[derive(Debug, Clone, PartialEq)]
pub enum TrailEvent {
    /// Nothing changed state (moved along the border, extended the trail or idled)
    None,
    /// Stepped off the border and began drawing
    Started,
    /// Reached the border with a usable path; carries the closed outline
    Completed(Vec<Vec2>),
    /// Trail dropped without a claim (too short or crossed itself)
    Abandoned,
}

/// Movement tuning for the marker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerRules {
    pub radius: f32,
    pub speed: f32,
    /// Leaving the border needs the draw command
    pub edge_locked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marker {
    pub pos: Vec2,
    pub state: MarkerState,
    /// Trail vertices; the last entry is always the marker position while
    /// drawing
    pub path: Vec<Vec2>,
    pub sides: SideHistory,
    /// Last position held on the border; the trail leaves from here
    anchor: Vec2,
    /// Border the current trail left from
    start_side: Option<Side>,
    prev_direction: Direction,
}

impl Marker {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            state: MarkerState::OnBorder,
            path: Vec::new(),
            sides: SideHistory::default(),
            anchor: pos,
            start_side: None,
            prev_direction: Direction::None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.state == MarkerState::Drawing
    }

    /// Apply one tick of player intent
    pub fn step(
        &mut self,
        direction: Direction,
        draw_held: bool,
        arena: &Arena,
        rules: &MarkerRules,
    ) -> TrailEvent {
        if direction.is_none() {
            return TrailEvent::None;
        }

        let target = arena.clamp(self.pos + direction.delta() * rules.speed);

        match self.state {
            MarkerState::OnBorder => {
                if arena.on_border(self.pos, rules.radius) {
                    if rules.edge_locked && !draw_held && !arena.on_border(target, rules.radius) {
                        return TrailEvent::None;
                    }
                    self.anchor = self.pos;
                    self.pos = target;
                    return TrailEvent::None;
                }

                // Stepped into the open on the previous tick: start a trail
                self.state = MarkerState::Drawing;
                self.path.clear();
                self.path.push(self.pos);
                self.start_side = arena.classify(self.anchor, rules.radius);
                self.prev_direction = Direction::None;
                log::debug!("Trail started at {:?} from {:?}", self.pos, self.start_side);

                match self.advance(direction, target, arena, rules) {
                    TrailEvent::None => TrailEvent::Started,
                    other => other,
                }
            }
            MarkerState::Drawing => self.advance(direction, target, arena, rules),
        }
    }

    /// Move along the trail to `target`, then check for self-touch and
    /// completion
    fn advance(
        &mut self,
        direction: Direction,
        target: Vec2,
        arena: &Arena,
        rules: &MarkerRules,
    ) -> TrailEvent {
        if self.touches_trail(self.pos, target) {
            log::debug!("Trail crossed itself at {:?}", target);
            self.pos = self.anchor;
            self.reset_trail();
            return TrailEvent::Abandoned;
        }

        if direction != self.prev_direction {
            if let Some(side) = direction.side() {
                self.sides.record(side);
            }
            self.path.push(target);
            self.prev_direction = direction;
        } else if let Some(last) = self.path.last_mut() {
            *last = target;
        }
        self.pos = target;

        if !arena.on_border(target, rules.radius) {
            return TrailEvent::None;
        }

        if self.path.len() <= 2 {
            log::debug!("Trail returned to the border too early");
            self.reset_trail();
            return TrailEvent::Abandoned;
        }

        let outline = close_path(&self.path, &self.sides, self.start_side, arena, rules.radius);
        self.reset_trail();
        TrailEvent::Completed(outline)
    }

    /// Does the move `from`-`to` touch a trail segment other than the one
    /// ending at `from`?
    fn touches_trail(&self, from: Vec2, to: Vec2) -> bool {
        let n = self.path.len();
        if n < 3 {
            return false;
        }
        self.path[..n - 1]
            .windows(2)
            .any(|seg| segments_intersect(seg[0], seg[1], from, to))
    }

    fn reset_trail(&mut self) {
        self.state = MarkerState::OnBorder;
        self.path.clear();
        self.start_side = None;
    }
}

/// Close an open trail into a polygon by appending the arena corners it
/// encloses.
///
/// The side set is the recorded history plus `start_side`, the border the
/// trail left from. A corner between a vertical and a horizontal side is
/// included when both sides are in the set and the trail reaches that
/// corner's horizontal border (the start border always counts as reached).
pub fn close_path(
    path: &[Vec2],
    history: &SideHistory,
    start_side: Option<Side>,
    arena: &Arena,
    radius: f32,
) -> Vec<Vec2> {
    let has = |side: Side| history.contains(side) || start_side == Some(side);

    let mut outline = path.to_vec();
    let Some(extent) = Rect::from_points(path) else {
        return outline;
    };
    let reaches = |side: Side| {
        start_side == Some(side)
            || match side {
                Side::Top => extent.min.y <= arena.top() + radius,
                Side::Bottom => extent.max.y >= arena.bottom() - radius,
                Side::Left | Side::Right => false,
            }
    };

    for vertical in [Side::Left, Side::Right] {
        if !has(vertical) {
            continue;
        }
        for horizontal in [Side::Top, Side::Bottom] {
            if has(horizontal) && reaches(horizontal) {
                if let Some(corner) = arena.corner(vertical, horizontal) {
                    outline.push(corner);
                }
            }
        }
    }
    outline
}
