//! Render contract
//!
//! Turns a read-only session snapshot into an ordered list of draw commands.
//! No drawing happens here; a windowed frontend (or a test) consumes the list.

pub mod commands;

pub use commands::{Color, DrawCommand, colors};

use glam::Vec2;

use crate::sim::{GamePhase, GameSession, Rect};

/// Trail line width
const TRAIL_WIDTH: f32 = 3.0;

/// HUD anchor (top-left, just inside the border)
const HUD_POS: Vec2 = Vec2::new(20.0, 20.0);

pub const WIN_BANNER: &str = "You Win! Press R to restart.";
pub const LOSE_BANNER: &str = "Game Over! Press R to restart.";

/// HUD line for a claimed percentage
pub fn hud_text(percent: f32) -> String {
    format!("Area Claimed: {percent:.1}%")
}

/// Banner for a finished game
pub fn banner(phase: GamePhase) -> Option<(&'static str, Color)> {
    match phase {
        GamePhase::Playing => None,
        GamePhase::Win => Some((WIN_BANNER, colors::WIN)),
        GamePhase::Lose => Some((LOSE_BANNER, colors::LOSE)),
    }
}

/// Build the draw list for one frame
pub fn draw_frame(session: &GameSession) -> Vec<DrawCommand> {
    let arena = &session.arena;
    let mut cmds = Vec::with_capacity(8 + session.ledger.len() + session.sentries.len());

    cmds.push(DrawCommand::Clear(colors::BACKGROUND));
    cmds.push(DrawCommand::FrameRect {
        rect: Rect::new(Vec2::ZERO, Vec2::new(arena.width, arena.height)),
        width: arena.border,
        color: colors::BORDER,
    });

    for region in session.ledger.regions() {
        cmds.push(DrawCommand::FillPolygon {
            points: region.vertices().to_vec(),
            color: colors::CLAIMED,
        });
    }

    cmds.push(DrawCommand::FillPolygon {
        points: session.hazard.outline(),
        color: colors::QIX,
    });

    if session.marker.is_drawing() && session.marker.path.len() >= 2 {
        cmds.push(DrawCommand::Polyline {
            points: session.marker.path.clone(),
            width: TRAIL_WIDTH,
            color: colors::TRAIL,
        });
    }

    for (pos, sentry) in session.sentry_positions().zip(&session.sentries) {
        cmds.push(DrawCommand::FillCircle {
            center: pos,
            radius: sentry.radius,
            color: colors::SPARX,
        });
    }

    cmds.push(DrawCommand::FillCircle {
        center: session.marker.pos,
        radius: session.config.marker_radius,
        color: colors::MARKER,
    });

    cmds.push(DrawCommand::Text {
        text: hud_text(session.claimed_percent()),
        pos: HUD_POS,
        color: colors::HUD,
        centered: false,
    });

    if let Some((text, color)) = banner(session.phase) {
        cmds.push(DrawCommand::Text {
            text: text.to_string(),
            pos: arena.center(),
            color,
            centered: true,
        });
    }

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{Direction, LossCause, TickInput, tick};

    fn session() -> GameSession {
        GameSession::new(GameConfig::default(), 42).unwrap()
    }

    fn texts(cmds: &[DrawCommand]) -> Vec<&str> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_hud_text_format() {
        assert_eq!(hud_text(0.0), "Area Claimed: 0.0%");
        assert_eq!(hud_text(11.052), "Area Claimed: 11.1%");
        assert_eq!(hud_text(100.0), "Area Claimed: 100.0%");
    }

    #[test]
    fn test_fresh_session_frame() {
        let s = session();
        let cmds = draw_frame(&s);

        assert_eq!(cmds[0], DrawCommand::Clear(colors::BACKGROUND));
        assert!(matches!(cmds[1], DrawCommand::FrameRect { width, .. } if width == 10.0));
        // Qix polygon, two sparx, marker, HUD
        assert_eq!(cmds.len(), 7);
        assert!(matches!(&cmds[2], DrawCommand::FillPolygon { points, .. } if points.len() == 5));
        assert_eq!(
            cmds.iter()
                .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
                .count(),
            3
        );
        assert_eq!(texts(&cmds), vec!["Area Claimed: 0.0%"]);
    }

    #[test]
    fn test_trail_drawn_while_drawing() {
        let mut s = session();
        for _ in 0..5 {
            tick(&mut s, &TickInput::moving(Direction::Up));
        }
        assert!(s.marker.is_drawing());

        let cmds = draw_frame(&s);
        let trail = cmds.iter().find_map(|c| match c {
            DrawCommand::Polyline { points, .. } => Some(points),
            _ => None,
        });
        assert_eq!(trail, Some(&s.marker.path));
        assert!(cmds.iter().any(|c| matches!(
            c,
            DrawCommand::Polyline { width, color, .. } if *width == 3.0 && *color == colors::TRAIL
        )));
    }

    #[test]
    fn test_palette() {
        let mut s = session();
        s.claim(vec![
            Vec2::new(10.0, 10.0),
            Vec2::new(260.0, 10.0),
            Vec2::new(260.0, 210.0),
            Vec2::new(10.0, 210.0),
        ]);
        let cmds = draw_frame(&s);

        assert_eq!(cmds[0], DrawCommand::Clear([75.0 / 255.0, 75.0 / 255.0, 75.0 / 255.0, 1.0]));
        assert!(matches!(
            &cmds[2],
            DrawCommand::FillPolygon { color, .. } if *color == [0.0, 200.0 / 255.0, 0.0, 1.0]
        ));
        assert!(matches!(&cmds[3], DrawCommand::FillPolygon { color, .. } if *color == colors::QIX));
        assert!(cmds.iter().any(|c| matches!(
            c,
            DrawCommand::FillCircle { color, center, .. }
                if *color == [1.0, 1.0, 0.0, 1.0] && *center == s.marker.pos
        )));
        assert_eq!(colors::QIX, [1.0, 0.0, 1.0, 1.0]);
        assert_eq!(colors::SPARX, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(colors::TRAIL, [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_banners() {
        let mut s = session();
        s.lose(LossCause::Qix);
        let cmds = draw_frame(&s);
        assert_eq!(texts(&cmds).last(), Some(&LOSE_BANNER));
        assert!(matches!(cmds.last(), Some(DrawCommand::Text { centered: true, .. })));

        s.phase = GamePhase::Win;
        assert_eq!(texts(&draw_frame(&s)).last(), Some(&WIN_BANNER));
        assert!(banner(GamePhase::Playing).is_none());
    }
}
