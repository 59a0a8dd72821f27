//! Per-frame draw snapshot
//!
//! Built from the current tick only. Hosts either read the fields directly
//! or replay the frame onto a [`DrawTarget`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::UNIFORM_IMMUNITY;
use crate::settings::Tunables;
use crate::sim::{Depth, EngineState, Phase, Rect, SimError, Tick};

/// Linear RGBA, 0-1 per channel
pub type Rgba = [f32; 4];

/// Brick colors indexed by immunity level (grey, orange, red, purple)
pub const IMMUNITY_COLORS: [Rgba; 4] = [
    hex_color(0xCFCFCF),
    hex_color(0xFF9500),
    hex_color(0xE74059),
    hex_color(0x9D15EC),
];

pub const BALL_COLOR: Rgba = [1.0, 1.0, 1.0, 1.0];

/// Opaque color from a `0xRRGGBB` literal
pub const fn hex_color(rgb: u32) -> Rgba {
    [
        ((rgb >> 16) & 0xFF) as f32 / 255.0,
        ((rgb >> 8) & 0xFF) as f32 / 255.0,
        (rgb & 0xFF) as f32 / 255.0,
        1.0,
    ]
}

/// Color for a brick of the given immunity
pub fn immunity_color(immunity: Depth, tunables: &Tunables) -> Rgba {
    let level = if tunables.uniform_immunity {
        UNIFORM_IMMUNITY
    } else {
        immunity
    };
    IMMUNITY_COLORS[(level as usize).min(IMMUNITY_COLORS.len() - 1)]
}

/// Drawing primitives a host backend provides
pub trait DrawTarget {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn fill_rect(&mut self, rect: &Rect, color: Rgba);
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleDraw {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectDraw {
    /// Index of the brick this rectangle shows
    pub brick: usize,
    pub rect: Rect,
    pub color: Rgba,
}

/// Everything visible at one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: Tick,
    pub phase: Phase,
    pub ball: CircleDraw,
    /// Unbroken bricks, in brick index order
    pub bricks: Vec<RectDraw>,
}

impl Frame {
    /// Issue this frame's draw calls: bricks first, ball on top
    pub fn draw(&self, target: &mut impl DrawTarget) {
        for brick in &self.bricks {
            target.fill_rect(&brick.rect, brick.color);
        }
        target.fill_circle(self.ball.center, self.ball.radius, self.ball.color);
    }
}

/// Snapshot the current tick
pub fn build_frame(state: &EngineState, tunables: &Tunables) -> Result<Frame, SimError> {
    let tick = state.current_tick();
    let ball = state.ball.at(tick)?;

    let mut bricks = Vec::with_capacity(state.bricks.len());
    for (index, brick) in state.bricks.iter().enumerate() {
        if *brick.broken.at(tick)? {
            continue;
        }
        bricks.push(RectDraw {
            brick: index,
            rect: brick.rect,
            color: immunity_color(brick.immunity, tunables),
        });
    }

    Ok(Frame {
        tick,
        phase: state.phase,
        ball: CircleDraw {
            center: ball.pos,
            radius: tunables.ball_radius,
            color: BALL_COLOR,
        },
        bricks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::History;

    #[derive(Default)]
    struct Recorder {
        circles: Vec<(Vec2, f32)>,
        rects: Vec<Rect>,
    }

    impl DrawTarget for Recorder {
        fn fill_circle(&mut self, center: Vec2, radius: f32, _color: Rgba) {
            self.circles.push((center, radius));
        }

        fn fill_rect(&mut self, rect: &Rect, _color: Rgba) {
            self.rects.push(*rect);
        }
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color(0xFF0000), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(hex_color(0x000000), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_initial_frame_shows_everything() {
        let tunables = Tunables::default();
        let state = EngineState::new(5, &tunables);
        let frame = build_frame(&state, &tunables).unwrap();
        assert_eq!(frame.tick, 0);
        assert_eq!(frame.bricks.len(), 36);
        assert_eq!(frame.ball.center, Vec2::new(20.0, 20.0));
        assert_eq!(frame.ball.radius, 10.0);
        assert!(frame.bricks.iter().all(|b| b.color == IMMUNITY_COLORS[1]));
    }

    #[test]
    fn test_colors_follow_immunity_when_not_uniform() {
        let tunables = Tunables {
            uniform_immunity: false,
            ..Default::default()
        };
        let state = EngineState::new(5, &tunables);
        let frame = build_frame(&state, &tunables).unwrap();
        for draw in &frame.bricks {
            let immunity = state.bricks[draw.brick].immunity as usize;
            assert_eq!(draw.color, IMMUNITY_COLORS[immunity]);
        }
    }

    #[test]
    fn test_broken_bricks_are_hidden() {
        let tunables = Tunables::default();
        let mut state = EngineState::new(5, &tunables);
        state.bricks[3].broken = History::new(true);
        let frame = build_frame(&state, &tunables).unwrap();
        assert_eq!(frame.bricks.len(), 35);
        assert!(frame.bricks.iter().all(|b| b.brick != 3));
    }

    #[test]
    fn test_draw_order() {
        let tunables = Tunables::default();
        let state = EngineState::new(5, &tunables);
        let frame = build_frame(&state, &tunables).unwrap();
        let mut recorder = Recorder::default();
        frame.draw(&mut recorder);
        assert_eq!(recorder.rects.len(), 36);
        assert_eq!(recorder.circles, vec![(Vec2::new(20.0, 20.0), 10.0)]);
    }

    #[test]
    fn test_frame_serializes() {
        let tunables = Tunables::default();
        let state = EngineState::new(5, &tunables);
        let frame = build_frame(&state, &tunables).unwrap();
        let json = serde_json::to_string(&frame).unwrap();
        let back: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(back, frame);
    }
}
