//! Collision detection and response for the ball
//!
//! Screen coordinates: x grows right, y grows down, so a rectangle's top
//! edge is its smallest y.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Inclusive point containment
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Shrink by `margin` on every side
    pub fn inset(&self, margin: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(margin),
            size: self.size - Vec2::splat(margin * 2.0),
        }
    }
}

/// Area the ball centre may occupy: the canvas shrunk by the ball radius
pub fn board_area(canvas_size: Vec2, ball_radius: f32) -> Rect {
    Rect {
        min: Vec2::ZERO,
        size: canvas_size,
    }
    .inset(ball_radius)
}

/// Board edge the ball crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

/// Result of keeping the ball inside the board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallBounce {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Edge that was corrected, if any
    pub wall: Option<Wall>,
}

/// Mirror the ball back across the first violated board edge.
///
/// Edges are checked left, right, top, bottom and only the first violation
/// is corrected in a single call.
pub fn bounce_off_board(pos: Vec2, vel: Vec2, board: &Rect) -> WallBounce {
    let mut pos = pos;
    let mut vel = vel;

    let wall = if pos.x < board.left() {
        vel.x = -vel.x;
        pos.x += (board.left() - pos.x) * 2.0;
        Some(Wall::Left)
    } else if pos.x > board.right() {
        vel.x = -vel.x;
        pos.x += (board.right() - pos.x) * 2.0;
        Some(Wall::Right)
    } else if pos.y < board.top() {
        vel.y = -vel.y;
        pos.y += (board.top() - pos.y) * 2.0;
        Some(Wall::Top)
    } else if pos.y > board.bottom() {
        vel.y = -vel.y;
        pos.y += (board.bottom() - pos.y) * 2.0;
        Some(Wall::Bottom)
    } else {
        None
    };

    WallBounce { pos, vel, wall }
}

/// Circle vs axis-aligned rectangle overlap (touching counts)
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = center.clamp(rect.min, rect.max());
    center.distance_squared(closest) <= radius * radius
}

/// Velocity after hitting `brick`, given where the ball was before the move.
///
/// Coming from the side (previous y strictly inside the brick's vertical
/// span) flips x; coming from above or below flips y.
pub fn brick_bounce(old_pos: Vec2, vel: Vec2, brick: &Rect) -> Vec2 {
    if old_pos.y <= brick.top() || old_pos.y >= brick.bottom() {
        Vec2::new(vel.x, -vel.y)
    } else {
        Vec2::new(-vel.x, vel.y)
    }
}
