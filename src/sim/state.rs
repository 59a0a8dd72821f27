//! Engine state and world entities
//!
//! Everything the step reads or writes lives in one owned `EngineState`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::history::History;
use super::timeline::TimelineLog;
use super::{Depth, Tick};
use crate::consts::*;
use crate::settings::Tunables;

/// Whether the simulation advances this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Running,
    Paused,
}

/// Ball state recorded once per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl BallState {
    /// Starting position: one diameter in from the top-left corner
    pub fn spawn(radius: f32) -> Self {
        Self {
            pos: Vec2::splat(radius * 2.0),
            vel: BALL_START_VEL,
        }
    }
}

/// A brick. Breaking is a history state, bricks are never removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub rect: Rect,
    /// Deepest rewind this brick ignores
    pub immunity: Depth,
    /// Broken flag per tick
    pub broken: History<bool>,
}

impl Brick {
    /// Immunity used for tick resolution this step
    pub fn effective_immunity(&self, tunables: &Tunables) -> Depth {
        if tunables.uniform_immunity {
            UNIFORM_IMMUNITY
        } else {
            self.immunity
        }
    }

    pub fn is_broken_at(&self, tick: Tick) -> bool {
        self.broken.get(tick).copied().unwrap_or(false)
    }
}

/// Complete engine state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineState {
    /// Seed the brick layout was drawn from
    pub seed: u64,
    pub phase: Phase,
    pub timeline: TimelineLog,
    /// Ball history (ball immunity is always 0)
    pub ball: History<BallState>,
    /// Bricks in fixed index order
    pub bricks: Vec<Brick>,
}

impl EngineState {
    /// Create a fresh world with a seeded brick layout
    pub fn new(seed: u64, tunables: &Tunables) -> Self {
        Self::with_capacity(seed, tunables, 0)
    }

    /// Same as [`EngineState::new`], preallocating every history for `ticks` steps
    pub fn with_capacity(seed: u64, tunables: &Tunables, ticks: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let slots = ticks + 1;

        let mut bricks = Vec::new();
        for col in BRICK_COLUMNS {
            for row in BRICK_ROWS {
                let rect = Rect::new(
                    col as f32 * tunables.brick_width,
                    row as f32 * tunables.brick_height,
                    tunables.brick_width,
                    tunables.brick_height,
                );
                bricks.push(Brick {
                    id: bricks.len() as u32,
                    rect,
                    immunity: rng.random_range(0..IMMUNITY_LEVELS),
                    broken: History::with_capacity(false, slots),
                });
            }
        }

        log::info!(
            "World created: seed={}, {} bricks, uniform immunity={}",
            seed,
            bricks.len(),
            tunables.uniform_immunity
        );

        Self {
            seed,
            phase: Phase::Running,
            timeline: TimelineLog::with_capacity(ticks),
            ball: History::with_capacity(BallState::spawn(tunables.ball_radius), slots),
            bricks,
        }
    }

    /// Latest produced tick
    pub fn current_tick(&self) -> Tick {
        self.timeline.current_tick()
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    /// Ball state at the current tick
    pub fn ball_now(&self) -> Option<&BallState> {
        self.ball.get(self.current_tick())
    }

    /// Number of bricks broken at the current tick
    pub fn broken_count(&self) -> usize {
        let tick = self.current_tick();
        self.bricks.iter().filter(|b| b.is_broken_at(tick)).count()
    }
}
