//! One simulation step
//!
//! Order inside a step is fixed: record the rewind depth, resolve and update
//! every brick in index order, then resolve and update the ball. The ball's
//! collision test must see brick state as of the current tick.

use glam::Vec2;

use super::collision::{Rect, board_area, bounce_off_board, brick_bounce, circle_rect_overlap};
use super::error::SimError;
use super::resolve::resolve;
use super::state::{BallState, EngineState, Phase};
use super::{Depth, Tick};
use crate::consts::*;
use crate::renderer::{Frame, build_frame};
use crate::settings::Tunables;

/// Immunity of the ball: every rewind affects it
pub const BALL_IMMUNITY: Depth = 0;

/// Input for a single frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepInput {
    /// Pause toggle (edge-triggered)
    pub pause: bool,
    /// Deepest rewind control currently held, 0 for none
    pub rewind_depth: Depth,
    /// Canvas size the board is fitted to
    pub canvas_size: Vec2,
}

impl Default for StepInput {
    fn default() -> Self {
        Self {
            pause: false,
            rewind_depth: 0,
            canvas_size: CANVAS_SIZE,
        }
    }
}

impl StepInput {
    /// Input holding the given rewind depth
    pub fn rewind(depth: Depth) -> Self {
        Self {
            rewind_depth: depth,
            ..Default::default()
        }
    }
}

/// What happened to the ball during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallUpdate {
    /// State copied verbatim from the originating tick
    Replayed { origin: Tick },
    /// Physics integrated; `hit` is the brick broken this tick, if any
    Fresh { hit: Option<usize> },
}

/// Advance the engine by one frame and return what to draw.
///
/// While paused only the frame for the last produced tick is rebuilt.
pub fn step(
    state: &mut EngineState,
    input: &StepInput,
    tunables: &Tunables,
    dt: f32,
) -> Result<Frame, SimError> {
    if input.pause {
        state.phase = match state.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
        };
        log::info!("{:?} at tick {}", state.phase, state.current_tick());
    }

    if state.phase == Phase::Running {
        advance(state, input, tunables, dt)?;
    }

    build_frame(state, tunables)
}

/// Produce the next tick. Returns how the ball was updated.
pub fn advance(
    state: &mut EngineState,
    input: &StepInput,
    tunables: &Tunables,
    dt: f32,
) -> Result<BallUpdate, SimError> {
    let tick = state.timeline.append(input.rewind_depth)?;
    let board = board_area(input.canvas_size, tunables.ball_radius);

    for brick in &mut state.bricks {
        let origin = resolve(&state.timeline, tick, brick.effective_immunity(tunables));
        let broken = match brick.broken.get(origin) {
            Some(&past) => past,
            None => *brick.broken.at(tick - 1)?,
        };
        brick.broken.set(tick, broken)?;
    }

    let origin = resolve(&state.timeline, tick, BALL_IMMUNITY);
    let update = match state.ball.get(origin).copied() {
        Some(past) => {
            log::trace!("tick {tick}: ball replaying tick {origin}");
            state.ball.set(tick, past)?;
            BallUpdate::Replayed { origin }
        }
        None => {
            log::trace!("tick {tick}: ball computing fresh");
            let prev = *state.ball.at(tick - 1)?;
            let (next, hit) = integrate_ball(state, prev, tick, tunables, dt, &board)?;
            state.ball.set(tick, next)?;
            BallUpdate::Fresh { hit }
        }
    };

    check_density(state)?;
    Ok(update)
}

/// Move the ball, bounce it off the board, and break at most one brick
fn integrate_ball(
    state: &mut EngineState,
    prev: BallState,
    tick: Tick,
    tunables: &Tunables,
    dt: f32,
    board: &Rect,
) -> Result<(BallState, Option<usize>), SimError> {
    let moved = prev.pos + prev.vel * (tunables.ball_speed * dt);
    let bounce = bounce_off_board(moved, prev.vel, board);
    let pos = bounce.pos;
    let mut vel = bounce.vel;

    let mut hit = None;
    for (index, brick) in state.bricks.iter_mut().enumerate() {
        if brick.is_broken_at(tick) {
            continue;
        }
        if circle_rect_overlap(pos, tunables.ball_radius, &brick.rect) {
            log::debug!("tick {tick}: ball broke brick {}", brick.id);
            brick.broken.set(tick, true)?;
            vel = brick_bounce(prev.pos, vel, &brick.rect);
            hit = Some(index);
            break;
        }
    }

    Ok((BallState { pos, vel }, hit))
}

/// Every history must hold exactly `tick + 1` entries
fn check_density(state: &EngineState) -> Result<(), SimError> {
    let tick = state.current_tick();
    let expected = tick as usize + 1;
    if state.ball.len() != expected {
        return Err(SimError::Desync {
            entity: "ball",
            len: state.ball.len(),
            tick,
        });
    }
    if let Some(brick) = state.bricks.iter().find(|b| b.broken.len() != expected) {
        return Err(SimError::Desync {
            entity: "brick",
            len: brick.broken.len(),
            tick,
        });
    }
    Ok(())
}
