//! Deterministic simulation module
//!
//! All time-travel logic lives here. This module must be pure and deterministic:
//! - Append-only timeline and histories
//! - Seeded RNG only
//! - Stable iteration order (by brick index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod error;
pub mod history;
pub mod resolve;
pub mod state;
pub mod tick;
pub mod timeline;

/// Discrete simulation step index; tick 0 is the initial state
pub type Tick = u64;
/// Rewind depth recorded per tick, also used as an immunity level
pub type Depth = u32;

pub use collision::{Rect, Wall, WallBounce, board_area, bounce_off_board, circle_rect_overlap};
pub use error::SimError;
pub use history::History;
pub use resolve::{is_fresh, resolve};
pub use state::{BallState, Brick, EngineState, Phase};
pub use tick::{BALL_IMMUNITY, BallUpdate, StepInput, advance, step};
pub use timeline::TimelineLog;
