//! Rewind Breakout - a brick breaker with per-entity time travel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (timeline, tick resolution, histories, physics)
//! - `renderer`: Renderable per-frame snapshot and the drawing boundary
//! - `platform`: Input abstraction (pause and rewind controls)
//! - `settings`: Live tunables

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use renderer::{DrawTarget, Frame};
pub use settings::{SettingsError, Tunables};
pub use sim::{Depth, EngineState, SimError, StepInput, Tick, step};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Canvas resolution the original board was designed for
    pub const CANVAS_SIZE: Vec2 = Vec2::new(800.0, 600.0);
    /// Frame delta used by the headless host (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Ball defaults
    pub const DEFAULT_BALL_SPEED: f32 = 500.0;
    pub const DEFAULT_BALL_RADIUS: f32 = 10.0;
    pub const MAX_BALL_SPEED: f32 = 800.0;
    pub const MAX_BALL_RADIUS: f32 = 20.0;
    /// Initial (unnormalised) ball velocity
    pub const BALL_START_VEL: Vec2 = Vec2::ONE;

    /// Brick grid: columns 1..7 and rows 3..9, in brick-size units
    pub const DEFAULT_BRICK_WIDTH: f32 = 100.0;
    pub const DEFAULT_BRICK_HEIGHT: f32 = 40.0;
    pub const BRICK_COLUMNS: std::ops::Range<u32> = 1..7;
    pub const BRICK_ROWS: std::ops::Range<u32> = 3..9;

    /// Brick immunity is drawn from `0..IMMUNITY_LEVELS`
    pub const IMMUNITY_LEVELS: u32 = 3;
    /// Immunity every brick shares in uniform mode
    pub const UNIFORM_IMMUNITY: u32 = 1;
    /// Deepest rewind a control can request
    pub const MAX_REWIND_DEPTH: u32 = 4;
}
