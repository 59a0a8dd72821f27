//! Rendering boundary
//!
//! The simulation never owns a canvas. It hands out a [`Frame`] every host
//! frame (paused or not) and the host draws it with its own primitives.

pub mod frame;

pub use frame::{
    BALL_COLOR, CircleDraw, DrawTarget, Frame, IMMUNITY_COLORS, RectDraw, Rgba, build_frame,
    hex_color, immunity_color,
};
