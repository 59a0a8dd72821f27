//! Platform abstraction layer
//!
//! Turns whatever input backend the host has into a [`StepInput`]:
//! - Pause: edge-triggered ("just pressed")
//! - Rewind levels 1-4: level-triggered ("held"), deepest held level wins

use glam::Vec2;

use crate::consts::MAX_REWIND_DEPTH;
use crate::sim::{Depth, StepInput};

/// Logical controls the simulation cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Pause,
    /// Rewind of the given depth (1 = shallowest)
    Rewind(Depth),
}

impl Control {
    /// Default keyboard binding: Space pauses, Z X C V rewind at depth 1-4
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            ' ' => Some(Control::Pause),
            'z' => Some(Control::Rewind(1)),
            'x' => Some(Control::Rewind(2)),
            'c' => Some(Control::Rewind(3)),
            'v' => Some(Control::Rewind(4)),
            _ => None,
        }
    }
}

/// Input queries a host backend answers for the current frame
pub trait InputSource {
    /// Went down this frame
    fn just_pressed(&self, control: Control) -> bool;
    /// Currently down
    fn is_held(&self, control: Control) -> bool;
}

/// Deepest rewind level currently held, 0 when none is
pub fn rewind_depth(input: &impl InputSource) -> Depth {
    (1..=MAX_REWIND_DEPTH)
        .rev()
        .find(|&depth| input.is_held(Control::Rewind(depth)))
        .unwrap_or(0)
}

/// Sample the input source into a step input
pub fn step_input(input: &impl InputSource, canvas_size: Vec2) -> StepInput {
    StepInput {
        pause: input.just_pressed(Control::Pause),
        rewind_depth: rewind_depth(input),
        canvas_size,
    }
}

/// One segment of a scripted session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptSegment {
    pub frames: u32,
    /// Rewind depth held during the segment (0 = none)
    pub hold: Depth,
    /// Press pause on the first frame of the segment
    pub pause: bool,
}

/// Deterministic input replayed frame by frame (headless runs and tests)
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    segments: Vec<ScriptSegment>,
    frame: u32,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Play forward for `frames` frames
    pub fn play(mut self, frames: u32) -> Self {
        self.segments.push(ScriptSegment {
            frames,
            hold: 0,
            pause: false,
        });
        self
    }

    /// Hold a rewind control for `frames` frames
    pub fn hold(mut self, depth: Depth, frames: u32) -> Self {
        self.segments.push(ScriptSegment {
            frames,
            hold: depth,
            pause: false,
        });
        self
    }

    /// Press pause once, then idle for `frames` frames (including the press)
    pub fn toggle_pause(mut self, frames: u32) -> Self {
        self.segments.push(ScriptSegment {
            frames: frames.max(1),
            hold: 0,
            pause: true,
        });
        self
    }

    /// Total scripted frames
    pub fn len(&self) -> u32 {
        self.segments.iter().map(|s| s.frames).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current frame index
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Move to the next frame
    pub fn next_frame(&mut self) {
        self.frame += 1;
    }

    pub fn is_finished(&self) -> bool {
        self.frame >= self.len()
    }

    /// Segment active at the current frame and the offset into it
    fn current(&self) -> Option<(&ScriptSegment, u32)> {
        let mut start = 0;
        for segment in &self.segments {
            if self.frame < start + segment.frames {
                return Some((segment, self.frame - start));
            }
            start += segment.frames;
        }
        None
    }
}

impl InputSource for ScriptedInput {
    fn just_pressed(&self, control: Control) -> bool {
        match (control, self.current()) {
            (Control::Pause, Some((segment, 0))) => segment.pause,
            _ => false,
        }
    }

    fn is_held(&self, control: Control) -> bool {
        match (control, self.current()) {
            (Control::Rewind(depth), Some((segment, _))) => segment.hold == depth,
            _ => false,
        }
    }
}
