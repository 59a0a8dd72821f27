//! Contract violations inside the simulation core
//!
//! None of these are recoverable: each one means the timeline and the
//! entity histories no longer line up. Hosts should log and stop.

use thiserror::Error;

use super::{Depth, Tick};

/// Internal-consistency failures raised by the timeline, histories and step
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// Timeline read outside `1..=len`
    #[error("tick {tick} is outside the recorded timeline (1..={len})")]
    TimelineOutOfRange { tick: Tick, len: Tick },

    /// History read of a tick that was never written
    #[error("history has no entry for tick {tick} (last recorded tick is {last})")]
    HistoryOutOfRange { tick: Tick, last: Tick },

    /// History write that would skip a tick or touch a published one
    #[error("history write at tick {tick} rejected (next open slot is {next})")]
    HistoryGap { tick: Tick, next: Tick },

    /// History length no longer matches the tick counter
    #[error("{entity} history holds {len} entries at tick {tick}")]
    Desync {
        entity: &'static str,
        len: usize,
        tick: Tick,
    },

    /// Rewind depth larger than any control can produce
    #[error("rewind depth {0} exceeds the deepest rewind level")]
    DepthOutOfRange(Depth),
}
