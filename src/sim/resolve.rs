//! Tick resolution: which earlier tick an entity's state comes from
//!
//! A rewind of depth `d` recorded at tick `t` undoes the most recent stretch
//! of history that a depth-`d` rewind can see. Consecutive rewinds of the same
//! depth keep digging further back, a shallower tick closes one level, and a
//! deeper rewind nested inside the stretch is skipped as a whole by jumping to
//! its own origin.
//!
//! Entities immune up to `m` ignore any rewind with depth `<= m`, so the same
//! timeline resolves differently per immunity level.

use std::cmp::Ordering;

use super::timeline::TimelineLog;
use super::{Depth, Tick};

/// Resolve the originating tick for an entity with the given immunity.
///
/// Returns `tick` itself for a fresh tick (no rewind this entity can feel),
/// otherwise the earlier tick whose recorded state should be replayed. The
/// result is never greater than `tick`. Ticks outside the recorded timeline
/// resolve to themselves.
///
/// Recursion nests once per distinct depth level above `immunity`, and
/// `TimelineLog` caps depths at `MAX_REWIND_DEPTH`.
pub fn resolve(log: &TimelineLog, tick: Tick, immunity: Depth) -> Tick {
    let depths = log.depths();
    if tick == 0 || tick > log.len() {
        return tick;
    }

    let depth_at = |t: Tick| depths[(t - 1) as usize];
    let travel = depth_at(tick);
    if travel <= immunity {
        return tick;
    }

    let mut open = 1u32;
    let mut cursor = tick - 1;
    while open > 0 && cursor > 0 {
        match depth_at(cursor).cmp(&travel) {
            Ordering::Equal => {
                open += 1;
                cursor -= 1;
            }
            Ordering::Less => {
                open -= 1;
                cursor -= 1;
            }
            // Deeper rewind: each nested call handles a strictly deeper
            // level, so recursion is at most `MAX_REWIND_DEPTH` frames.
            Ordering::Greater => cursor = resolve(log, cursor, immunity),
        }
    }
    cursor
}

/// True when `tick` is a fresh tick for the given immunity
#[inline]
pub fn is_fresh(log: &TimelineLog, tick: Tick, immunity: Depth) -> bool {
    resolve(log, tick, immunity) == tick
}
