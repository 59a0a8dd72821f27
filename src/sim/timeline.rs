//! Append-only record of the rewind depth chosen at every tick

use serde::{Deserialize, Serialize};

use super::error::SimError;
use super::{Depth, Tick};
use crate::consts::MAX_REWIND_DEPTH;

/// One entry per simulated tick; entry `t` (1-based) is the rewind depth held
/// while tick `t` was produced. `0` means no rewind.
///
/// Every entry is at most `MAX_REWIND_DEPTH`, which keeps the resolver's
/// recursion shallow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Depth>", into = "Vec<Depth>")]
pub struct TimelineLog {
    depths: Vec<Depth>,
}

impl TimelineLog {
    pub fn new() -> Self {
        Self { depths: Vec::new() }
    }

    /// Preallocate room for `ticks` entries
    pub fn with_capacity(ticks: usize) -> Self {
        Self {
            depths: Vec::with_capacity(ticks),
        }
    }

    /// Record the depth for the next tick and return that tick.
    /// Depths above `MAX_REWIND_DEPTH` are rejected and nothing is recorded.
    pub fn append(&mut self, depth: Depth) -> Result<Tick, SimError> {
        check_depth(depth)?;
        self.depths.push(depth);
        Ok(self.len())
    }

    /// Depth recorded at `tick`, valid for `1..=current_tick()`
    pub fn read(&self, tick: Tick) -> Result<Depth, SimError> {
        if tick == 0 || tick > self.len() {
            return Err(SimError::TimelineOutOfRange {
                tick,
                len: self.len(),
            });
        }
        Ok(self.depths[(tick - 1) as usize])
    }

    /// Number of recorded ticks
    pub fn len(&self) -> Tick {
        self.depths.len() as Tick
    }

    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    /// The latest produced tick (equal to `len()`)
    pub fn current_tick(&self) -> Tick {
        self.len()
    }

    /// Raw entries; index `i` holds the depth of tick `i + 1`
    pub fn depths(&self) -> &[Depth] {
        &self.depths
    }
}

fn check_depth(depth: Depth) -> Result<(), SimError> {
    if depth > MAX_REWIND_DEPTH {
        return Err(SimError::DepthOutOfRange(depth));
    }
    Ok(())
}

impl TryFrom<Vec<Depth>> for TimelineLog {
    type Error = SimError;

    fn try_from(depths: Vec<Depth>) -> Result<Self, Self::Error> {
        depths.iter().try_for_each(|&d| check_depth(d))?;
        Ok(Self { depths })
    }
}

impl From<TimelineLog> for Vec<Depth> {
    fn from(log: TimelineLog) -> Self {
        log.depths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_returns_new_tick() {
        let mut log = TimelineLog::new();
        assert!(log.is_empty());
        assert_eq!(log.append(0), Ok(1));
        assert_eq!(log.append(2), Ok(2));
        assert_eq!(log.current_tick(), 2);
        assert_eq!(log.read(2), Ok(2));
    }

    #[test]
    fn test_read_out_of_range() {
        let log = TimelineLog::try_from(vec![0, 1, 0]).unwrap();
        assert_eq!(
            log.read(0),
            Err(SimError::TimelineOutOfRange { tick: 0, len: 3 })
        );
        assert_eq!(
            log.read(4),
            Err(SimError::TimelineOutOfRange { tick: 4, len: 3 })
        );
        assert_eq!(log.read(3), Ok(0));
    }

    #[test]
    fn test_append_rejects_excessive_depth() {
        let mut log = TimelineLog::new();
        assert_eq!(log.append(5), Err(SimError::DepthOutOfRange(5)));
        assert!(log.is_empty());
        assert_eq!(log.append(MAX_REWIND_DEPTH), Ok(1));
    }

    #[test]
    fn test_deep_descending_timeline_is_rejected() {
        // A strictly descending run of huge depths would nest the resolver
        // once per tick; such a log can't be built.
        let depths: Vec<Depth> = (1..=200_000).rev().collect();
        assert_eq!(
            TimelineLog::try_from(depths),
            Err(SimError::DepthOutOfRange(200_000))
        );
    }

    #[test]
    fn test_deserialize_validates_depths() {
        let log: TimelineLog = serde_json::from_str("[0, 3, 1]").unwrap();
        assert_eq!(log.depths(), &[0, 3, 1]);
        assert_eq!(serde_json::to_string(&log).unwrap(), "[0,3,1]");
        assert!(serde_json::from_str::<TimelineLog>("[0, 9]").is_err());
    }
}
