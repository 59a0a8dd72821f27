//! Per-entity, append-only state history (one entry per tick)

use serde::{Deserialize, Serialize};

use super::Tick;
use super::error::SimError;

/// Dense sequence `state[0..=tick]` for one entity.
///
/// Never empty: tick 0 holds the initial state. Only the newest slot may be
/// rewritten, and only while the step that created it is still running.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History<S> {
    states: Vec<S>,
}

impl<S: Clone> History<S> {
    /// History with `initial` recorded at tick 0
    pub fn new(initial: S) -> Self {
        Self::with_capacity(initial, 1)
    }

    /// Same as [`History::new`], preallocating room for `ticks` entries
    pub fn with_capacity(initial: S, ticks: usize) -> Self {
        let mut states = Vec::with_capacity(ticks.max(1));
        states.push(initial);
        Self { states }
    }

    /// State at `tick`, or `None` when that tick has not been written yet
    pub fn get(&self, tick: Tick) -> Option<&S> {
        usize::try_from(tick).ok().and_then(|i| self.states.get(i))
    }

    /// State at `tick`; the tick must already be recorded
    pub fn at(&self, tick: Tick) -> Result<&S, SimError> {
        self.get(tick).ok_or(SimError::HistoryOutOfRange {
            tick,
            last: self.last_tick(),
        })
    }

    /// Write the state for `tick`.
    ///
    /// `tick == last_tick() + 1` opens the slot for a new tick;
    /// `tick == last_tick()` replaces the slot of the tick being built.
    pub fn set(&mut self, tick: Tick, state: S) -> Result<(), SimError> {
        let next = self.len() as Tick;
        if tick == next {
            self.states.push(state);
            Ok(())
        } else if tick + 1 == next {
            if let Some(slot) = self.states.last_mut() {
                *slot = state;
            }
            Ok(())
        } else {
            Err(SimError::HistoryGap { tick, next })
        }
    }

    /// Number of recorded ticks, including tick 0
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Newest recorded tick
    pub fn last_tick(&self) -> Tick {
        self.states.len().saturating_sub(1) as Tick
    }

    /// Newest recorded state; `None` only for a history deserialized empty
    pub fn latest(&self) -> Option<&S> {
        self.states.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.states.iter()
    }
}
