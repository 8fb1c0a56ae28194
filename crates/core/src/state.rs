//! Clock state snapshots
//!
//! [`CountState`] is the raw output of the odometer: one counter per digit
//! plus the number of full wraps. [`ClockState`] adds the rendered value of
//! every digit. Both are plain values with no tie to the clock that
//! produced them.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Read access to the counters and cycle count of a state
///
/// Reverse lookup only needs these two pieces, so it accepts anything
/// implementing this trait.
pub trait CountView {
    /// Per-digit counters, most significant first
    fn counters(&self) -> &[u64];

    /// Number of complete wraps of the whole clock
    fn cycles(&self) -> u64;
}

/// Raw per-digit counters plus wrap count
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountState {
    /// Per-digit counters, `counters[i]` in `[0, limits[i])`
    pub counters: Vec<u64>,
    /// Number of complete wraps
    pub cycles: u64,
}

impl CountState {
    /// Create a count state
    pub fn new(counters: Vec<u64>, cycles: u64) -> Self {
        Self { counters, cycles }
    }
}

impl CountView for CountState {
    fn counters(&self) -> &[u64] {
        &self.counters
    }

    fn cycles(&self) -> u64 {
        self.cycles
    }
}

impl fmt::Display for CountState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "counters=")?;
        write_tuple(f, &self.counters)?;
        write!(f, " cycles={}", self.cycles)
    }
}

/// Count state together with the rendered value of every digit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockState {
    /// Per-digit counters, most significant first
    pub counters: Vec<u64>,
    /// Number of complete wraps
    pub cycles: u64,
    /// Rendered value of every digit
    pub rendered: Vec<Value>,
}

impl ClockState {
    /// Combine a count state with its rendered values
    pub fn new(state: CountState, rendered: Vec<Value>) -> Self {
        Self {
            counters: state.counters,
            cycles: state.cycles,
            rendered,
        }
    }

    /// Drop the rendered values
    pub fn count_state(&self) -> CountState {
        CountState::new(self.counters.clone(), self.cycles)
    }
}

impl CountView for ClockState {
    fn counters(&self) -> &[u64] {
        &self.counters
    }

    fn cycles(&self) -> u64 {
        self.cycles
    }
}

impl From<ClockState> for CountState {
    fn from(state: ClockState) -> Self {
        CountState::new(state.counters, state.cycles)
    }
}

impl fmt::Display for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.rendered)?;
        write!(f, " counters=")?;
        write_tuple(f, &self.counters)?;
        write!(f, " cycles={}", self.cycles)
    }
}

fn write_tuple<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "(")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, ")")
}
