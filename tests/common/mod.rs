//! Shared test utilities for integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

pub use clockrange::{
    ClockConfig, ClockRange, ClockState, CountState, CountView, DigitSpec, Error, Value,
};

/// Build a clock, panicking on invalid digits.
pub fn clock(specs: Vec<DigitSpec>) -> ClockRange {
    ClockRange::new(specs).expect("valid clock digits")
}

/// Clock made only of fixed bases.
pub fn fixed(bases: &[u64]) -> ClockRange {
    clock(bases.iter().copied().map(DigitSpec::fixed).collect())
}

/// 24h / 60m / 60s clock.
pub fn hms() -> ClockRange {
    fixed(&[24, 60, 60])
}

/// Shorthand for an integer rendered value.
pub fn int(i: i64) -> Value {
    Value::Int(i)
}

/// Shorthand for a string rendered value.
pub fn s(text: &str) -> Value {
    Value::from(text)
}

/// Full expected state in one call.
pub fn expected(counters: &[u64], cycles: u64, rendered: Vec<Value>) -> ClockState {
    ClockState::new(CountState::new(counters.to_vec(), cycles), rendered)
}

/// Ticks worth checking for a clock: both ends of every digit and of the
/// whole capacity, plus one wrap beyond.
pub fn boundary_ticks(clock: &ClockRange) -> Vec<i64> {
    let len = i64::try_from(clock.len()).expect("small test clock");
    let mut ticks = vec![0, len - 1, len, len + 1, 2 * len - 1, 2 * len];
    if let Some(&last) = clock.limits().last() {
        let last = last as i64;
        ticks.extend([last - 1, last, last + 1]);
    }
    ticks.retain(|&t| t >= 0);
    ticks.sort_unstable();
    ticks.dedup();
    ticks
}
