//! Mixed-radix tick arithmetic
//!
//! Converts an absolute tick count into one counter per digit plus a
//! cycle count, and back. Digit 0 is the most significant. The cycle count
//! acts as an extra, unbounded digit in front of digit 0 whose weight is the
//! full capacity of the clock.
//!
//! ## Invariants
//!
//! - `recompose(limits, &decompose(limits, t)?)? == t` for every `t >= 0`
//! - For `t < capacity`, `cycles == 0`
//! - `decompose(limits, t + capacity)` has the same counters as
//!   `decompose(limits, t)` and one more cycle
//!
//! Both directions are O(N) in the number of digits.

use crate::error::{Error, Result};
use crate::state::{CountState, CountView};

/// Product of all limits; `1` for no limits
///
/// # Errors
///
/// `CapacityOverflow` if the product does not fit in `u128`.
pub fn capacity(limits: &[u64]) -> Result<u128> {
    limits.iter().try_fold(1u128, |acc, &limit| {
        acc.checked_mul(limit as u128)
            .ok_or(Error::CapacityOverflow)
    })
}

/// Split `ticks` into per-digit counters and a cycle count
///
/// The least significant counter is whatever remains after every coarser
/// digit took its share. With no limits at all the capacity is 1, so every
/// tick is a full cycle and the counters are empty.
///
/// # Errors
///
/// - `NegativeTicks` if `ticks < 0`
/// - `DegenerateBase` if any limit is zero
/// - `CapacityOverflow` if the product of limits does not fit in `u128`
pub fn decompose(limits: &[u64], ticks: i64) -> Result<CountState> {
    if ticks < 0 {
        return Err(Error::NegativeTicks { ticks });
    }
    if let Some(position) = limits.iter().position(|&limit| limit == 0) {
        return Err(Error::DegenerateBase { position, limit: 0 });
    }

    let mut capacity = capacity(limits)?;
    let mut remaining = ticks as u128;

    let cycles = remaining / capacity;
    remaining %= capacity;

    let mut counters = Vec::with_capacity(limits.len());
    if let Some((_, leading)) = limits.split_last() {
        for &limit in leading {
            capacity /= limit as u128;
            // remaining < capacity * limit, so the quotient is below limit
            counters.push((remaining / capacity) as u64);
            remaining %= capacity;
        }
        counters.push(remaining as u64);
    }

    Ok(CountState {
        counters,
        // ticks <= i64::MAX and capacity >= 1
        cycles: cycles as u64,
    })
}

/// Inverse of [`decompose`]
///
/// Weighs the cycle count by the full capacity, each counter by the
/// capacity of the digits after it, and adds the least significant counter
/// as is.
///
/// # Errors
///
/// - `ArityMismatch` if the state does not have one counter per limit
/// - `CounterOutOfRange` if any counter is not below its limit
/// - `Overflow` if the tick count does not fit in `i64`
pub fn recompose<S: CountView + ?Sized>(limits: &[u64], state: &S) -> Result<i64> {
    let counters = state.counters();
    if counters.len() != limits.len() {
        return Err(Error::ArityMismatch {
            expected: limits.len(),
            actual: counters.len(),
        });
    }
    for (position, (&counter, &limit)) in counters.iter().zip(limits).enumerate() {
        if counter >= limit {
            return Err(Error::CounterOutOfRange {
                position,
                counter,
                limit,
            });
        }
    }

    let mut capacity = capacity(limits)?;
    let overflow = || Error::overflow(format!("state with {} cycles", state.cycles()));

    let mut ticks = (state.cycles() as u128)
        .checked_mul(capacity)
        .ok_or_else(overflow)?;

    if let Some((&last, leading)) = counters.split_last() {
        let mut within = 0u128;
        for (&counter, &limit) in leading.iter().zip(limits) {
            capacity /= limit as u128;
            within += counter as u128 * capacity;
        }
        within += last as u128;
        ticks = ticks.checked_add(within).ok_or_else(overflow)?;
    }

    i64::try_from(ticks).map_err(|_| overflow())
}
