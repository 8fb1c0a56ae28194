//! Clock ranges
//!
//! A [`ClockRange`] owns an ordered list of digit specifications and maps
//! tick counts to fully rendered [`ClockState`]s and back.
//!
//! # Example
//!
//! ```
//! use clockrange_core::{ClockRange, DigitSpec};
//!
//! let clock = ClockRange::new(vec![
//!     DigitSpec::fixed(24),
//!     DigitSpec::fixed(60),
//!     DigitSpec::fixed(60),
//! ])?;
//!
//! assert_eq!(clock.at(60)?.counters, vec![0, 1, 0]);
//! assert_eq!(clock.at(86_400)?.cycles, 1);
//! # Ok::<(), clockrange_core::Error>(())
//! ```

use crate::config::ClockConfig;
use crate::error::{Error, Result};
use crate::odometer;
use crate::spec::{self, DigitSpec};
use crate::state::{ClockState, CountState, CountView};
use std::iter::FusedIterator;
use tracing::debug;

/// Periodic, clock-like sequence over heterogeneous digits
///
/// Immutable after construction; shareable across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockRange {
    specs: Vec<DigitSpec>,
    limits: Vec<u64>,
    capacity: u128,
}

impl ClockRange {
    /// Build a clock from its digits, most significant first
    ///
    /// # Errors
    ///
    /// - `UnsupportedSpec` for a range with a zero step
    /// - `DegenerateBase` for a digit without any state
    /// - `CapacityOverflow` if the product of limits exceeds `u128`
    pub fn new(specs: Vec<DigitSpec>) -> Result<Self> {
        let limits = spec::limits_of(&specs)?;
        let capacity = odometer::capacity(&limits)?;
        debug!(digits = limits.len(), capacity = %capacity, "Built clock range");
        Ok(Self {
            specs,
            limits,
            capacity,
        })
    }

    /// Build a clock from a loaded configuration
    pub fn from_config(config: &ClockConfig) -> Result<Self> {
        config.build()
    }

    /// Digit specifications, most significant first
    pub fn specs(&self) -> &[DigitSpec] {
        &self.specs
    }

    /// Limit of every digit, most significant first
    pub fn limits(&self) -> &[u64] {
        &self.limits
    }

    /// Number of digits
    pub fn arity(&self) -> usize {
        self.limits.len()
    }

    /// Number of distinct states before the clock wraps
    pub fn capacity(&self) -> u128 {
        self.capacity
    }

    /// Same as [`capacity`](Self::capacity); `1` for a clock without digits
    pub fn len(&self) -> u128 {
        self.capacity
    }

    /// Always false: even a clock without digits has one state
    pub fn is_empty(&self) -> bool {
        false
    }

    /// State reached after `index` ticks
    ///
    /// # Errors
    ///
    /// `NegativeIndex` if `index < 0`.
    pub fn at(&self, index: i64) -> Result<ClockState> {
        if index < 0 {
            return Err(Error::NegativeIndex { index });
        }
        let count = odometer::decompose(&self.limits, index)?;
        self.render(count)
    }

    /// Render every counter of a count state
    ///
    /// # Errors
    ///
    /// `ArityMismatch` or `CounterOutOfRange` if the state does not fit this clock.
    pub fn render(&self, count: CountState) -> Result<ClockState> {
        if count.counters.len() != self.specs.len() {
            return Err(Error::ArityMismatch {
                expected: self.specs.len(),
                actual: count.counters.len(),
            });
        }
        let rendered = self
            .specs
            .iter()
            .zip(&count.counters)
            .enumerate()
            .map(|(position, (spec, &counter))| spec::render_at(position, spec, counter))
            .collect::<Result<Vec<_>>>()?;
        Ok(ClockState::new(count, rendered))
    }

    /// Ticks needed to reach `state`
    ///
    /// Only counters and cycles are read; rendered values are ignored.
    pub fn ticks_for<S: CountView + ?Sized>(&self, state: &S) -> Result<i64> {
        odometer::recompose(&self.limits, state)
    }

    /// Endless sequence of states starting at tick 0
    ///
    /// Every call starts over; tickers never share a cursor.
    pub fn iter(&self) -> Ticker<'_> {
        Ticker {
            clock: self,
            next: Some(0),
        }
    }

    /// Endless sequence of states starting at tick `start`
    ///
    /// # Errors
    ///
    /// `NegativeIndex` if `start < 0`.
    pub fn iter_from(&self, start: i64) -> Result<Ticker<'_>> {
        if start < 0 {
            return Err(Error::NegativeIndex { index: start });
        }
        Ok(Ticker {
            clock: self,
            next: Some(start),
        })
    }
}

impl<'a> IntoIterator for &'a ClockRange {
    type Item = ClockState;
    type IntoIter = Ticker<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the states of a [`ClockRange`], one tick at a time
///
/// Never ends on its own, except when the tick counter would pass `i64::MAX`.
#[derive(Debug, Clone)]
pub struct Ticker<'a> {
    clock: &'a ClockRange,
    next: Option<i64>,
}

impl Ticker<'_> {
    /// Tick the next call to `next` will produce
    pub fn position(&self) -> Option<i64> {
        self.next
    }
}

impl Iterator for Ticker<'_> {
    type Item = ClockState;

    fn next(&mut self) -> Option<ClockState> {
        let ticks = self.next?;
        // `iter_from` rejected negative starts and `new` validated every
        // limit, so `at` has no error left to report for this tick.
        let state = self.clock.at(ticks).ok()?;
        self.next = ticks.checked_add(1);
        Some(state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(_) => (usize::MAX, None),
            None => (0, Some(0)),
        }
    }

    fn nth(&mut self, n: usize) -> Option<ClockState> {
        let skip = i64::try_from(n).ok();
        self.next = match (self.next, skip) {
            (Some(ticks), Some(skip)) => ticks.checked_add(skip),
            _ => None,
        };
        self.next()
    }
}

impl FusedIterator for Ticker<'_> {}
