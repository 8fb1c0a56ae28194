//! clockrange - clock-like periodic sequences over heterogeneous digits
//!
//! A clock is an ordered list of digits, most significant first. Each digit
//! is a fixed base, an explicit list of symbols, or an integer range with a
//! stride. Any non-negative tick count maps to one counter per digit plus
//! the number of times the whole clock wrapped, and back.
//!
//! # Quick Start
//!
//! ```
//! use clockrange::{ClockRange, DigitSpec, Value};
//!
//! let clock = ClockRange::new(vec![DigitSpec::fixed(2), DigitSpec::symbols(["A", "B"])])?;
//!
//! let state = clock.at(3)?;
//! assert_eq!(state.rendered, vec![Value::Int(1), Value::from("B")]);
//! assert_eq!(clock.ticks_for(&state)?, 3);
//! # Ok::<(), clockrange::Error>(())
//! ```
//!
//! # Architecture
//!
//! All functionality lives in `clockrange-core`; this crate re-exports it.

pub use clockrange_core::*;
