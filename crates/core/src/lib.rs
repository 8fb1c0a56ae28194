//! Core types and operations for clockrange
//!
//! This crate maps tick counts onto clock-like, mixed-radix states:
//! - DigitSpec: one digit of a clock (fixed base, symbol list or range)
//! - odometer: tick <-> counters arithmetic over heterogeneous bases
//! - CountState / ClockState: snapshots produced by the odometer
//! - ClockRange: digits + odometer + rendering behind one handle
//! - ClockConfig: TOML description of a clock
//! - Value: heterogeneous rendered value type
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod config;
pub mod error;
pub mod odometer;
pub mod spec;
pub mod state;
pub mod value;

pub use clock::{ClockRange, Ticker};
pub use config::{ClockConfig, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use odometer::{capacity, decompose, recompose};
pub use spec::{limit_of, limits_of, render, DigitSpec};
pub use state::{ClockState, CountState, CountView};
pub use value::Value;
