//! Error types for clock ranges
//!
//! This module defines all error types used throughout the crate.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for clock range operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for digit resolution, tick arithmetic and configuration
#[derive(Debug, Error)]
pub enum Error {
    /// Digit specification is not a fixed base, a symbol list or a range
    #[error("unsupported digit spec: {reason}")]
    UnsupportedSpec {
        /// What was wrong with the spec
        reason: String,
    },

    /// Digit specification yields no states at all
    #[error("degenerate base at position {position}: limit {limit}")]
    DegenerateBase {
        /// Digit position, most significant first
        position: usize,
        /// The limit the spec resolved to
        limit: i128,
    },

    /// Tick count below zero handed to the odometer
    #[error("ticks must be >= 0, got {ticks}")]
    NegativeTicks {
        /// Requested tick count
        ticks: i64,
    },

    /// Index below zero handed to a clock range
    #[error("index must be >= 0, got {index}")]
    NegativeIndex {
        /// Requested index
        index: i64,
    },

    /// Counter outside `[0, limit)` for its position
    #[error("counter {counter} out of range at position {position} (limit {limit})")]
    CounterOutOfRange {
        /// Digit position, most significant first
        position: usize,
        /// Offending counter
        counter: u64,
        /// Limit at that position
        limit: u64,
    },

    /// State does not have one counter per digit
    #[error("arity mismatch: expected {expected} counters, got {actual}")]
    ArityMismatch {
        /// Number of digits of the clock
        expected: usize,
        /// Number of counters supplied
        actual: usize,
    },

    /// Product of all limits does not fit in 128 bits
    #[error("capacity overflow: product of limits exceeds u128")]
    CapacityOverflow,

    /// Arithmetic result does not fit its integer type
    #[error("overflow: {reason}")]
    Overflow {
        /// What overflowed
        reason: String,
    },

    /// I/O error while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration could not be parsed
    #[error("config error: {reason}")]
    Config {
        /// Parser message
        reason: String,
    },
}

impl Error {
    /// Build an `UnsupportedSpec` error
    pub fn unsupported_spec(reason: impl Into<String>) -> Self {
        Error::UnsupportedSpec {
            reason: reason.into(),
        }
    }

    /// Build an `Overflow` error
    pub fn overflow(reason: impl Into<String>) -> Self {
        Error::Overflow {
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config {
            reason: e.to_string(),
        }
    }
}
