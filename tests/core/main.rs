//! Integration tests for clockrange
//!
//! One module per concern:
//! - reference_behavior: concrete scenarios tick -> state
//! - properties: round-trip, wrap and bounds properties (proptest)
//! - iteration: lazy infinite sequences
//! - error_handling: every error kind surfaced through the public API
//! - configuration: TOML-described clocks

#[path = "../common/mod.rs"]
mod common;

mod configuration;
mod error_handling;
mod iteration;
