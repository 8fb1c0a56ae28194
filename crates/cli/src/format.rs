//! Clock state → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): `(0, "B") counters=(0, 1) cycles=0`
//! - **JSON** (`--json`): one compact JSON object per line

use clockrange_core::{ClockState, Error};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a clock state.
pub fn format_state(state: &ClockState, mode: OutputMode) -> anyhow::Result<String> {
    match mode {
        OutputMode::Human => Ok(state.to_string()),
        OutputMode::Json => Ok(serde_json::to_string(state)?),
    }
}

/// Format an integer result (length or tick count).
pub fn format_number(name: &str, value: u128, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => value.to_string(),
        OutputMode::Json => {
            // capacities past u64 do not fit a JSON number; keep them as text
            let number = u64::try_from(value)
                .map(serde_json::Value::from)
                .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
            let mut object = serde_json::Map::new();
            object.insert(name.to_string(), number);
            serde_json::Value::Object(object).to_string()
        }
    }
}

/// Format an error.
pub fn format_error(err: &anyhow::Error, mode: OutputMode) -> String {
    let kind = err
        .downcast_ref::<Error>()
        .map(error_kind)
        .unwrap_or("Error");
    match mode {
        OutputMode::Json => serde_json::json!({
            "error": kind,
            "message": format!("{:#}", err),
        })
        .to_string(),
        OutputMode::Human => format!("(error) {:#}", err),
    }
}

fn error_kind(err: &Error) -> &'static str {
    match err {
        Error::UnsupportedSpec { .. } => "UnsupportedSpec",
        Error::DegenerateBase { .. } => "DegenerateBase",
        Error::NegativeTicks { .. } => "NegativeTicks",
        Error::NegativeIndex { .. } => "NegativeIndex",
        Error::CounterOutOfRange { .. } => "CounterOutOfRange",
        Error::ArityMismatch { .. } => "ArityMismatch",
        Error::CapacityOverflow => "CapacityOverflow",
        Error::Overflow { .. } => "Overflow",
        Error::Io(_) => "Io",
        Error::Config { .. } => "Config",
    }
}
