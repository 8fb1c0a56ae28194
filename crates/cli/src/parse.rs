//! ArgMatches → clock + action conversion.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use clockrange_core::{ClockConfig, ClockRange, CountState, DigitSpec};

/// The result of parsing a subcommand.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Render the state at a tick.
    At { ticks: i64 },
    /// Print the capacity.
    Len,
    /// Render consecutive states.
    Take { from: i64, count: u64 },
    /// Reverse lookup of a state.
    Ticks { state: CountState },
}

/// Translate the subcommand into a `CliAction`.
pub fn matches_to_action(matches: &ArgMatches) -> Result<Option<CliAction>> {
    let action = match matches.subcommand() {
        None => return Ok(None),
        Some(("at", sub)) => CliAction::At {
            ticks: *sub
                .get_one::<i64>("ticks")
                .ok_or_else(|| anyhow!("missing TICKS"))?,
        },
        Some(("len", _)) => CliAction::Len,
        Some(("take", sub)) => CliAction::Take {
            from: sub.get_one::<i64>("from").copied().unwrap_or(0),
            count: *sub
                .get_one::<u64>("count")
                .ok_or_else(|| anyhow!("missing COUNT"))?,
        },
        Some(("ticks", sub)) => CliAction::Ticks {
            state: CountState::new(
                sub.get_many::<u64>("counters")
                    .map(|values| values.copied().collect())
                    .unwrap_or_default(),
                sub.get_one::<u64>("cycles").copied().unwrap_or(0),
            ),
        },
        Some((other, _)) => return Err(anyhow!("unknown command '{}'", other)),
    };
    Ok(Some(action))
}

/// Build the clock from `--config` or `--digits`.
pub fn clock_from_matches(matches: &ArgMatches) -> Result<ClockRange> {
    if let Some(path) = matches.get_one::<String>("config") {
        let config = ClockConfig::from_file(Path::new(path))?;
        return Ok(config.build()?);
    }
    let raw = matches
        .get_one::<String>("digits")
        .ok_or_else(|| anyhow!("no clock given: pass --config <FILE> or --digits <JSON>"))?;
    parse_digits(raw)
}

/// Parse a JSON array of digit specs.
pub fn parse_digits(raw: &str) -> Result<ClockRange> {
    let json: serde_json::Value =
        serde_json::from_str(raw).with_context(|| format!("invalid digits JSON '{}'", raw))?;
    let entries = json
        .as_array()
        .ok_or_else(|| anyhow!("digits must be a JSON array, got {}", json))?;
    let specs = entries
        .iter()
        .map(DigitSpec::from_json)
        .collect::<clockrange_core::Result<Vec<_>>>()?;
    Ok(ClockRange::new(specs)?)
}
