//! Clap command tree definition.

use clap::{value_parser, Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("clockrange")
        .about("Clock-like periodic sequences over heterogeneous digits")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file describing the clock digits")
                .global(true),
        )
        .arg(
            Arg::new("digits")
                .long("digits")
                .short('d')
                .help("Clock digits as JSON, e.g. '[24,60,60]' or '[2,[\"A\",\"B\"]]'")
                .conflicts_with("config")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Log filter written to stderr (trace, debug, info, warn, error)")
                .default_value("warn")
                .value_parser(parse_log_filter)
                .global(true),
        )
        .subcommand(build_at())
        .subcommand(build_len())
        .subcommand(build_take())
        .subcommand(build_ticks())
}

/// Accept only filters `EnvFilter` can parse in full.
fn parse_log_filter(raw: &str) -> Result<String, String> {
    EnvFilter::try_new(raw)
        .map(|_| raw.to_string())
        .map_err(|e| format!("invalid log filter '{}': {}", raw, e))
}

fn build_at() -> Command {
    Command::new("at").about("Show the state after TICKS ticks").arg(
        Arg::new("ticks")
            .required(true)
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i64)),
    )
}

fn build_len() -> Command {
    Command::new("len").about("Show the number of states before the clock wraps")
}

fn build_take() -> Command {
    Command::new("take")
        .about("Show COUNT consecutive states")
        .arg(
            Arg::new("count")
                .required(true)
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .help("First tick (default: 0)")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
}

fn build_ticks() -> Command {
    Command::new("ticks")
        .about("Show the number of ticks needed to reach a state")
        .arg(
            Arg::new("cycles")
                .long("cycles")
                .help("Completed wraps (default: 0)")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("counters")
                .help("One counter per digit, most significant first")
                .num_args(0..)
                .value_parser(value_parser!(u64)),
        )
}
