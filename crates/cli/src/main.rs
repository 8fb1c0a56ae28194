//! clockrange CLI — query clock-like sequences from the shell.
//!
//! Without a subcommand the binary prints nothing and exits 0.
//! - `clockrange --digits '[24,60,60]' at 86400`
//! - `clockrange --config clock.toml take 5 --from 58`
//! - `clockrange --digits '[4,10]' ticks --cycles 3 2 2`

mod commands;
mod format;
mod parse;

use std::process;

use anyhow::Result;
use clap::ArgMatches;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_number, format_state, OutputMode};
use parse::{clock_from_matches, matches_to_action, CliAction};

fn main() {
    let matches = build_cli().get_matches();

    let log_level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or("warn");
    // validated by the `--log-level` value parser
    let filter = EnvFilter::new(log_level);
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match run(&matches, mode) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            process::exit(1);
        }
    }
}

/// Execute the requested subcommand and return the lines to print.
fn run(matches: &ArgMatches, mode: OutputMode) -> Result<Vec<String>> {
    let action = match matches_to_action(matches)? {
        Some(action) => action,
        None => return Ok(Vec::new()),
    };
    let clock = clock_from_matches(matches)?;

    let lines = match action {
        CliAction::At { ticks } => vec![format_state(&clock.at(ticks)?, mode)?],
        CliAction::Len => vec![format_number("len", clock.len(), mode)],
        CliAction::Take { from, count } => clock
            .iter_from(from)?
            .take(usize::try_from(count)?)
            .map(|state| format_state(&state, mode))
            .collect::<Result<_>>()?,
        CliAction::Ticks { state } => {
            let ticks = clock.ticks_for(&state)?;
            vec![format_number("ticks", ticks as u128, mode)]
        }
    };
    Ok(lines)
}
