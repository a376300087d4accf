//! CLI command handlers.
//!
//! Each handler validates its input before any computation starts, prints
//! results to stdout, diagnostics to stderr, and maps the outcome to an
//! exit code.

use std::path::Path;
use std::process::ExitCode;

use tracing::{debug, info};

use super::args::DEFAULT_SWEEP_MAX;
use super::output::{format_sweep_summary, print_help, print_run_report, print_version};
use super::{Args, Command};
use crate::config::PuzzleConfig;
use crate::cross_check::{run_cross_check, sweep, CrossCheckReport};
use crate::engine::SwitchCount;
use crate::error::{SwitchError, SwitchResult};
use crate::renderers::{render, GridLayout};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run {
            switches,
            config_path,
            json,
            ..
        } => run_puzzle(switches.as_deref(), config_path.as_deref(), json),
        Command::Verify { max, .. } => verify_range(max.as_deref()),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

fn exit_with(result: SwitchResult<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if e.is_input_error() {
                eprintln!("Run 'lightswitch help' for usage.");
            }
            ExitCode::from(1)
        }
    }
}

/// Work out the switch count for a run.
///
/// Precedence: explicit argument, then config file, then the default.
///
/// # Errors
///
/// Returns an error if the argument is not a non-negative integer or the
/// config file cannot be loaded.
pub fn resolve_switch_count(
    switches: Option<&str>,
    config_path: Option<&Path>,
) -> SwitchResult<SwitchCount> {
    if let Some(raw) = switches {
        return raw.parse();
    }
    let config = match config_path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            PuzzleConfig::load(path)?
        }
        None => PuzzleConfig::default(),
    };
    config.switch_count()
}

/// Validate, run and cross-check one board, returning the grid text and the
/// report.
///
/// # Errors
///
/// Returns [`SwitchError::InvalidInput`] for an empty board before anything
/// is computed.
pub fn execute_run(n: SwitchCount) -> SwitchResult<(String, CrossCheckReport)> {
    // An empty board has no grid; reject it before either algorithm runs
    GridLayout::for_switches(n)?;

    let report = run_cross_check(n);
    let grid = render(n, &report.analyzed)?;
    info!(
        switches = n.get(),
        on = report.analyzed.len(),
        verified = report.verified(),
        "run complete"
    );
    Ok((grid, report))
}

/// Run the puzzle and print the board, both results and their timings.
#[must_use]
pub fn run_puzzle(switches: Option<&str>, config_path: Option<&Path>, json: bool) -> ExitCode {
    exit_with(try_run_puzzle(switches, config_path, json))
}

fn try_run_puzzle(
    switches: Option<&str>,
    config_path: Option<&Path>,
    json: bool,
) -> SwitchResult<()> {
    let n = resolve_switch_count(switches, config_path)?;
    let (grid, report) = execute_run(n)?;

    if json {
        let text = serde_json::to_string_pretty(&report)
            .map_err(|e| SwitchError::serialization(e.to_string()))?;
        println!("{text}");
    } else {
        print_run_report(&grid, &report);
    }

    report.verify()
}

/// Cross-check every switch count from 1 to `max`.
#[must_use]
pub fn verify_range(max: Option<&str>) -> ExitCode {
    exit_with(try_verify_range(max))
}

fn try_verify_range(max: Option<&str>) -> SwitchResult<()> {
    let max = match max {
        Some(raw) => raw.parse()?,
        None => SwitchCount::new(DEFAULT_SWEEP_MAX),
    };
    let summary = sweep(max)?;
    println!("{}", format_sweep_summary(&summary));
    Ok(())
}
