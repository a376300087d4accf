//! CLI module for lightswitch.
//!
//! This module contains all CLI logic kept out of main.rs so it can be
//! tested. The entry point `run_cli` is called from main.rs with parsed
//! arguments.

mod args;
mod commands;
mod output;

pub use args::{Args, Command, DEFAULT_SWEEP_MAX};
pub use commands::{execute_run, resolve_switch_count, run_cli, run_puzzle, verify_range};
pub use output::{
    format_run_report, format_sweep_summary, print_help, print_run_report, print_version,
    version_text,
};

use tracing_subscriber::EnvFilter;

/// Install the stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `debug` over `warn`.
/// Calling this twice is harmless: the second install is ignored.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests;
