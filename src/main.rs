//! lightswitch CLI - light-switch toggling puzzle
//!
//! Command-line interface for running and cross-checking the puzzle.

use std::process::ExitCode;

use lightswitch::cli::{init_tracing, run_cli, Args};

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose());
    run_cli(args)
}
