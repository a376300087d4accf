//! CLI output formatting.
//!
//! Formatting is separated from printing so the exact text can be tested.

use crate::cross_check::{CrossCheckReport, SweepSummary};

/// Version line, with the git hash when the build captured one.
#[must_use]
pub fn version_text() -> String {
    let version = option_env!("LIGHTSWITCH_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("lightswitch {version} ({hash})"),
        _ => format!("lightswitch {version}"),
    }
}

/// Print version information.
pub fn print_version() {
    println!("{}", version_text());
}

/// Print help message.
pub fn print_help() {
    println!(
        r"lightswitch - Light-switch toggling puzzle with an independent cross-check

USAGE:
    lightswitch [COMMAND] [OPTIONS]

COMMANDS:
    run [N]                     Toggle N switches through N passes (default)
        -c, --config <FILE>     Read the switch count from a YAML file
        --json                  Print the report as JSON
        -v, --verbose           Enable debug logging on stderr

    verify [M]                  Cross-check every switch count from 1 to M
        --max <M>               Same as the positional M (default: 2000)
        -v, --verbose           Enable debug logging on stderr

    help                        Show this help message
    version                     Show version information

The switch count defaults to 1000. A positional N overrides the config file.
Set RUST_LOG to control logging (e.g. RUST_LOG=lightswitch=debug).

EXAMPLES:
    lightswitch
    lightswitch run 20
    lightswitch run --config puzzle.yaml --json
    lightswitch verify --max 5000
"
    );
}

/// Labeled result lines printed under the grid.
///
/// ```text
/// Experimental: [1, 4, 9, 16]
/// Time Exec: 0.000004 s
/// Theoretical: [1, 4, 9, 16]
/// Time Exec: 0.000006 s
/// ✓ Cross-check: 4 switches on, both algorithms agree
/// ```
#[must_use]
pub fn format_run_report(report: &CrossCheckReport) -> String {
    let mut lines = vec![
        format!("Experimental: {}", report.simulated),
        format!("Time Exec: {:.6} s", report.simulation_secs),
        format!("Theoretical: {}", report.analyzed),
        format!("Time Exec: {:.6} s", report.analysis_secs),
    ];

    if report.verified() {
        lines.push(format!(
            "✓ Cross-check: {} switches on, both algorithms agree",
            report.analyzed.len()
        ));
    } else {
        lines.push("✗ Cross-check FAILED".to_string());
        if !report.algorithms_agree() {
            lines.push(format!(
                "  simulation found {} switches on, divisor analysis found {}",
                report.simulated.len(),
                report.analyzed.len()
            ));
        }
        for crit in report.criteria.iter().filter(|c| !c.passed) {
            lines.push(format!("  ✗ {}: {}", crit.id, crit.name));
        }
    }

    lines.join("\n")
}

/// Print the grid followed by the labeled results.
pub fn print_run_report(grid: &str, report: &CrossCheckReport) {
    print!("{grid}");
    println!("{}", format_run_report(report));
}

/// One-line summary of a successful sweep.
#[must_use]
pub fn format_sweep_summary(summary: &SweepSummary) -> String {
    format!(
        "✓ Verified {} switch counts (1..={}): simulation, divisor analysis and perfect squares agree",
        summary.checked, summary.max
    )
}
