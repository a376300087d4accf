//! CLI module tests.

use super::args::{Args, Command, DEFAULT_SWEEP_MAX};
use super::commands::{execute_run, resolve_switch_count, run_cli, run_puzzle, verify_range};
use super::output::{format_run_report, format_sweep_summary, version_text};
use crate::cross_check::{evaluate, run_cross_check, CrossCheckReport, SweepSummary};
use crate::engine::{OnSwitchSet, SwitchCount};
use crate::error::SwitchError;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

// ============================================================================
// Args parsing tests
// ============================================================================

#[test]
fn test_parse_no_args_runs_default() {
    let args = Args::parse_from(["lightswitch"]);
    assert_eq!(args.command, Command::default());
    assert!(!args.verbose());
}

#[test]
fn test_parse_help_variants() {
    for flag in ["-h", "--help", "help"] {
        let args = Args::parse_from(["lightswitch", flag]);
        assert_eq!(args.command, Command::Help, "flag {flag}");
    }
}

#[test]
fn test_parse_version_variants() {
    for flag in ["-V", "--version", "version"] {
        let args = Args::parse_from(["lightswitch", flag]);
        assert_eq!(args.command, Command::Version, "flag {flag}");
    }
}

#[test]
fn test_parse_unknown_command() {
    let args = Args::parse_from(["lightswitch", "toggle"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_run_with_count() {
    let args = Args::parse_from(["lightswitch", "run", "20"]);
    assert_eq!(
        args.command,
        Command::Run {
            switches: Some("20".to_string()),
            config_path: None,
            json: false,
            verbose: false,
        }
    );
}

#[test]
fn test_parse_run_all_options() {
    let args = Args::parse_from([
        "lightswitch",
        "run",
        "--config",
        "puzzle.yaml",
        "64",
        "--json",
        "-v",
    ]);
    assert!(args.verbose());
    match args.command {
        Command::Run {
            switches,
            config_path,
            json,
            verbose,
        } => {
            assert_eq!(switches.as_deref(), Some("64"));
            assert_eq!(config_path, Some(PathBuf::from("puzzle.yaml")));
            assert!(json);
            assert!(verbose);
        }
        other => panic!("Expected Run command, got {other:?}"),
    }
}

#[test]
fn test_parse_run_config_without_path() {
    let args = Args::parse_from(["lightswitch", "run", "--config"]);
    match args.command {
        Command::Run { config_path, .. } => assert_eq!(config_path, None),
        other => panic!("Expected Run command, got {other:?}"),
    }
}

#[test]
fn test_parse_bare_count_is_run() {
    let args = Args::parse_from(["lightswitch", "20"]);
    match args.command {
        Command::Run { switches, .. } => assert_eq!(switches.as_deref(), Some("20")),
        other => panic!("Expected Run command, got {other:?}"),
    }
}

#[test]
fn test_parse_bare_negative_count_is_run() {
    let args = Args::parse_from(["lightswitch", "-5"]);
    match args.command {
        Command::Run { switches, .. } => assert_eq!(switches.as_deref(), Some("-5")),
        other => panic!("Expected Run command, got {other:?}"),
    }
}

#[test]
fn test_parse_bare_non_integer_is_run() {
    for raw in ["1.5", "-2.5", "-x", "+3", ".5"] {
        let args = Args::parse_from(["lightswitch", raw]);
        match args.command {
            Command::Run { switches, .. } => assert_eq!(switches.as_deref(), Some(raw)),
            other => panic!("Expected Run command for {raw}, got {other:?}"),
        }
    }
}

#[test]
fn test_parse_bare_flag_is_run() {
    let args = Args::parse_from(["lightswitch", "--json"]);
    match args.command {
        Command::Run { json, switches, .. } => {
            assert!(json);
            assert_eq!(switches, None);
        }
        other => panic!("Expected Run command, got {other:?}"),
    }
}

#[test]
fn test_parse_verify_default() {
    let args = Args::parse_from(["lightswitch", "verify"]);
    assert_eq!(
        args.command,
        Command::Verify {
            max: None,
            verbose: false
        }
    );
}

#[test]
fn test_parse_verify_with_max() {
    let args = Args::parse_from(["lightswitch", "verify", "--max", "300", "--verbose"]);
    assert_eq!(
        args.command,
        Command::Verify {
            max: Some("300".to_string()),
            verbose: true
        }
    );
}

#[test]
fn test_parse_verify_positional_max() {
    let args = Args::parse_from(["lightswitch", "verify", "50"]);
    assert_eq!(
        args.command,
        Command::Verify {
            max: Some("50".to_string()),
            verbose: false
        }
    );
}

#[test]
fn test_parse_verify_flag_max_wins_over_later_positional() {
    let args = Args::parse_from(["lightswitch", "verify", "--max", "30", "50"]);
    match args.command {
        Command::Verify { max, .. } => assert_eq!(max.as_deref(), Some("30")),
        other => panic!("Expected Verify command, got {other:?}"),
    }
}

#[test]
fn test_parse_verify_max_without_value() {
    let args = Args::parse_from(["lightswitch", "verify", "--max"]);
    assert_eq!(
        args.command,
        Command::Verify {
            max: None,
            verbose: false
        }
    );
}

#[test]
fn test_default_sweep_max() {
    assert_eq!(DEFAULT_SWEEP_MAX, 2000);
}

// ============================================================================
// Switch count resolution tests
// ============================================================================

#[test]
fn test_resolve_default() {
    let n = resolve_switch_count(None, None).expect("default is valid");
    assert_eq!(n, SwitchCount::new(1000));
}

#[test]
fn test_resolve_argument() {
    let n = resolve_switch_count(Some("20"), None).expect("valid");
    assert_eq!(n, SwitchCount::new(20));
}

#[test]
fn test_resolve_negative_argument() {
    let err = resolve_switch_count(Some("-3"), None).unwrap_err();
    assert!(matches!(err, SwitchError::InvalidInput { .. }));
}

#[test]
fn test_resolve_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "switches: 81").expect("write");

    let n = resolve_switch_count(None, Some(file.path())).expect("valid");
    assert_eq!(n, SwitchCount::new(81));

    // Argument overrides the file
    let n = resolve_switch_count(Some("9"), Some(file.path())).expect("valid");
    assert_eq!(n, SwitchCount::new(9));
}

#[test]
fn test_resolve_missing_config_file() {
    let err = resolve_switch_count(None, Some(PathBuf::from("/nonexistent.yaml").as_path()))
        .unwrap_err();
    assert!(matches!(err, SwitchError::Io(_)));
}

// ============================================================================
// Command execution tests
// ============================================================================

#[test]
fn test_execute_run_twenty() {
    let (grid, report) = execute_run(SwitchCount::new(20)).expect("valid run");
    assert!(grid.ends_with("Rows: 5, Cols: 4\n"));
    assert_eq!(report.analyzed.as_slice(), &[1, 4, 9, 16]);
    assert!(report.verified());
}

#[test]
fn test_execute_run_zero_is_rejected() {
    let err = execute_run(SwitchCount::new(0)).unwrap_err();
    assert!(matches!(err, SwitchError::InvalidInput { .. }));
}

#[test]
fn test_run_puzzle_exit_codes() {
    assert_eq!(run_puzzle(Some("20"), None, false), ExitCode::SUCCESS);
    assert_eq!(run_puzzle(Some("20"), None, true), ExitCode::SUCCESS);
    assert_eq!(run_puzzle(Some("-1"), None, false), ExitCode::from(1));
    assert_eq!(run_puzzle(Some("0"), None, false), ExitCode::from(1));
    assert_eq!(run_puzzle(Some("many"), None, false), ExitCode::from(1));
}

#[test]
fn test_verify_range_exit_codes() {
    assert_eq!(verify_range(Some("50")), ExitCode::SUCCESS);
    assert_eq!(verify_range(Some("-50")), ExitCode::from(1));
}

#[test]
fn test_run_cli_help_and_version() {
    assert_eq!(run_cli(Args::parse_from(["lightswitch", "help"])), ExitCode::SUCCESS);
    assert_eq!(run_cli(Args::parse_from(["lightswitch", "version"])), ExitCode::SUCCESS);
}

#[test]
fn test_run_cli_non_integer_count_exits_nonzero() {
    assert_eq!(run_cli(Args::parse_from(["lightswitch", "-2.5"])), ExitCode::from(1));
    assert_eq!(run_cli(Args::parse_from(["lightswitch", "1.5"])), ExitCode::from(1));
    assert_eq!(run_cli(Args::parse_from(["lightswitch", "-x"])), ExitCode::from(1));
}

#[test]
fn test_run_cli_unknown_word_shows_help() {
    assert_eq!(run_cli(Args::parse_from(["lightswitch", "toggle"])), ExitCode::SUCCESS);
}

#[test]
fn test_run_cli_verify_positional_max() {
    assert_eq!(run_cli(Args::parse_from(["lightswitch", "verify", "50"])), ExitCode::SUCCESS);
    assert_eq!(run_cli(Args::parse_from(["lightswitch", "verify", "-50"])), ExitCode::from(1));
}

#[test]
fn test_run_cli_dispatches_run() {
    let args = Args::parse_from(["lightswitch", "run", "10"]);
    assert_eq!(run_cli(args), ExitCode::SUCCESS);
}

// ============================================================================
// Output formatting tests
// ============================================================================

#[test]
fn test_format_run_report_labels() {
    let report = run_cross_check(SwitchCount::new(20));
    let text = format_run_report(&report);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Experimental: [1, 4, 9, 16]");
    assert!(lines[1].starts_with("Time Exec: ") && lines[1].ends_with(" s"));
    assert_eq!(lines[2], "Theoretical: [1, 4, 9, 16]");
    assert!(lines[3].starts_with("Time Exec: "));
    assert!(lines[4].contains("both algorithms agree"));
}

#[test]
fn test_format_run_report_failure() {
    let n = SwitchCount::new(10);
    let simulated = OnSwitchSet::new(vec![1, 4, 9]);
    let analyzed = OnSwitchSet::new(vec![1, 4]);
    let report = CrossCheckReport {
        switches: n,
        criteria: evaluate(n, &simulated, &analyzed),
        simulated,
        simulation_secs: 0.001,
        analyzed,
        analysis_secs: 0.002,
    };

    let text = format_run_report(&report);
    assert!(text.contains("Time Exec: 0.001000 s"));
    assert!(text.contains("✗ Cross-check FAILED"));
    assert!(text.contains("LS-AGREE"));
    assert!(text.contains("LS-DIV-SQUARE"));
    assert!(!text.contains("LS-SIM-SQUARE"));
    assert!(text.contains("simulation found 3 switches on, divisor analysis found 2"));
}

#[test]
fn test_format_run_report_failure_when_algorithms_agree() {
    let n = SwitchCount::new(10);
    let wrong = OnSwitchSet::new(vec![1, 4, 8]);
    let report = CrossCheckReport {
        switches: n,
        criteria: evaluate(n, &wrong, &wrong),
        simulated: wrong.clone(),
        simulation_secs: 0.001,
        analyzed: wrong,
        analysis_secs: 0.002,
    };

    let text = format_run_report(&report);
    assert!(text.contains("✗ Cross-check FAILED"));
    assert!(!text.contains("LS-AGREE"));
    assert!(!text.contains("simulation found"));
}

#[test]
fn test_format_sweep_summary() {
    let summary = SweepSummary {
        checked: 2000,
        max: SwitchCount::new(2000),
    };
    let text = format_sweep_summary(&summary);
    assert!(text.contains("2000 switch counts"));
    assert!(text.contains("1..=2000"));
}

#[test]
fn test_version_text() {
    let text = version_text();
    // build.rs stamps LIGHTSWITCH_VERSION from the package version
    assert!(text.starts_with(&format!("lightswitch {}", env!("CARGO_PKG_VERSION"))));
}
