//! CLI argument parsing.
//!
//! Values are kept as raw strings here; turning them into a
//! [`SwitchCount`](crate::engine::SwitchCount) happens when the command runs
//! so that bad input is reported with the same error as every other path.

use std::path::PathBuf;

/// Largest switch count swept by `verify` unless `--max` is given.
pub const DEFAULT_SWEEP_MAX: usize = 2000;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run both algorithms for one switch count and print the board.
    Run {
        /// Switch count as typed (overrides the config file).
        switches: Option<String>,
        /// Optional YAML configuration file.
        config_path: Option<PathBuf>,
        /// Print the report as JSON instead of text.
        json: bool,
        /// Enable debug logging.
        verbose: bool,
    },
    /// Cross-check every switch count up to a maximum.
    Verify {
        /// Largest switch count as typed.
        max: Option<String>,
        /// Enable debug logging.
        verbose: bool,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Default for Command {
    fn default() -> Self {
        Self::Run {
            switches: None,
            config_path: None,
            json: false,
            verbose: false,
        }
    }
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// This method is testable as it accepts any iterator of strings,
    /// not just `std::env::args()`.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Whether debug logging was requested.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        match self.command {
            Command::Run { verbose, .. } | Command::Verify { verbose, .. } => verbose,
            Command::Help | Command::Version => false,
        }
    }

    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::default(),
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(&args[2..]),
            "verify" => Self::parse_verify_command(&args[2..]),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            // `lightswitch 20`, `lightswitch -2.5` and `lightswitch --json` are
            // shorthand for `run`, which rejects a malformed count
            first if Self::looks_like_run_argument(first) => {
                Self::parse_run_command(&args[1..])
            }
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    fn looks_like_run_argument(arg: &str) -> bool {
        arg.starts_with('-')
            || arg.starts_with(|c: char| c.is_ascii_digit() || c == '+' || c == '.')
    }

    fn parse_run_command(args: &[String]) -> Command {
        let mut switches = None;
        let mut config_path = None;
        let mut json = false;
        let mut verbose = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "-c" | "--config" => {
                    if i + 1 < args.len() {
                        config_path = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                    } else {
                        eprintln!("Warning: '--config' requires a file path");
                        i += 1;
                    }
                }
                "--json" => {
                    json = true;
                    i += 1;
                }
                "-v" | "--verbose" => {
                    verbose = true;
                    i += 1;
                }
                value => {
                    if switches.is_none() {
                        switches = Some(value.to_string());
                    }
                    i += 1;
                }
            }
        }

        Command::Run {
            switches,
            config_path,
            json,
            verbose,
        }
    }

    fn parse_verify_command(args: &[String]) -> Command {
        let mut max = None;
        let mut verbose = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--max" => {
                    if i + 1 < args.len() {
                        max = Some(args[i + 1].clone());
                        i += 2;
                    } else {
                        eprintln!("Warning: '--max' requires a switch count");
                        i += 1;
                    }
                }
                "-v" | "--verbose" => {
                    verbose = true;
                    i += 1;
                }
                value => {
                    // `verify 50` is the same as `verify --max 50`
                    if max.is_none() {
                        max = Some(value.to_string());
                    } else {
                        eprintln!("Warning: ignoring extra argument '{value}'");
                    }
                    i += 1;
                }
            }
        }

        Command::Verify { max, verbose }
    }
}
