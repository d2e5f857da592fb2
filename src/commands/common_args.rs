// commands/common_args.rs

//! # Common Command Arguments
//!
//! Command-line arguments shared by the `logspec` subcommands.

use clap::{value_parser, Arg, ArgAction, ArgMatches};

use logspec::app::{DEFAULT_ENV_VAR, DEFAULT_OUTPUT_FORMAT};
use logspec::utils::display::OutputFormat;

// Positional arguments
/// Common positional argument for the level string
pub fn levels() -> Arg {
    Arg::new("levels")
        .required(true)
        .help("Level string, e.g. \"net=debug,db=warn,info\"")
}

// Optional arguments
/// Common argument for choosing the output format
pub fn format() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format")
        .value_parser(value_parser!(OutputFormat))
        .default_value(DEFAULT_OUTPUT_FORMAT)
        .action(ArgAction::Set)
}

/// Common argument for naming the environment variable to read
pub fn var() -> Arg {
    Arg::new("var")
        .long("var")
        .help("Environment variable holding the level string")
        .default_value(DEFAULT_ENV_VAR)
        .action(ArgAction::Set)
}

/// Common argument for specifying an environment file
pub fn env_file() -> Arg {
    Arg::new("env-file")
        .long("env-file")
        .help("Environment variables file consulted when the variable is not set")
        .action(ArgAction::Set)
}

/// Level string given on the command line, empty if missing.
pub fn levels_from_matches(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("levels")
        .map(String::as_str)
        .unwrap_or_default()
}

/// Output format given on the command line.
pub fn format_from_matches(matches: &ArgMatches) -> OutputFormat {
    matches
        .get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or(OutputFormat::Text)
}
