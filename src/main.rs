// main.rs

//! # logspec - Main Entry Point
//!
//! Command-line front end for inspecting level strings.
//!
//! ## Global Arguments
//!
//! - `--log-level` - The logging level of the tool itself (default: `info`).
//!   Per-module overrides are read from `LOGSPEC_LEVEL`.
//!
//! ## Example Usage
//! ```bash
//! ./logspec parse "net=debug,db=warn,info"
//! LOGSPEC_LEVEL="net=debug" ./logspec env --format json
//! ./logspec check "net=debgu"
//! ```

mod commands;

use std::process;

use clap::{Arg, ArgAction, Command};
use log::debug;

use logspec::app::{APP_DESCRIPTION, APP_NAME, APP_VERSION, DEFAULT_LOG_LEVEL};
use logspec::level::Level;
use logspec::print_error;
use logspec::utils::logging::initialize_logger;

/// Builds the command-line definition.
fn cli() -> Command {
    Command::new(APP_NAME)
        .version(APP_VERSION)
        .about(APP_DESCRIPTION)
        // ====================
        // Global Flags
        // ====================
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Set the logging level")
                .global(true)
                .value_parser(clap::builder::PossibleValuesParser::new(Level::keywords()))
                .ignore_case(true)
                .default_value(DEFAULT_LOG_LEVEL)
                .action(ArgAction::Set),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        // ====================
        // Subcommand Definitions
        // ====================
        .subcommand(commands::parse::command())
        .subcommand(commands::env::command())
        .subcommand(commands::check::command())
}

/// Main function that initializes the CLI and handles command execution.
fn main() {
    let matches = cli().get_matches();

    // ====================
    // Initialize Logger
    // ====================
    let log_level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or(DEFAULT_LOG_LEVEL);
    if let Err(e) = initialize_logger(log_level) {
        print_error!("{}", e);
        process::exit(1);
    }

    debug!("Logger initialized with level: {}", log_level);

    // ====================
    // Command Execution
    // ====================
    match matches.subcommand() {
        Some(("parse", sub_matches)) => commands::parse::execute(sub_matches),
        Some(("env", sub_matches)) => commands::env::execute(sub_matches),
        Some(("check", sub_matches)) => commands::check::execute(sub_matches),
        _ => {
            print_error!("Unknown command. Use --help for usage.");
            process::exit(1);
        }
    }
}
