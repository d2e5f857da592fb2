// commands/env.rs

//! # Env Command Module
//!
//! Reads the level string from an environment variable, or from a dotenv
//! file when the variable is not set, and prints the parsed levels.
//!
//! ## Example Usage
//! ```bash
//! LOGSPEC_LEVEL="net=debug,warn" ./logspec env
//! ./logspec env --var APP_LEVELS --env-file .env --format json
//! ```

use std::path::Path;

use clap::{ArgMatches, Command};
use log::debug;

use logspec::app::DEFAULT_ENV_VAR;
use logspec::cfg::env::{assignment_from, lookup};

use crate::commands::common_args::{env_file, format, format_from_matches, var};
use crate::commands::print_assignment;

/// Defines the `env` command for the CLI application.
pub fn command() -> Command {
    Command::new("env")
        .about("Print the levels configured through the environment")
        .arg(var())
        .arg(env_file())
        .arg(format())
}

/// Executes the `env` command.
pub fn execute(matches: &ArgMatches) {
    let var = matches
        .get_one::<String>("var")
        .map(String::as_str)
        .unwrap_or(DEFAULT_ENV_VAR);
    let env_file = matches.get_one::<String>("env-file").map(Path::new);

    debug!("Variable: {}", var);
    debug!("Environment File: {:?}", env_file);

    let text = lookup(var, env_file);
    print_assignment(&assignment_from(var, &text), format_from_matches(matches));
}
