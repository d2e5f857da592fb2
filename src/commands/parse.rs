// commands/parse.rs

//! # Parse Command Module
//!
//! Parses a level string given on the command line and prints the result.
//!
//! ## Example Usage
//! ```bash
//! ./logspec parse "net=debug, db=warn, info"
//! ./logspec parse "net=debug" --format json
//! ```

use clap::{ArgMatches, Command};
use log::debug;

use logspec::cfg::helpers::parse;

use crate::commands::common_args::{format, format_from_matches, levels, levels_from_matches};
use crate::commands::print_assignment;

/// Defines the `parse` command for the CLI application.
pub fn command() -> Command {
    Command::new("parse")
        .about("Parse a level string and print the resulting levels")
        .arg(levels())
        .arg(format())
}

/// Executes the `parse` command.
pub fn execute(matches: &ArgMatches) {
    let input = levels_from_matches(matches);
    debug!("Parsing level string: {:?}", input);

    print_assignment(&parse(input), format_from_matches(matches));
}
