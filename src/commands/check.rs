// commands/check.rs

//! # Check Command Module
//!
//! Reports level keywords that are not recognised. Parsing itself never
//! rejects them (they fall back to `info`), so this is the place to catch
//! typos such as `warnn` or `err`.
//!
//! ## Example Usage
//! ```bash
//! ./logspec check "net=debgu,warn"
//! ```

use std::process;

use clap::{ArgMatches, Command};

use logspec::cfg::helpers::parse_with_report;
use logspec::utils::display::describe_unrecognized;
use logspec::{print_error, print_success};

use crate::commands::common_args::{levels, levels_from_matches};

/// Defines the `check` command for the CLI application.
pub fn command() -> Command {
    Command::new("check")
        .about("Report unknown level keywords; exits with 1 if any are found")
        .arg(levels())
}

/// Executes the `check` command.
pub fn execute(matches: &ArgMatches) {
    let (assignment, unrecognized) = parse_with_report(levels_from_matches(matches));

    if unrecognized.is_empty() {
        print_success!(
            "All levels recognised ({} logger override(s), default {})",
            assignment.levels.len(),
            assignment
                .default_level
                .map_or_else(|| "unchanged".to_string(), |level| level.to_string())
        );
        return;
    }

    for entry in &unrecognized {
        print_error!("{}", describe_unrecognized(entry));
    }
    process::exit(1);
}
