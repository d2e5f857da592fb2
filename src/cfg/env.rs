// cfg/env.rs

//! # Environment Level Loading
//!
//! Reads a level string from the environment (and optionally a dotenv
//! file), parses it and hands the result to a `LevelSink`.
//!
//! ## Example Usage
//! ```rust,no_run
//! use logspec::cfg::env::load_levels;
//! use logspec::registry;
//!
//! // LOGSPEC_LEVEL="net=debug,warn"
//! load_levels(&mut registry::global());
//! ```

use std::path::Path;

use log::{debug, warn};

use crate::app::DEFAULT_ENV_VAR;
use crate::cfg::helpers::{parse_with_report, LevelAssignment};
use crate::registry::LevelSink;

/// Loads levels from `LOGSPEC_LEVEL` into `sink`.
pub fn load_levels<S: LevelSink + ?Sized>(sink: &mut S) {
    load_levels_from(DEFAULT_ENV_VAR, sink);
}

/// Loads levels from the environment variable `var` into `sink`.
///
/// An unset variable counts as an empty string, which applies an empty
/// assignment.
pub fn load_levels_from<S: LevelSink + ?Sized>(var: &str, sink: &mut S) {
    let assignment = assignment_from(var, &read_env_var(var));
    sink.apply_levels(assignment);
}

/// Reads `var` from the process environment, falling back to `env_file`.
/// Returns an empty string when neither has it.
pub fn lookup(var: &str, env_file: Option<&Path>) -> String {
    if std::env::var_os(var).is_some() {
        return read_env_var(var);
    }
    env_file
        .and_then(|path| read_env_file_var(path, var))
        .unwrap_or_default()
}

/// Reads `var` from a dotenv file. A missing or unreadable file counts as
/// not having the variable.
pub fn read_env_file_var(path: &Path, var: &str) -> Option<String> {
    if !path.exists() {
        debug!("No .env file found at: {}", path.display());
        return None;
    }

    debug!("Loading environment variables from: {}", path.display());
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) => {
            debug!("Warning: could not load .env file: {}", e);
            return None;
        }
    };

    // Later definitions override earlier ones, as when sourcing the file.
    let mut found = None;
    for item in iter {
        match item {
            Ok((key, value)) if key == var => found = Some(value),
            Ok(_) => {}
            Err(e) => debug!("Skipping malformed line in {}: {}", path.display(), e),
        }
    }
    found
}

/// Parses `text` read from `source`, logging every keyword that fell back.
pub fn assignment_from(source: &str, text: &str) -> LevelAssignment {
    let (assignment, unrecognized) = parse_with_report(text);
    for entry in &unrecognized {
        warn!(
            "{}: unknown level '{}' for logger '{}', using {}",
            source, entry.value, entry.name, entry.resolved
        );
    }
    debug!(
        "{}: {} logger override(s), default level {:?}",
        source,
        assignment.levels.len(),
        assignment.default_level
    );
    assignment
}

// Non-UTF-8 bytes are replaced rather than treated as an unset variable.
fn read_env_var(var: &str) -> String {
    match std::env::var_os(var) {
        Some(value) => value.to_string_lossy().into_owned(),
        None => {
            debug!("{} is not set", var);
            String::new()
        }
    }
}
