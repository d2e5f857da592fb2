// utils/display.rs

//! # Display Utility Module
//!
//! Color-coded output for the CLI and rendering of level assignments as
//! text or JSON.
//!
//! ## Example Usage
//! ```rust
//! use logspec::cfg::helpers::parse;
//! use logspec::utils::display::{render_assignment, OutputFormat};
//!
//! let text = render_assignment(&parse("net=debug,warn"), OutputFormat::Text).unwrap();
//! assert_eq!(text, "default: warning\nnet: debug");
//! ```

use std::str::FromStr;

use crate::cfg::helpers::{LevelAssignment, UnrecognizedLevel};
use crate::error::{LevelError, LevelResult};

#[macro_export]
macro_rules! print_info {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        println!("{}", format!($($arg)*).blue())
    }};
}

#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        eprintln!("{}", format!($($arg)*).red())
    }};
}

#[macro_export]
macro_rules! print_success {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        println!("{}", format!($($arg)*).green())
    }};
}

/// How the CLI prints an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Renders an assignment, one `name: level` line per entry with the
/// default first.
pub fn render_assignment(assignment: &LevelAssignment, format: OutputFormat) -> LevelResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(assignment).map_err(LevelError::from),
        OutputFormat::Text => {
            let mut lines = Vec::with_capacity(assignment.levels.len() + 1);
            if let Some(level) = assignment.default_level {
                lines.push(format!("default: {}", level));
            }
            for (name, level) in &assignment.levels {
                lines.push(format!("{}: {}", name, level));
            }
            Ok(lines.join("\n"))
        }
    }
}

/// One line describing an entry whose keyword fell back.
pub fn describe_unrecognized(entry: &UnrecognizedLevel) -> String {
    let name = if entry.name.is_empty() {
        "default"
    } else {
        entry.name.as_str()
    };
    format!(
        "{}: unknown level '{}', resolved to {}",
        name, entry.value, entry.resolved
    )
}
