// level.rs

//! # Level Module
//!
//! The closed, ordered set of severities a logger can run at, and the static
//! table that maps lowercase keywords onto them.
//!
//! ## Example Usage
//! ```rust
//! use logspec::level::Level;
//!
//! assert_eq!(Level::from_name("warning"), Some(Level::Warn));
//! assert_eq!(Level::from_name("loud"), None);
//! assert!(Level::Debug < Level::Error);
//! ```

use std::fmt;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Serialize, Serializer};

use crate::error::LevelError;

/// Severity of log output. `Off` silences a logger entirely.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Critical,
    Off,
}

/// Keyword table, matched against already lowercased text.
const LEVEL_NAMES: &[(&str, Level)] = &[
    ("trace", Level::Trace),
    ("debug", Level::Debug),
    ("info", Level::Info),
    ("warning", Level::Warn),
    ("warn", Level::Warn),
    ("error", Level::Error),
    ("critical", Level::Critical),
    ("off", Level::Off),
];

impl Level {
    /// Every level, lowest severity first.
    pub const ALL: [Level; 7] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Critical,
        Level::Off,
    ];

    /// Canonical keyword for this level.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warning",
            Level::Error => "error",
            Level::Critical => "critical",
            Level::Off => "off",
        }
    }

    /// Looks up a lowercase keyword. No case folding, no fallback.
    pub fn from_name(name: &str) -> Option<Level> {
        LEVEL_NAMES
            .iter()
            .find(|(keyword, _)| *keyword == name)
            .map(|(_, level)| *level)
    }

    /// Every keyword the level table accepts, canonical names included.
    pub fn keywords() -> impl Iterator<Item = &'static str> {
        LEVEL_NAMES.iter().map(|(keyword, _)| *keyword)
    }

    pub(crate) fn to_u8(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_u8(raw: u8) -> Level {
        Level::ALL
            .get(usize::from(raw))
            .copied()
            .unwrap_or(Level::Off)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LevelError;

    /// Strict parse: case-insensitive, but unknown names are an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::from_name(&s.trim().to_ascii_lowercase())
            .ok_or_else(|| LevelError::UnknownLevel(s.to_string()))
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => LevelFilter::Trace,
            Level::Debug => LevelFilter::Debug,
            Level::Info => LevelFilter::Info,
            Level::Warn => LevelFilter::Warn,
            // log has no critical severity
            Level::Error | Level::Critical => LevelFilter::Error,
            Level::Off => LevelFilter::Off,
        }
    }
}
