// app.rs

//! # Application Constants
//!
//! Names, defaults and accepted values shared by the library and the CLI.

pub const APP_NAME: &str = "logspec";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_DESCRIPTION: &str = "Parse per-logger level overrides from an environment-style string";

/// Environment variable read by `cfg::env::load_levels`.
pub const DEFAULT_ENV_VAR: &str = "LOGSPEC_LEVEL";

/// Prefix recognised by `cfg::argv::load_argv_levels`.
pub const ARGV_LEVEL_PREFIX: &str = "LOGSPEC_LEVEL=";

/// Separator between logger entries.
pub const ENTRY_SEPARATOR: char = ',';

/// Separator between a logger name and its level.
pub const KV_SEPARATOR: char = '=';

/// Logger name that sets the default level, in addition to the empty name.
pub const DEFAULT_LOGGER_MARKER: &str = "*";

pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const DEFAULT_OUTPUT_FORMAT: &str = "text";
