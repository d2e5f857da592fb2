// utils/logging.rs

//! # Logging Utility Module
//!
//! Bridges parsed level assignments onto the `log` facade. Logger names are
//! matched against `log` targets exactly: `net=debug` affects the target
//! `net` only, not `net::tcp` or `network`. `env_logger` does the
//! formatting and writing.

use std::collections::HashMap;

use env_logger::Builder;
use log::{LevelFilter, Log, Metadata, Record};

use crate::cfg::env::load_levels;
use crate::cfg::helpers::LevelAssignment;
use crate::error::LevelResult;
use crate::level::Level;
use crate::registry::LevelSink;

/// A `LevelSink` that collects per-target levels for a `TargetLogger`.
pub struct EnvLoggerSink {
    builder: Builder,
    levels: HashMap<String, LevelFilter>,
    default_level: LevelFilter,
}

impl EnvLoggerSink {
    /// Starts from a single default level and no per-target overrides.
    pub fn new(level: LevelFilter) -> Self {
        let mut builder = Builder::new();
        // Level checks happen in TargetLogger.
        builder.filter_level(LevelFilter::Trace);
        Self {
            builder,
            levels: HashMap::new(),
            default_level: level,
        }
    }

    /// Builds the logger without installing it.
    pub fn build(mut self) -> TargetLogger {
        TargetLogger {
            inner: self.builder.build(),
            levels: self.levels,
            default_level: self.default_level,
        }
    }

    /// Installs the logger as the global `log` backend.
    pub fn init(self) -> LevelResult<()> {
        let logger = self.build();
        let max_level = logger.max_level();
        log::set_boxed_logger(Box::new(logger))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl LevelSink for EnvLoggerSink {
    fn apply_levels(&mut self, assignment: LevelAssignment) {
        if let Some(level) = assignment.default_level {
            self.default_level = level.into();
        }
        self.levels = assignment
            .levels
            .into_iter()
            .map(|(name, level)| (name, LevelFilter::from(level)))
            .collect();
    }
}

/// `env_logger` output filtered by exact target name.
pub struct TargetLogger {
    inner: env_logger::Logger,
    levels: HashMap<String, LevelFilter>,
    default_level: LevelFilter,
}

impl TargetLogger {
    /// Level in force for `target`.
    pub fn filter_for(&self, target: &str) -> LevelFilter {
        self.levels
            .get(target)
            .copied()
            .unwrap_or(self.default_level)
    }

    /// Most verbose level any target may log at.
    pub fn max_level(&self) -> LevelFilter {
        self.levels
            .values()
            .copied()
            .fold(self.default_level, Ord::max)
    }
}

impl Log for TargetLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.inner.log(record);
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

/// Sets the logger level based on the provided argument, then applies any
/// overrides found in `LOGSPEC_LEVEL`.
pub fn initialize_logger(log_level: &str) -> LevelResult<()> {
    let level = log_level.parse::<Level>().unwrap_or_default();
    let mut sink = EnvLoggerSink::new(level.into());
    load_levels(&mut sink);
    sink.init()
}
