// registry.rs

//! # Logger Registry Module
//!
//! Receives parsed level assignments and keeps named loggers at the levels
//! they ask for. Anything that wants to receive an assignment implements
//! `LevelSink`; the parser itself never touches a registry.
//!
//! ## Features
//! - `Registry` stores loggers by name and remembers per-name overrides, so
//!   loggers registered after `set_levels` still pick up their level.
//! - `global()` returns a lazily created process-wide registry.
//!
//! ## Example Usage
//! ```rust
//! use logspec::cfg::helpers::parse;
//! use logspec::level::Level;
//! use logspec::registry::Registry;
//!
//! let registry = Registry::new();
//! let net = registry.register("net");
//! registry.set_levels(parse("net=debug,warn"));
//!
//! assert_eq!(net.level(), Level::Debug);
//! assert_eq!(registry.register("db").level(), Level::Warn);
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;
use once_cell::sync::Lazy;

use crate::cfg::helpers::LevelAssignment;
use crate::level::Level;

/// Receiver of a parsed `LevelAssignment`.
pub trait LevelSink {
    fn apply_levels(&mut self, assignment: LevelAssignment);
}

/// A named logger whose level can be changed while it is shared.
#[derive(Debug)]
pub struct Logger {
    name: String,
    level: AtomicU8,
}

impl Logger {
    pub fn new(name: impl Into<String>, level: Level) -> Self {
        Self {
            name: name.into(),
            level: AtomicU8::new(level.to_u8()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level.to_u8(), Ordering::Relaxed);
    }

    /// Whether a message at `level` passes this logger's threshold.
    pub fn should_log(&self, level: Level) -> bool {
        let threshold = self.level();
        threshold != Level::Off && level >= threshold
    }
}

#[derive(Debug, Default)]
struct RegistryState {
    loggers: HashMap<String, Arc<Logger>>,
    overrides: HashMap<String, Level>,
    default_level: Level,
}

impl RegistryState {
    fn level_for(&self, name: &str) -> Level {
        self.overrides
            .get(name)
            .copied()
            .unwrap_or(self.default_level)
    }
}

/// Logger registry; all methods take `&self` and may be called from any thread.
#[derive(Debug, Default)]
pub struct Registry {
    state: RwLock<RegistryState>,
}

impl Registry {
    /// Creates an empty registry with an `info` default level.
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave the state half-written,
    // so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns the logger called `name`, creating it at its configured level.
    pub fn register(&self, name: &str) -> Arc<Logger> {
        if let Some(logger) = self.read().loggers.get(name) {
            return Arc::clone(logger);
        }

        let mut state = self.write();
        let level = state.level_for(name);
        let logger = state
            .loggers
            .entry(name.to_string())
            .or_insert_with(|| {
                debug!("Registering logger [{}] at level {}", name, level);
                Arc::new(Logger::new(name, level))
            });
        Arc::clone(logger)
    }

    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.read().loggers.get(name).cloned()
    }

    /// Names of all registered loggers, sorted.
    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().loggers.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn default_level(&self) -> Level {
        self.read().default_level
    }

    /// Level a logger called `name` would get if registered now.
    pub fn level_for(&self, name: &str) -> Level {
        self.read().level_for(name)
    }

    /// Replaces the per-name overrides and, when given, the default level.
    ///
    /// Registered loggers named in the assignment take their explicit level;
    /// the others take the new default, or keep their level if the
    /// assignment carries no default.
    pub fn set_levels(&self, assignment: LevelAssignment) {
        let LevelAssignment {
            levels,
            default_level,
        } = assignment;

        let mut state = self.write();
        state.overrides = levels.into_iter().collect();
        if let Some(level) = default_level {
            state.default_level = level;
        }

        for (name, logger) in &state.loggers {
            if let Some(level) = state.overrides.get(name) {
                logger.set_level(*level);
            } else if let Some(level) = default_level {
                logger.set_level(level);
            }
        }
        debug!(
            "Applied {} logger override(s), default level {}",
            state.overrides.len(),
            state.default_level
        );
    }
}

impl LevelSink for Registry {
    fn apply_levels(&mut self, assignment: LevelAssignment) {
        self.set_levels(assignment);
    }
}

impl LevelSink for &Registry {
    fn apply_levels(&mut self, assignment: LevelAssignment) {
        self.set_levels(assignment);
    }
}

static GLOBAL_REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// The process-wide registry.
pub fn global() -> &'static Registry {
    &GLOBAL_REGISTRY
}
