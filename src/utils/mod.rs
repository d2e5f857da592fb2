// utils/mod.rs

//! # Utility Module
//!
//! Output helpers and the `log`/`env_logger` bridge.

pub mod display;
pub mod logging;
