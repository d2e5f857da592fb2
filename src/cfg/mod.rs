// cfg/mod.rs

//! # Level Configuration Module
//!
//! Parsing of level strings and the loaders that feed them from the
//! environment, dotenv files and program arguments.

pub mod argv;
pub mod env;
pub mod helpers;

pub use helpers::{parse, parse_with_report, LevelAssignment, UnrecognizedLevel};
