// lib.rs

//! # logspec
//!
//! Parses per-logger level overrides such as `net=debug,db=warn,info` from
//! an environment-style string and hands them to a logger registry.
//!
//! ## Example Usage
//! ```rust
//! use logspec::cfg::parse;
//! use logspec::level::Level;
//! use logspec::registry::Registry;
//!
//! let registry = Registry::new();
//! registry.set_levels(parse("net=debug,*=warn"));
//!
//! assert_eq!(registry.register("net").level(), Level::Debug);
//! assert_eq!(registry.register("db").level(), Level::Warn);
//! ```

pub mod app;
pub mod cfg;
pub mod error;
pub mod level;
pub mod registry;
pub mod utils;

pub use cfg::helpers::{parse, LevelAssignment};
pub use level::Level;
pub use registry::LevelSink;
