// error.rs

//! # Error Handling Module
//!
//! Parsing a level string never fails; errors only arise at the edges:
//! strict level names given on the command line, installing the `log`
//! backend, and serializing output.
//!
//! # Usage Example
//! ```rust
//! use logspec::error::LevelError;
//! use logspec::level::Level;
//!
//! let err = "loud".parse::<Level>().unwrap_err();
//! assert!(matches!(err, LevelError::UnknownLevel(_)));
//! ```

use thiserror::Error;

/// Errors raised outside the (total) parsing path.
#[derive(Error, Debug)]
pub enum LevelError {
    #[error("Unknown level name: {0}")]
    UnknownLevel(String),

    #[error("Failed to install logger: {0}")]
    LoggerInit(#[from] log::SetLoggerError),

    #[error("Failed to serialize levels: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Type alias for results carrying a `LevelError`
pub type LevelResult<T> = Result<T, LevelError>;
