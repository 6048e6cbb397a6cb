//! Error types
//!
//! Conversion itself cannot fail; errors come only from writing output and
//! from loading configuration.

use std::io;
use thiserror::Error;

/// Crate error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Config file is not valid JSON for `Config`
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config parsed but holds an unusable value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for sink and config operations
pub type Result<T> = std::result::Result<T, Error>;
