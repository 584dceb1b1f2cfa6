//! Gesture configuration errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid threshold {name}: {reason}")]
    InvalidThreshold { name: &'static str, reason: String },

    #[error("Invalid cooldown: {0}ms is longer than one hour")]
    InvalidCooldown(u64),

    #[error("Invalid initial reading: {0}")]
    InvalidInitialReading(f64),

    #[error("Unknown pager mode: {0}")]
    UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
