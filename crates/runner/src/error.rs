//! Runner errors

use thiserror::Error;
use tilt_gesture::ConfigError;
use tilt_pager::PagerError;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Gesture config error: {0}")]
    Gesture(#[from] ConfigError),

    #[error("Failed to read demo config {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse demo config: {0}")]
    Parse(String),

    #[error("Invalid demo config: {0}")]
    InvalidDemo(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Pager error: {0}")]
    Pager(#[from] PagerError),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
