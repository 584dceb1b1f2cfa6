use thiserror::Error;

/// Errors reported by a motion sensor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SensorError {
    #[error("Motion sensor unavailable: {0}")]
    Unavailable(String),

    #[error("Sensor reading failed: {0}")]
    Reading(String),
}

pub type SensorResult<T> = std::result::Result<T, SensorError>;
