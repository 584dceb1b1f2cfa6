use std::time::Duration;

use tilt_core::DeviceAttitude;
use tokio::sync::broadcast;

use crate::error::{SensorError, SensorResult};

/// One item on a sensor stream: an attitude, or a per-sample failure
pub type SensorReading = Result<DeviceAttitude, SensorError>;

/// Port for a continuous orientation stream
///
/// Implementations push readings at roughly [`update_interval`] into a
/// broadcast channel and hand out receivers from [`open_stream`].
/// [`subscribe`] refuses an unavailable sensor; the caller should treat the
/// intent stream as empty when it fails.
///
/// [`update_interval`]: OrientationSource::update_interval
/// [`open_stream`]: OrientationSource::open_stream
/// [`subscribe`]: OrientationSource::subscribe
pub trait OrientationSource: Send + Sync {
    /// Whether the underlying hardware (or simulation) can deliver readings
    fn is_available(&self) -> bool;

    /// Nominal delay between readings
    fn update_interval(&self) -> Duration {
        Duration::from_millis(100)
    }

    /// New receiver on the reading channel
    fn open_stream(&self) -> SensorResult<broadcast::Receiver<SensorReading>>;

    /// Start receiving readings, if the sensor is available
    fn subscribe(&self) -> SensorResult<broadcast::Receiver<SensorReading>> {
        if !self.is_available() {
            return Err(SensorError::Unavailable(self.name().to_string()));
        }
        self.open_stream()
    }

    /// Source name for logging
    fn name(&self) -> &str {
        "OrientationSource"
    }
}

