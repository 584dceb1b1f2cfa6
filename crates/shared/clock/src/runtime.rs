use chrono::{Duration, Utc};
use tilt_core::Timestamp;
use tilt_ports::Clock;
use tokio::time::Instant;

/// Clock driven by the tokio runtime's notion of time
///
/// The wall time at construction is the anchor; elapsed time comes from
/// `tokio::time::Instant`. Under a paused runtime (`start_paused = true`)
/// this clock only moves when the runtime auto-advances or
/// `tokio::time::advance` is called, keeping timestamps and timers in step.
#[derive(Debug, Clone)]
pub struct RuntimeClock {
    origin_wall: Timestamp,
    origin: Instant,
}

impl RuntimeClock {
    pub fn new() -> Self {
        Self {
            origin_wall: Utc::now(),
            origin: Instant::now(),
        }
    }

    /// The timestamp this clock reports at the given runtime instant
    pub fn timestamp_at(&self, instant: Instant) -> Timestamp {
        let elapsed = instant.saturating_duration_since(self.origin);
        self.origin_wall + Duration::from_std(elapsed).unwrap_or_else(|_| Duration::zero())
    }
}

impl Default for RuntimeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for RuntimeClock {
    fn now(&self) -> Timestamp {
        self.timestamp_at(Instant::now())
    }

    fn name(&self) -> &str {
        "RuntimeClock"
    }
}
