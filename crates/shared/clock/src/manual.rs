use chrono::{Duration, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use tilt_core::Timestamp;
use tilt_ports::Clock;

/// Clock that only moves when told to
///
/// Clones share the same time, so a test can keep one handle and advance it
/// while the pager reads through another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Arc<RwLock<Timestamp>>,
}

impl ManualClock {
    /// Create a clock frozen at `start`
    pub fn new(start: Timestamp) -> Self {
        Self {
            current: Arc::new(RwLock::new(start)),
        }
    }

    /// Create a clock frozen at the current wall time
    pub fn starting_now() -> Self {
        Self::new(Utc::now())
    }

    /// Move time forward by a duration
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.write();
        *current += duration;
    }

    /// Move time forward by whole milliseconds
    pub fn advance_millis(&self, millis: i64) {
        self.advance(Duration::milliseconds(millis));
    }

    /// Explicitly set the time
    ///
    /// Warning: setting an earlier time makes pending cooldowns last longer.
    pub fn set_time(&self, time: Timestamp) {
        let mut current = self.current.write();
        *current = time;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::starting_now()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current.read()
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frozen_until_advanced() {
        let clock = ManualClock::starting_now();

        let time1 = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let time2 = clock.now();
        assert_eq!(time1, time2);

        clock.advance(Duration::seconds(5));
        assert_eq!(clock.now() - time1, Duration::seconds(5));

        clock.advance_millis(250);
        assert_eq!(clock.now() - time1, Duration::milliseconds(5250));
    }

    #[test]
    fn test_clones_share_time() {
        let clock = ManualClock::starting_now();
        let handle = clock.clone();

        handle.advance_millis(100);
        assert_eq!(clock.now(), handle.now());
    }

    #[test]
    fn test_set_time() {
        let start = Utc::now();
        let clock = ManualClock::new(start);
        let later = start + Duration::minutes(3);

        clock.set_time(later);
        assert_eq!(clock.now(), later);
    }
}
