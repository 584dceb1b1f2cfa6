//! Sensor Feed - Simulated motion sensors
//!
//! Two stand-ins for device motion hardware:
//! - `TiltFeedSimulator`: random-walk jitter with a deliberate tilt every few
//!   seconds, optionally dropping readings
//! - `ScriptedFeed`: replays a fixed list of rotation values
//!
//! Both publish on a broadcast channel and implement `OrientationSource`, so
//! a pager can subscribe to either.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tilt_core::{DeviceAttitude, OrientationSample, RotationAxis};
use tilt_ports::{OrientationSource, SensorError, SensorReading, SensorResult};
use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 256;

/// Configuration for the simulated tilt feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltFeedConfig {
    /// Delay between readings (ms)
    pub interval_ms: u64,
    /// Max jitter per reading while the device is held still
    pub noise: f64,
    /// Start a deliberate tilt every N readings (0 disables tilts)
    pub gesture_every_ticks: u64,
    /// Signal change per reading during a tilt
    pub gesture_step: f64,
    /// Readings a tilt lasts
    pub gesture_ticks: u32,
    /// Signal is kept within +/- this value
    pub max_signal: f64,
    /// Probability a reading fails (0.0 to 1.0)
    pub dropout_probability: f64,
}

impl Default for TiltFeedConfig {
    fn default() -> Self {
        Self {
            interval_ms: 100,
            noise: 0.01,
            gesture_every_ticks: 15,
            gesture_step: 0.12,
            gesture_ticks: 2,
            max_signal: 1.2,
            dropout_probability: 0.0,
        }
    }
}

/// A tilt in progress: direction (+1/-1) and readings left
#[derive(Debug, Clone, Copy)]
struct Tilt {
    direction: f64,
    remaining: u32,
}

/// Generates simulated device attitudes
pub struct TiltFeedSimulator {
    config: TiltFeedConfig,
    /// Attitude component the generated signal is written to
    axis: RotationAxis,
    /// Current rotation signal
    signal: OrientationSample,
    /// Readings generated so far
    ticks: u64,
    tilt: Option<Tilt>,
    /// Reading broadcaster
    tx: broadcast::Sender<SensorReading>,
    /// Random generator seed for reproducibility
    rng: rand::rngs::StdRng,
}

impl TiltFeedSimulator {
    /// Create a new simulator
    pub fn new(config: TiltFeedConfig, axis: RotationAxis) -> Self {
        Self::with_rng(config, axis, rand::SeedableRng::from_entropy())
    }

    /// Create with a specific seed for reproducible runs
    pub fn with_seed(config: TiltFeedConfig, axis: RotationAxis, seed: u64) -> Self {
        Self::with_rng(config, axis, rand::SeedableRng::seed_from_u64(seed))
    }

    fn with_rng(config: TiltFeedConfig, axis: RotationAxis, rng: rand::rngs::StdRng) -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);

        Self {
            config,
            axis,
            signal: 0.0,
            ticks: 0,
            tilt: None,
            tx,
            rng,
        }
    }

    /// Current rotation signal
    pub fn signal(&self) -> OrientationSample {
        self.signal
    }

    /// Readings generated so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Generate the next reading without publishing it
    pub fn next_reading(&mut self) -> SensorReading {
        self.ticks += 1;

        if self.config.dropout_probability > 0.0
            && self.rng.r#gen::<f64>() < self.config.dropout_probability
        {
            return Err(SensorError::Reading(format!(
                "simulated dropout at reading {}",
                self.ticks
            )));
        }

        if self.tilt.is_none()
            && self.config.gesture_every_ticks > 0
            && self.ticks % self.config.gesture_every_ticks == 0
        {
            self.tilt = Some(Tilt {
                direction: self.pick_direction(),
                remaining: self.config.gesture_ticks,
            });
        }

        let step = match self.tilt.as_mut() {
            Some(tilt) if tilt.remaining > 0 => {
                tilt.remaining -= 1;
                tilt.direction * self.config.gesture_step
            }
            _ => {
                self.tilt = None;
                let noise = self.config.noise.abs();
                if noise > 0.0 {
                    self.rng.gen_range(-noise..=noise)
                } else {
                    0.0
                }
            }
        };

        let max = self.config.max_signal.abs();
        self.signal = (self.signal + step).clamp(-max, max);

        Ok(DeviceAttitude::from_signal(self.axis, self.signal))
    }

    /// Tilt away from whichever limit is close, otherwise either way
    fn pick_direction(&mut self) -> f64 {
        let edge = self.config.max_signal.abs() * 0.6;
        if self.signal > edge {
            -1.0
        } else if self.signal < -edge {
            1.0
        } else if self.rng.gen_bool(0.5) {
            1.0
        } else {
            -1.0
        }
    }

    /// Generate and broadcast the next reading
    pub fn tick(&mut self) -> SensorReading {
        let reading = self.next_reading();
        // Ignore send error (no subscribers is ok)
        let _ = self.tx.send(reading.clone());
        reading
    }

    /// Run the feed for a number of readings at the configured interval
    pub async fn run_ticks(&mut self, num_ticks: u64) {
        let interval = Duration::from_millis(self.config.interval_ms);
        for _ in 0..num_ticks {
            self.tick();
            tokio::time::sleep(interval).await;
        }
    }
}

impl OrientationSource for TiltFeedSimulator {
    fn is_available(&self) -> bool {
        true
    }

    fn update_interval(&self) -> Duration {
        Duration::from_millis(self.config.interval_ms)
    }

    fn open_stream(&self) -> SensorResult<broadcast::Receiver<SensorReading>> {
        Ok(self.tx.subscribe())
    }

    fn name(&self) -> &str {
        "TiltFeedSimulator"
    }
}

/// Replays fixed rotation values
pub struct ScriptedFeed {
    axis: RotationAxis,
    samples: Vec<OrientationSample>,
    interval: Duration,
    tx: broadcast::Sender<SensorReading>,
}

impl ScriptedFeed {
    pub fn new(axis: RotationAxis, samples: Vec<OrientationSample>, interval_ms: u64) -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);

        Self {
            axis,
            samples,
            interval: Duration::from_millis(interval_ms),
            tx,
        }
    }

    /// Publish every sample, one per interval. Returns how many were sent.
    pub async fn play(&self) -> usize {
        for &sample in &self.samples {
            let _ = self
                .tx
                .send(Ok(DeviceAttitude::from_signal(self.axis, sample)));
            tokio::time::sleep(self.interval).await;
        }
        self.samples.len()
    }
}

impl OrientationSource for ScriptedFeed {
    fn is_available(&self) -> bool {
        true
    }

    fn update_interval(&self) -> Duration {
        self.interval
    }

    fn open_stream(&self) -> SensorResult<broadcast::Receiver<SensorReading>> {
        Ok(self.tx.subscribe())
    }

    fn name(&self) -> &str {
        "ScriptedFeed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_is_reproducible() {
        let config = TiltFeedConfig::default();
        let mut a = TiltFeedSimulator::with_seed(config.clone(), RotationAxis::Roll, 7);
        let mut b = TiltFeedSimulator::with_seed(config, RotationAxis::Roll, 7);

        for _ in 0..50 {
            assert_eq!(a.next_reading(), b.next_reading());
        }
    }

    #[test]
    fn test_signal_stays_bounded() {
        let config = TiltFeedConfig {
            gesture_every_ticks: 3,
            gesture_step: 0.5,
            ..Default::default()
        };
        let mut feed = TiltFeedSimulator::with_seed(config, RotationAxis::Roll, 42);

        for _ in 0..500 {
            let attitude = feed.next_reading().unwrap();
            assert!(attitude.roll.abs() <= 1.2);
        }
        assert_eq!(feed.ticks(), 500);
    }

    #[test]
    fn test_tilt_moves_by_gesture_step() {
        let config = TiltFeedConfig {
            noise: 0.0,
            gesture_every_ticks: 5,
            gesture_ticks: 2,
            ..Default::default()
        };
        let mut feed = TiltFeedSimulator::with_seed(config, RotationAxis::Roll, 1);

        for _ in 0..4 {
            feed.next_reading().unwrap();
        }
        assert_eq!(feed.signal(), 0.0);

        feed.next_reading().unwrap();
        feed.next_reading().unwrap();
        assert!((feed.signal().abs() - 0.24).abs() < 1e-12);
    }

    #[test]
    fn test_writes_configured_axis() {
        let config = TiltFeedConfig {
            gesture_every_ticks: 1,
            ..Default::default()
        };
        let mut feed = TiltFeedSimulator::with_seed(config, RotationAxis::QuaternionX, 3);

        let attitude = feed.next_reading().unwrap();
        assert!((attitude.quaternion.x - feed.signal()).abs() < 1e-12);
    }

    #[test]
    fn test_dropouts() {
        let config = TiltFeedConfig {
            dropout_probability: 1.0,
            ..Default::default()
        };
        let mut feed = TiltFeedSimulator::with_seed(config, RotationAxis::Roll, 9);

        assert!(matches!(feed.next_reading(), Err(SensorError::Reading(_))));
    }

    #[tokio::test]
    async fn test_tick_broadcasts() {
        let mut feed =
            TiltFeedSimulator::with_seed(TiltFeedConfig::default(), RotationAxis::Roll, 5);
        let mut rx = feed.subscribe().unwrap();

        let sent = feed.tick();
        let received = rx.try_recv().unwrap();
        assert_eq!(sent, received);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scripted_feed_replays_in_order() {
        let feed = ScriptedFeed::new(RotationAxis::Pitch, vec![0.1, -0.2, 0.3], 100);
        let mut rx = feed.subscribe().unwrap();

        assert_eq!(feed.play().await, 3);

        let mut seen = Vec::new();
        while let Ok(reading) = rx.try_recv() {
            seen.push(reading.unwrap().pitch);
        }
        assert_eq!(seen, vec![0.1, -0.2, 0.3]);
    }
}
