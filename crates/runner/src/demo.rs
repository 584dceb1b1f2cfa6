//! Demo - End-to-end gesture paging run
//!
//! Wires one sensor feed, one pager task and a page track together, runs
//! for the configured time, and reports what the pager did:
//! - Config loading (JSON file or defaults)
//! - Feed selection (simulated random walk or scripted readings)
//! - Pager task lifecycle
//! - Summary of readings, intents and moves

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tilt_core::{NavigationIntent, OrientationSample};
use tilt_gesture::{GestureConfig, PagerMode};
use tilt_pager::{GestureDrivenPager, PageTrack, PagerTask, page_track::DEFAULT_PAGE_COUNT};
use tilt_ports::{Clock, PagedView};

use crate::error::{Result, RunnerError};
use crate::sensor_feed::{ScriptedFeed, TiltFeedConfig, TiltFeedSimulator};

fn default_page_count() -> usize {
    DEFAULT_PAGE_COUNT
}

fn default_duration_ms() -> u64 {
    10_000
}

fn default_interval_ms() -> u64 {
    100
}

/// Where readings come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedConfig {
    /// Random-walk feed with periodic deliberate tilts
    Simulated(TiltFeedConfig),
    /// Fixed readings, replayed once
    Scripted {
        #[serde(default = "default_interval_ms")]
        interval_ms: u64,
        samples: Vec<OrientationSample>,
    },
}

impl FeedConfig {
    /// Delay between readings (ms)
    pub fn interval_ms(&self) -> u64 {
        match self {
            FeedConfig::Simulated(config) => config.interval_ms,
            FeedConfig::Scripted { interval_ms, .. } => *interval_ms,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            FeedConfig::Simulated(_) => "simulated",
            FeedConfig::Scripted { .. } => "scripted",
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig::Simulated(TiltFeedConfig::default())
    }
}

/// Demo configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Pager layout; selects the preset gesture tuning
    #[serde(default)]
    pub mode: PagerMode,
    /// Overrides the mode's preset when present
    #[serde(default)]
    pub gesture: Option<GestureConfig>,
    #[serde(default = "default_page_count")]
    pub page_count: usize,
    #[serde(default)]
    pub start_page: usize,
    /// How long a simulated feed runs (ms); scripted feeds run to the end
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Seed for the simulated feed
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub feed: FeedConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            mode: PagerMode::default(),
            gesture: None,
            page_count: default_page_count(),
            start_page: 0,
            duration_ms: default_duration_ms(),
            seed: None,
            feed: FeedConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Load from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| RunnerError::Io {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::from_json(&contents)
    }

    /// Parse from JSON and validate
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DemoConfig =
            serde_json::from_str(json).map_err(|e| RunnerError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Gesture tuning in effect: the explicit override or the mode's preset
    pub fn gesture_config(&self) -> GestureConfig {
        self.gesture.clone().unwrap_or_else(|| self.mode.config())
    }

    pub fn validate(&self) -> Result<()> {
        self.gesture_config().validate()?;

        if self.page_count == 0 {
            return Err(RunnerError::InvalidDemo("page_count must be at least 1".into()));
        }
        if self.start_page >= self.page_count {
            return Err(RunnerError::InvalidDemo(format!(
                "start_page {} is past the last page ({})",
                self.start_page,
                self.page_count - 1
            )));
        }
        if self.feed.interval_ms() == 0 {
            return Err(RunnerError::InvalidDemo("feed interval_ms must be positive".into()));
        }
        if let FeedConfig::Simulated(feed) = &self.feed {
            if !(0.0..=1.0).contains(&feed.dropout_probability) {
                return Err(RunnerError::InvalidDemo(format!(
                    "dropout_probability {} is outside [0, 1]",
                    feed.dropout_probability
                )));
            }
        }
        Ok(())
    }
}

/// What one demo run did
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSummary {
    pub mode: PagerMode,
    pub feed: &'static str,
    pub readings: u64,
    pub skipped: u64,
    pub cooling: u64,
    pub intents: u64,
    pub suppressed: u64,
    pub moves: u64,
    pub unlocks: u64,
    pub start_page: usize,
    pub final_page: usize,
    pub page_count: usize,
    /// Page changes in order
    pub visited: Vec<(NavigationIntent, usize)>,
}

impl fmt::Display for DemoSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Tilt Pager Demo ({}, {} feed) ===", self.mode, self.feed)?;
        writeln!(
            f,
            "Readings: {} ({} skipped, {} during cooldown)",
            self.readings, self.skipped, self.cooling
        )?;
        writeln!(
            f,
            "Intents: {}  Moves: {}  Suppressed: {}  Unlocks: {}",
            self.intents, self.moves, self.suppressed, self.unlocks
        )?;
        write!(
            f,
            "Page: {} -> {} of {}",
            self.start_page + 1,
            self.final_page + 1,
            self.page_count
        )
    }
}

/// Runs one demo configuration
pub struct TiltDemo {
    config: DemoConfig,
}

impl TiltDemo {
    pub fn new(config: DemoConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Run the demo, timestamping gestures with `clock`
    pub async fn run<C: Clock + 'static>(&self, clock: C) -> Result<DemoSummary> {
        let config = &self.config;
        let gesture = config.gesture_config();
        let axis = gesture.axis;

        let view = PageTrack::new(config.page_count).with_page(config.start_page);
        let pager = GestureDrivenPager::new(gesture, view, clock);

        log::info!(
            "Starting {} demo: {} pages, {} feed every {}ms",
            config.mode,
            config.page_count,
            config.feed.kind(),
            config.feed.interval_ms()
        );

        let pager = match &config.feed {
            FeedConfig::Simulated(feed_config) => {
                let mut feed = match config.seed {
                    Some(seed) => TiltFeedSimulator::with_seed(feed_config.clone(), axis, seed),
                    None => TiltFeedSimulator::new(feed_config.clone(), axis),
                };
                let handle = PagerTask::spawn(pager, &feed);

                let ticks = config.duration_ms / feed_config.interval_ms;
                feed.run_ticks(ticks).await;

                handle.shutdown().await?
            }
            FeedConfig::Scripted {
                interval_ms,
                samples,
            } => {
                let feed = ScriptedFeed::new(axis, samples.clone(), *interval_ms);
                let handle = PagerTask::spawn(pager, &feed);

                feed.play().await;

                handle.shutdown().await?
            }
        };

        let stats = pager.stats();
        let view = pager.view();

        Ok(DemoSummary {
            mode: config.mode,
            feed: config.feed.kind(),
            readings: stats.readings,
            skipped: stats.skipped,
            cooling: stats.cooling,
            intents: stats.intents,
            suppressed: stats.suppressed,
            moves: stats.moves,
            unlocks: stats.unlocks,
            start_page: config.start_page,
            final_page: view.current_page(),
            page_count: view.page_count(),
            visited: view.moves().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilt_core::RotationAxis;

    #[test]
    fn test_default_config_is_valid() {
        let config = DemoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.page_count, 20);
        assert_eq!(config.feed.interval_ms(), 100);
        assert_eq!(config.gesture_config(), GestureConfig::horizontal_carousel());
    }

    #[test]
    fn test_parse_minimal_json() {
        let config = DemoConfig::from_json(r#"{ "mode": "vertical_pager" }"#).unwrap();
        assert_eq!(config.mode, PagerMode::VerticalPager);
        assert_eq!(config.gesture_config().axis, RotationAxis::QuaternionX);
        assert_eq!(config.duration_ms, 10_000);
        assert_eq!(config.feed, FeedConfig::default());
    }

    #[test]
    fn test_parse_scripted_feed() {
        let json = r#"{
            "start_page": 5,
            "feed": { "kind": "scripted", "samples": [-0.1, -0.25] }
        }"#;
        let config = DemoConfig::from_json(json).unwrap();
        assert_eq!(
            config.feed,
            FeedConfig::Scripted {
                interval_ms: 100,
                samples: vec![-0.1, -0.25],
            }
        );
    }

    #[test]
    fn test_parse_simulated_feed_partial() {
        let json = r#"{ "seed": 3, "feed": { "kind": "simulated", "noise": 0.02 } }"#;
        let config = DemoConfig::from_json(json).unwrap();
        let FeedConfig::Simulated(feed) = &config.feed else {
            panic!("expected simulated feed");
        };
        assert_eq!(feed.noise, 0.02);
        assert_eq!(feed.gesture_every_ticks, 15);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_gesture_override_wins() {
        let json = r#"{
            "mode": "vertical_pager",
            "gesture": { "cooldown_ms": 250 }
        }"#;
        let config = DemoConfig::from_json(json).unwrap();
        let gesture = config.gesture_config();
        assert_eq!(gesture.cooldown_ms, 250);
        assert_eq!(gesture.axis, RotationAxis::Roll);
    }

    #[test]
    fn test_rejects_bad_demo() {
        let past_end = r#"{ "page_count": 3, "start_page": 3 }"#;
        assert!(matches!(
            DemoConfig::from_json(past_end),
            Err(RunnerError::InvalidDemo(_))
        ));

        let zero_interval = r#"{ "feed": { "kind": "scripted", "interval_ms": 0, "samples": [] } }"#;
        assert!(matches!(
            DemoConfig::from_json(zero_interval),
            Err(RunnerError::InvalidDemo(_))
        ));

        let bad_threshold = r#"{ "gesture": { "thresholds": { "dead_zone": 0.5 } } }"#;
        assert!(matches!(
            DemoConfig::from_json(bad_threshold),
            Err(RunnerError::Gesture(_))
        ));

        let endless_cooldown = r#"{ "gesture": { "cooldown_ms": 9223372036854775808 } }"#;
        assert!(matches!(
            DemoConfig::from_json(endless_cooldown),
            Err(RunnerError::Gesture(_))
        ));

        assert!(matches!(
            DemoConfig::from_json("{ nope"),
            Err(RunnerError::Parse(_))
        ));
    }

    #[test]
    fn test_summary_display() {
        let summary = DemoSummary {
            mode: PagerMode::HorizontalCarousel,
            feed: "scripted",
            readings: 5,
            skipped: 0,
            cooling: 3,
            intents: 1,
            suppressed: 0,
            moves: 1,
            unlocks: 0,
            start_page: 5,
            final_page: 4,
            page_count: 20,
            visited: vec![(NavigationIntent::Retreat, 4)],
        };
        let text = summary.to_string();
        assert!(text.contains("horizontal_carousel"));
        assert!(text.contains("Page: 6 -> 5 of 20"));
    }
}
