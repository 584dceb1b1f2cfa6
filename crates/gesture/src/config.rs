//! Gesture configuration
//!
//! The two pager layouts share one classifier. They differ only in the
//! values collected here: starting reading, cooldown, which rotation sense
//! means "next", the axis that feeds the classifier, and whether manual
//! scrolling blocks programmatic moves.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tilt_core::{
    DirectionMap, OrientationSample, RotationAxis, RotationSense, RotationTransition,
};

use crate::error::{ConfigError, Result};

/// Band limits for turning a transition into a rotation sense
///
/// All comparisons are strict: a delta exactly on `dead_zone` or `max_step`
/// does not fire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPolicy {
    /// Same-sign magnitude changes at or below this are noise
    #[serde(default = "default_dead_zone")]
    pub dead_zone: f64,
    /// Same-sign magnitude changes at or above this are ignored as jolts
    #[serde(default = "default_max_step")]
    pub max_step: f64,
    /// A zero crossing fires when the summed magnitudes exceed this
    #[serde(default = "default_flip_min")]
    pub flip_min: f64,
}

fn default_dead_zone() -> f64 {
    0.05
}

fn default_max_step() -> f64 {
    0.2
}

fn default_flip_min() -> f64 {
    0.05
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            dead_zone: default_dead_zone(),
            max_step: default_max_step(),
            flip_min: default_flip_min(),
        }
    }
}

impl ThresholdPolicy {
    /// Decide which way the device turned, if it turned enough
    ///
    /// `delta` is `|current| - |previous|`, `sum` is `|current| + |previous|`.
    pub fn sense(
        &self,
        transition: RotationTransition,
        delta: OrientationSample,
        sum: OrientationSample,
    ) -> Option<RotationSense> {
        match transition {
            RotationTransition::BothNegative => {
                if self.in_band(delta) {
                    Some(RotationSense::TowardNegative)
                } else if self.in_band(-delta) {
                    Some(RotationSense::TowardPositive)
                } else {
                    None
                }
            }
            RotationTransition::BothPositive => {
                if self.in_band(-delta) {
                    Some(RotationSense::TowardNegative)
                } else if self.in_band(delta) {
                    Some(RotationSense::TowardPositive)
                } else {
                    None
                }
            }
            RotationTransition::PositiveToNegative => {
                (sum > self.flip_min).then_some(RotationSense::TowardNegative)
            }
            RotationTransition::NegativeToPositive => {
                (sum > self.flip_min).then_some(RotationSense::TowardPositive)
            }
            RotationTransition::Unchanged => None,
        }
    }

    fn in_band(&self, value: f64) -> bool {
        self.dead_zone < value && value < self.max_step
    }

    /// Check the band is well formed
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("dead_zone", self.dead_zone),
            ("max_step", self.max_step),
            ("flip_min", self.flip_min),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidThreshold {
                    name,
                    reason: format!("must be a finite non-negative number, got {}", value),
                });
            }
        }

        if self.max_step <= self.dead_zone {
            return Err(ConfigError::InvalidThreshold {
                name: "max_step",
                reason: format!(
                    "must be greater than dead_zone ({} <= {})",
                    self.max_step, self.dead_zone
                ),
            });
        }

        Ok(())
    }
}

/// Which pager layout is being driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagerMode {
    /// Side-scrolling card carousel
    #[default]
    HorizontalCarousel,
    /// Full-screen top-down pager
    VerticalPager,
}

impl PagerMode {
    /// Preset configuration for this layout
    pub fn config(&self) -> GestureConfig {
        match self {
            PagerMode::HorizontalCarousel => GestureConfig::horizontal_carousel(),
            PagerMode::VerticalPager => GestureConfig::vertical_pager(),
        }
    }
}

impl FromStr for PagerMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" | "horizontal_carousel" | "carousel" => Ok(PagerMode::HorizontalCarousel),
            "vertical" | "vertical_pager" | "pager" => Ok(PagerMode::VerticalPager),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for PagerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PagerMode::HorizontalCarousel => write!(f, "horizontal_carousel"),
            PagerMode::VerticalPager => write!(f, "vertical_pager"),
        }
    }
}

/// Complete tuning for one pager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Reading assumed before the first sample arrives
    #[serde(default)]
    pub initial_reading: OrientationSample,

    /// Minimum time between two accepted moves
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,

    /// Which rotation sense maps to which intent
    #[serde(default)]
    pub direction: DirectionMap,

    /// Dead-zone and flip thresholds
    #[serde(default)]
    pub thresholds: ThresholdPolicy,

    /// Attitude component used as the rotation signal
    #[serde(default)]
    pub axis: RotationAxis,

    /// Drop moves while the user drags the view or it is settling
    #[serde(default)]
    pub suppress_while_interacting: bool,
}

/// Longest accepted cooldown (one hour)
pub const MAX_COOLDOWN_MS: u64 = 3_600_000;

fn default_cooldown_ms() -> u64 {
    1000
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::horizontal_carousel()
    }
}

impl GestureConfig {
    /// Side-scrolling carousel: roll-driven, 1s cooldown
    pub fn horizontal_carousel() -> Self {
        Self {
            initial_reading: 0.0,
            cooldown_ms: 1000,
            direction: DirectionMap::positive_advances(),
            thresholds: ThresholdPolicy::default(),
            axis: RotationAxis::Roll,
            suppress_while_interacting: false,
        }
    }

    /// Full-screen top-down pager: quaternion-x driven, 0.5s cooldown,
    /// yields to manual scrolling
    pub fn vertical_pager() -> Self {
        Self {
            initial_reading: 0.5,
            cooldown_ms: 500,
            direction: DirectionMap::negative_advances(),
            thresholds: ThresholdPolicy::default(),
            axis: RotationAxis::QuaternionX,
            suppress_while_interacting: true,
        }
    }

    /// Cooldown as a duration
    ///
    /// Values too large for a `Duration` saturate to `Duration::MAX`.
    pub fn cooldown(&self) -> Duration {
        i64::try_from(self.cooldown_ms)
            .ok()
            .and_then(Duration::try_milliseconds)
            .unwrap_or(Duration::MAX)
    }

    /// Builder-style initial reading override
    pub fn with_initial_reading(mut self, reading: OrientationSample) -> Self {
        self.initial_reading = reading;
        self
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check cooldown, thresholds and initial reading
    pub fn validate(&self) -> Result<()> {
        if self.cooldown_ms > MAX_COOLDOWN_MS {
            return Err(ConfigError::InvalidCooldown(self.cooldown_ms));
        }
        if !self.initial_reading.is_finite() {
            return Err(ConfigError::InvalidInitialReading(self.initial_reading));
        }
        self.thresholds.validate()
    }
}
