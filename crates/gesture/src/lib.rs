//! Tilt Gesture Classifier
//!
//! Turns a stream of rotation readings into sparse paging decisions:
//!
//! - **Classifier**: compares each reading with the previous one, classifies
//!   the sign transition and applies dead-zone thresholds
//! - **Debouncer**: lets at most one decision through per cooldown window
//! - **Config**: presets for the horizontal carousel and vertical pager, plus
//!   JSON loading for custom tuning
//!
//! ## Pipeline
//!
//! ```text
//!   reading ──► RotationTransition::classify(current, previous)
//!                         │
//!                         ▼
//!               ThresholdPolicy (delta / sum bands)
//!                         │ RotationSense
//!                         ▼
//!                    DirectionMap
//!                         │ NavigationIntent
//!                         ▼
//!                 NavigationDebouncer ──► page move
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tilt_gesture::{GestureConfig, NavigationDebouncer, RotationIntentClassifier};
//!
//! let config = GestureConfig::horizontal_carousel();
//! let mut classifier = RotationIntentClassifier::new(&config);
//! let mut debouncer = NavigationDebouncer::new(config.cooldown());
//!
//! if let Some(intent) = classifier.on_sample(-0.25) {
//!     if debouncer.try_fire(intent, clock.now()) {
//!         view.apply(intent);
//!     }
//! }
//! ```

pub mod classifier;
pub mod config;
pub mod debouncer;
pub mod error;

// Re-export main types
pub use classifier::{ClassifiedStep, RotationIntentClassifier};
pub use config::{GestureConfig, MAX_COOLDOWN_MS, PagerMode, ThresholdPolicy};
pub use debouncer::NavigationDebouncer;
pub use error::{ConfigError, Result};
