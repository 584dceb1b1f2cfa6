//! Tilt Runner - Gesture paging demo
//!
//! Runs a gesture-driven pager end to end without hardware:
//!
//! - **Sensor feeds**: a seeded random-walk simulator with periodic
//!   deliberate tilts, and a scripted feed replaying fixed readings
//! - **Demo**: JSON-configured run of one pager layout over a page track,
//!   reporting what happened
//!
//! ## Architecture
//!
//! ```text
//!   TiltFeedSimulator / ScriptedFeed
//!                │ SensorReading (every 100ms)
//!                ▼
//!          PagerTask ──► GestureDrivenPager ──► PageTrack
//!                │
//!                ▼
//!           DemoSummary
//! ```

pub mod demo;
pub mod error;
pub mod sensor_feed;

// Re-export main types
pub use demo::{DemoConfig, DemoSummary, FeedConfig, TiltDemo};
pub use error::{Result, RunnerError};
pub use sensor_feed::{ScriptedFeed, TiltFeedConfig, TiltFeedSimulator};
