//! Tilt Clock Infrastructure
//!
//! Time sources for the gesture pipeline:
//!
//! - [`SystemClock`]: wall-clock time for production runs
//! - [`ManualClock`]: frozen time, moved only by explicit `advance` calls
//! - [`RuntimeClock`]: follows tokio's clock, so paused test time drives it
//!
//! ## Usage
//!
//! ```ignore
//! use tilt_clock::{Clock, ManualClock};
//! use chrono::Duration;
//!
//! let clock = ManualClock::starting_now();
//! let before = clock.now();
//! clock.advance(Duration::milliseconds(500));
//! assert_eq!(clock.now() - before, Duration::milliseconds(500));
//! ```

mod manual;
mod runtime;
mod system;

pub use manual::ManualClock;
pub use runtime::RuntimeClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use tilt_ports::Clock;
