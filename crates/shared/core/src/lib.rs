//! Tilt Core Domain
//!
//! Pure domain types for tilt-driven paging.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod motion;
pub mod navigation;
pub mod values;

// Re-export commonly used types at crate root
pub use motion::{DeviceAttitude, Quaternion, RotationAxis, RotationTransition};
pub use navigation::{DirectionMap, NavigationIntent, RotationSense};
pub use values::{OrientationSample, Timestamp};
