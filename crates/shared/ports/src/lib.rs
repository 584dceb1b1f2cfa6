//! Tilt Ports
//!
//! Port definitions (traits) for tilt-driven paging.
//! These define the boundaries between gesture logic and the outside world:
//! the motion sensor, the paged view, and time.

mod clock;
mod error;
mod sensor;
mod view;

pub use clock::Clock;
pub use error::{SensorError, SensorResult};
pub use sensor::{OrientationSource, SensorReading};
pub use view::PagedView;
