mod direction;
mod intent;

pub use direction::{DirectionMap, RotationSense};
pub use intent::NavigationIntent;
