mod attitude;
mod transition;

pub use attitude::{DeviceAttitude, Quaternion, RotationAxis};
pub use transition::RotationTransition;
