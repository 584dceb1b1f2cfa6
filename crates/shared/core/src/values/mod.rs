use chrono::{DateTime, Utc};

/// Scalar rotation reading around one axis (radians or a quaternion component)
pub type OrientationSample = f64;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;
