use serde::{Deserialize, Serialize};

use crate::values::OrientationSample;

/// Unit quaternion describing device orientation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Build from Euler angles (radians), ZYX order
    pub fn from_euler(roll: f64, pitch: f64, yaw: f64) -> Self {
        let (sr, cr) = (roll * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();
        let (sy, cy) = (yaw * 0.5).sin_cos();

        Self {
            x: sr * cp * cy - cr * sp * sy,
            y: cr * sp * cy + sr * cp * sy,
            z: cr * cp * sy - sr * sp * cy,
            w: cr * cp * cy + sr * sp * sy,
        }
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// One reading from the motion sensor
///
/// Carries both Euler angles and the quaternion so either can serve as the
/// rotation signal. They are not numerically interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DeviceAttitude {
    /// Rotation around the longitudinal axis (radians)
    pub roll: f64,
    /// Rotation around the lateral axis (radians)
    pub pitch: f64,
    /// Rotation around the vertical axis (radians)
    pub yaw: f64,
    /// Same orientation as a unit quaternion
    pub quaternion: Quaternion,
}

impl DeviceAttitude {
    /// Build an attitude from Euler angles, deriving the quaternion
    pub fn from_euler(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self {
            roll,
            pitch,
            yaw,
            quaternion: Quaternion::from_euler(roll, pitch, yaw),
        }
    }

    /// Attitude with only a roll component
    pub fn rolled(roll: f64) -> Self {
        Self::from_euler(roll, 0.0, 0.0)
    }

    /// Attitude rotated about a single axis so that `signal(axis) == value`
    ///
    /// Quaternion components are clamped to [-1, 1].
    pub fn from_signal(axis: RotationAxis, value: OrientationSample) -> Self {
        let half_angle = |v: f64| 2.0 * v.clamp(-1.0, 1.0).asin();
        match axis {
            RotationAxis::Roll => Self::from_euler(value, 0.0, 0.0),
            RotationAxis::Pitch => Self::from_euler(0.0, value, 0.0),
            RotationAxis::Yaw => Self::from_euler(0.0, 0.0, value),
            RotationAxis::QuaternionX => Self::from_euler(half_angle(value), 0.0, 0.0),
            RotationAxis::QuaternionY => Self::from_euler(0.0, half_angle(value), 0.0),
            RotationAxis::QuaternionZ => Self::from_euler(0.0, 0.0, half_angle(value)),
        }
    }

    /// Extract the scalar rotation signal for an axis
    pub fn signal(&self, axis: RotationAxis) -> OrientationSample {
        match axis {
            RotationAxis::Roll => self.roll,
            RotationAxis::Pitch => self.pitch,
            RotationAxis::Yaw => self.yaw,
            RotationAxis::QuaternionX => self.quaternion.x,
            RotationAxis::QuaternionY => self.quaternion.y,
            RotationAxis::QuaternionZ => self.quaternion.z,
        }
    }
}

/// Which component of the attitude drives classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationAxis {
    #[default]
    Roll,
    Pitch,
    Yaw,
    QuaternionX,
    QuaternionY,
    QuaternionZ,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_extraction() {
        let attitude = DeviceAttitude::from_euler(0.3, -0.1, 0.7);
        assert_eq!(attitude.signal(RotationAxis::Roll), 0.3);
        assert_eq!(attitude.signal(RotationAxis::Pitch), -0.1);
        assert_eq!(attitude.signal(RotationAxis::Yaw), 0.7);
        assert_eq!(
            attitude.signal(RotationAxis::QuaternionX),
            attitude.quaternion.x
        );
    }

    #[test]
    fn test_pure_roll_quaternion() {
        let attitude = DeviceAttitude::rolled(0.4);
        let q = attitude.quaternion;

        // Pure roll only touches x and w
        assert!((q.x - (0.2f64).sin()).abs() < 1e-12);
        assert!((q.w - (0.2f64).cos()).abs() < 1e-12);
        assert!(q.y.abs() < 1e-12 && q.z.abs() < 1e-12);

        // Same sign as roll, smaller magnitude
        assert!(q.x > 0.0 && q.x < attitude.roll);
    }

    #[test]
    fn test_from_signal_round_trips_each_axis() {
        for axis in [
            RotationAxis::Roll,
            RotationAxis::Pitch,
            RotationAxis::Yaw,
            RotationAxis::QuaternionX,
            RotationAxis::QuaternionY,
            RotationAxis::QuaternionZ,
        ] {
            let attitude = DeviceAttitude::from_signal(axis, -0.35);
            assert!((attitude.signal(axis) + 0.35).abs() < 1e-12, "{:?}", axis);
        }
    }

    #[test]
    fn test_identity_default() {
        let attitude = DeviceAttitude::default();
        assert_eq!(attitude.quaternion, Quaternion::IDENTITY);
        assert_eq!(attitude.signal(RotationAxis::QuaternionZ), 0.0);
    }

    #[test]
    fn test_axis_serde_names() {
        let json = serde_json::to_string(&RotationAxis::QuaternionX).unwrap();
        assert_eq!(json, "\"quaternion_x\"");
        let axis: RotationAxis = serde_json::from_str("\"roll\"").unwrap();
        assert_eq!(axis, RotationAxis::Roll);
    }
}
