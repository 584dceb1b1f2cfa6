use serde::{Deserialize, Serialize};

use crate::values::OrientationSample;

/// Sign relationship between two consecutive rotation readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationTransition {
    /// Both readings below zero
    BothNegative,
    /// Both readings above zero
    BothPositive,
    /// Previous above zero, current below zero
    PositiveToNegative,
    /// Previous below zero, current above zero
    NegativeToPositive,
    /// A reading is exactly zero (or not comparable, e.g. NaN)
    Unchanged,
}

impl RotationTransition {
    /// Classify a (current, previous) pair by sign.
    ///
    /// Rules are checked in order and the first match wins. Zero and NaN
    /// fail every strict comparison, so they land on `Unchanged`.
    pub fn classify(current: OrientationSample, previous: OrientationSample) -> Self {
        if current < 0.0 && previous < 0.0 {
            RotationTransition::BothNegative
        } else if current > 0.0 && previous > 0.0 {
            RotationTransition::BothPositive
        } else if current < 0.0 && previous > 0.0 {
            RotationTransition::PositiveToNegative
        } else if current > 0.0 && previous < 0.0 {
            RotationTransition::NegativeToPositive
        } else {
            RotationTransition::Unchanged
        }
    }

    /// True when the reading crossed zero
    pub fn is_sign_flip(&self) -> bool {
        matches!(
            self,
            RotationTransition::PositiveToNegative | RotationTransition::NegativeToPositive
        )
    }
}
