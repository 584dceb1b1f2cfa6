//! Physical rotation sense and its mapping onto paging intents
//!
//! The classifier only knows which way the device turned. Whether turning
//! toward negative means "next" or "previous" depends on the pager layout,
//! so that choice lives in a [`DirectionMap`].

use serde::{Deserialize, Serialize};

use super::NavigationIntent;

/// Direction of a detected rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationSense {
    /// Signal moving toward (or further into) negative values
    TowardNegative,
    /// Signal moving toward (or further into) positive values
    TowardPositive,
}

/// Maps each rotation sense to a navigation intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionMap {
    pub toward_negative: NavigationIntent,
    pub toward_positive: NavigationIntent,
}

impl DirectionMap {
    /// Turning toward positive pages forward (side-scrolling carousel)
    pub const fn positive_advances() -> Self {
        Self {
            toward_negative: NavigationIntent::Retreat,
            toward_positive: NavigationIntent::Advance,
        }
    }

    /// Turning toward negative pages forward (top-down pager)
    pub const fn negative_advances() -> Self {
        Self {
            toward_negative: NavigationIntent::Advance,
            toward_positive: NavigationIntent::Retreat,
        }
    }

    /// Resolve a rotation sense to an intent
    pub fn intent_for(&self, sense: RotationSense) -> NavigationIntent {
        match sense {
            RotationSense::TowardNegative => self.toward_negative,
            RotationSense::TowardPositive => self.toward_positive,
        }
    }

    /// Swap both directions
    pub fn inverted(&self) -> Self {
        Self {
            toward_negative: self.toward_positive,
            toward_positive: self.toward_negative,
        }
    }
}

impl Default for DirectionMap {
    fn default() -> Self {
        Self::positive_advances()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_mirror_images() {
        let side = DirectionMap::positive_advances();
        let top_down = DirectionMap::negative_advances();

        assert_eq!(side.inverted(), top_down);
        assert_eq!(
            side.intent_for(RotationSense::TowardNegative),
            NavigationIntent::Retreat
        );
        assert_eq!(
            top_down.intent_for(RotationSense::TowardNegative),
            NavigationIntent::Advance
        );
    }

    #[test]
    fn test_intent_opposite() {
        assert_eq!(NavigationIntent::Advance.opposite(), NavigationIntent::Retreat);
        assert_eq!(NavigationIntent::Retreat.opposite(), NavigationIntent::Advance);
    }

    #[test]
    fn test_direction_map_json() {
        let json = r#"{"toward_negative":"advance","toward_positive":"retreat"}"#;
        let map: DirectionMap = serde_json::from_str(json).unwrap();
        assert_eq!(map, DirectionMap::negative_advances());
    }
}
